use crate::config::NORM_TOLERANCE;
use crate::errors::{RectangleError, RectangleResult};
use crate::state_ops::matrix_ops::kron;
use crate::state_ops::measurement_ops::prob_magnitude;
use crate::{Complex, Precision};
use num_traits::{One, Zero};

/// A simulated state of `n` qubits, stored big-endian: qubit 0 is the most significant bit of
/// the amplitude index.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantumState<P: Precision> {
    n: usize,
    amplitudes: Vec<Complex<P>>,
}

impl<P: Precision> QuantumState<P> {
    /// Wrap an amplitude vector. Its length must be a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex<P>>) -> RectangleResult<Self> {
        let len = amplitudes.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(RectangleError::InvalidStateLength { len });
        }
        Ok(Self {
            n: len.trailing_zeros() as usize,
            amplitudes,
        })
    }

    /// The computational basis state `|index>` on `n` qubits.
    pub fn basis(n: usize, index: usize) -> Self {
        let mut amplitudes = vec![Complex::zero(); 1 << n];
        amplitudes[index] = Complex::one();
        Self { n, amplitudes }
    }

    /// Number of qubits.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Amplitudes in big-endian order.
    pub fn amplitudes(&self) -> &[Complex<P>] {
        &self.amplitudes
    }

    /// Amplitude of the basis state `|index>`.
    pub fn amplitude(&self, index: usize) -> Complex<P> {
        self.amplitudes[index]
    }

    /// Consume the state, returning its big-endian amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex<P>> {
        self.amplitudes
    }

    /// Squared norm, 1 for a physical state.
    pub fn norm_sqr(&self) -> P {
        prob_magnitude(&self.amplitudes)
    }

    /// Fails with [`RectangleError::InvalidStateNorm`] unless the squared norm is within
    /// [`NORM_TOLERANCE`] of one (or a few ulps for precisions coarser than f64).
    pub fn check_normalized(&self) -> RectangleResult<()> {
        let norm = self.norm_sqr().to_f64().unwrap_or(f64::NAN);
        let ulps = P::epsilon().to_f64().unwrap_or(0.0) * 64.0;
        if (norm - 1.0).abs() <= NORM_TOLERANCE.max(ulps) {
            Ok(())
        } else {
            Err(RectangleError::InvalidStateNorm { norm })
        }
    }

    /// `self (x) other`, with `self` on the leading qubits.
    pub fn tensor(&self, other: &Self) -> Self {
        Self {
            n: self.n + other.n,
            amplitudes: kron(&self.amplitudes, &other.amplitudes),
        }
    }

    /// Inner product `<self|other>`. Fails if the states have different qubit counts.
    pub fn overlap(&self, other: &Self) -> RectangleResult<Complex<P>> {
        if self.n != other.n {
            return Err(RectangleError::QubitCountMismatch {
                expected: self.n,
                found: other.n,
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Indices of basis states with nonzero amplitude.
    pub fn support(&self) -> Vec<usize> {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(_, amp)| !amp.is_zero())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_ops::matrix_ops::from_reals;

    #[test]
    fn test_from_amplitudes() {
        let s = QuantumState::from_amplitudes(from_reals(&[1.0, 0.0, 0.0, 0.0])).unwrap();
        assert_eq!(s.n(), 2);
        assert!(s.check_normalized().is_ok());

        assert_eq!(
            QuantumState::<f64>::from_amplitudes(from_reals(&[1.0, 0.0, 0.0])),
            Err(RectangleError::InvalidStateLength { len: 3 })
        );
        assert_eq!(
            QuantumState::<f64>::from_amplitudes(vec![]),
            Err(RectangleError::InvalidStateLength { len: 0 })
        );
    }

    #[test]
    fn test_unnormalized() {
        let s = QuantumState::from_amplitudes(from_reals(&[1.0, 1.0])).unwrap();
        assert_eq!(
            s.check_normalized(),
            Err(RectangleError::InvalidStateNorm { norm: 2.0 })
        );
    }

    #[test]
    fn test_tensor_basis() {
        let a = QuantumState::<f64>::basis(2, 0b10);
        let b = QuantumState::<f64>::basis(1, 0b1);
        let s = a.tensor(&b);
        assert_eq!(s.n(), 3);
        assert_eq!(s.support(), vec![0b101]);
    }

    #[test]
    fn test_overlap() {
        let half = 0.5f64.sqrt();
        let plus = QuantumState::from_amplitudes(from_reals(&[half, half])).unwrap();
        let zero = QuantumState::<f64>::basis(1, 0);
        let one = QuantumState::<f64>::basis(1, 1);
        assert_eq!(zero.overlap(&one).unwrap(), Complex::zero());
        assert!((plus.overlap(&zero).unwrap().re - half).abs() < 1e-12);
        assert!(zero.overlap(&QuantumState::basis(2, 0)).is_err());
    }

    #[test]
    fn test_big_endian_amplitudes() {
        // |q0 q1 q2> = |100> is index 4.
        let s = QuantumState::<f64>::basis(3, 0b100);
        let amps = s.into_amplitudes();
        assert_eq!(amps[0b100], Complex::one());
        assert_eq!(amps.iter().filter(|c| !c.is_zero()).count(), 1);
    }
}
