use crate::config::check_register_bits;
use crate::errors::{RectangleError, RectangleResult};
use crate::state::QuantumState;
use crate::types::{Length, Pair};
use crate::{Complex, Precision};
use num_traits::Zero;

/// Basis index of `|first>|second>` with each value written on `register_bits` qubits, `first`
/// on the leading register.
pub fn pair_index(pair: Pair, register_bits: usize) -> RectangleResult<usize> {
    check_register_bits(register_bits, pair.max())?;
    let first = register_value(pair.first, register_bits)?;
    let second = register_value(pair.second, register_bits)?;
    Ok((first << register_bits) | second)
}

fn register_value(value: Length, register_bits: usize) -> RectangleResult<usize> {
    if value >> register_bits != 0 {
        return Err(RectangleError::EncodingOverflow {
            value,
            bits: register_bits,
        });
    }
    usize::try_from(value).map_err(|_| RectangleError::EncodingOverflow {
        value,
        bits: register_bits,
    })
}

/// Encode `pair` into the normalized state `|first>|second> + |second>|first>` on
/// `2 * register_bits` qubits.
///
/// When both elements are equal the two terms are the same basis state, which then carries
/// amplitude 1.
///
/// # Example
/// ```
/// use qrect::encoder::encode;
/// use qrect::types::Pair;
///
/// let s = encode::<f64>(Pair::new(1, 2), 2).unwrap();
/// assert_eq!(s.n(), 4);
/// assert_eq!(s.support(), vec![0b0110, 0b1001]);
///
/// let s = encode::<f64>(Pair::new(3, 3), 2).unwrap();
/// assert_eq!(s.support(), vec![0b1111]);
/// assert_eq!(s.amplitude(0b1111).re, 1.0);
/// ```
pub fn encode<P: Precision>(pair: Pair, register_bits: usize) -> RectangleResult<QuantumState<P>> {
    let forward = pair_index(pair, register_bits)?;
    let backward = pair_index(pair.swapped(), register_bits)?;

    let n = 2 * register_bits;
    if pair.is_degenerate() {
        return Ok(QuantumState::basis(n, forward));
    }

    let amp = Complex::new((P::one() + P::one()).sqrt().recip(), P::zero());
    let mut amplitudes = vec![Complex::zero(); 1 << n];
    amplitudes[forward] = amp;
    amplitudes[backward] = amp;
    QuantumState::from_amplitudes(amplitudes)
}
