use crate::config::{check_register_bits, check_tolerance, DEFAULT_TOLERANCE};
use crate::encoder::encode;
use crate::errors::RectangleResult;
use crate::state::QuantumState;
use crate::swap_test::SwapTestCircuit;
use crate::types::{Pair, Precision};
use rand::Rng;

/// Outcome of comparing two pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairComparison<P: Precision> {
    /// Swap-test probability of the ancilla reading 0.
    pub probability: P,
    /// Whether the pairs hold the same lengths.
    pub equal: bool,
}

/// Decides whether two pairs hold the same unordered lengths by swap-testing their encodings.
#[derive(Clone, Copy, Debug)]
pub struct PairComparator<P: Precision> {
    register_bits: usize,
    tolerance: P,
}

impl<P: Precision> PairComparator<P> {
    /// Comparator for lengths of at most `register_bits` bits, counting probabilities of at least
    /// `1 - tolerance` as equal.
    pub fn new(register_bits: usize, tolerance: f64) -> RectangleResult<Self> {
        check_tolerance(tolerance)?;
        check_register_bits(register_bits, 0)?;
        Ok(Self {
            register_bits,
            tolerance: P::from(tolerance).unwrap_or_else(P::zero),
        })
    }

    /// Comparator with [`DEFAULT_TOLERANCE`].
    pub fn with_register_bits(register_bits: usize) -> RectangleResult<Self> {
        Self::new(register_bits, DEFAULT_TOLERANCE)
    }

    /// Bits per length register.
    pub fn register_bits(&self) -> usize {
        self.register_bits
    }

    /// The swap test this comparator runs, over two pair states of `2 * register_bits` qubits.
    pub fn circuit(&self) -> RectangleResult<SwapTestCircuit<P>> {
        SwapTestCircuit::new(2 * self.register_bits)
    }

    fn encode_both(
        &self,
        a: Pair,
        b: Pair,
    ) -> RectangleResult<(QuantumState<P>, QuantumState<P>)> {
        Ok((encode(a, self.register_bits)?, encode(b, self.register_bits)?))
    }

    fn judge(&self, probability: P) -> PairComparison<P> {
        PairComparison {
            probability,
            equal: probability >= P::one() - self.tolerance,
        }
    }

    /// Swap-test `a` against `b`.
    pub fn compare(&self, a: Pair, b: Pair) -> RectangleResult<PairComparison<P>> {
        let (left, right) = self.encode_both(a, b)?;
        let probability = self.circuit()?.run(&left, &right)?;
        let comparison = self.judge(probability);
        tracing::debug!(
            %a,
            %b,
            probability = %comparison.probability,
            equal = comparison.equal,
            "compared pairs"
        );
        Ok(comparison)
    }

    /// Whether `a` and `b` hold the same lengths.
    pub fn pairs_equal(&self, a: Pair, b: Pair) -> RectangleResult<bool> {
        self.compare(a, b).map(|c| c.equal)
    }

    /// Like [`PairComparator::compare`], with the probability estimated from `shots` sampled
    /// measurements rather than read off the state.
    pub fn estimate<R: Rng>(
        &self,
        a: Pair,
        b: Pair,
        shots: usize,
        rng: &mut R,
    ) -> RectangleResult<PairComparison<P>> {
        let (left, right) = self.encode_both(a, b)?;
        let probability = self
            .circuit()?
            .estimate_probability(&left, &right, shots, rng)?;
        Ok(self.judge(probability))
    }
}

/// Whether `a` and `b` hold the same lengths, using `register_bits` bits per length and the given
/// tolerance.
///
/// # Example
/// ```
/// use qrect::comparator::pairs_equal;
/// use qrect::types::Pair;
///
/// assert!(pairs_equal(Pair::new(5, 6), Pair::new(6, 5), 3, 1e-6).unwrap());
/// assert!(!pairs_equal(Pair::new(5, 6), Pair::new(5, 7), 3, 1e-6).unwrap());
/// ```
pub fn pairs_equal(a: Pair, b: Pair, register_bits: usize, tolerance: f64) -> RectangleResult<bool> {
    PairComparator::<f64>::new(register_bits, tolerance)?.pairs_equal(a, b)
}
