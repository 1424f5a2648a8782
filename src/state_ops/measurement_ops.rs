#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::utils::full_to_sub;
use crate::{into_iter, iter};
use crate::{Complex, Precision};
use rand::Rng;

/// Get total magnitude of state.
pub fn prob_magnitude<P: Precision>(input: &[Complex<P>]) -> P {
    iter!(input).map(Complex::<P>::norm_sqr).sum()
}

/// Calculate the probability of a given measurement. `measured` gives the bits (as a usize) which
/// have been measured from the qubits at `indices`, the first index being the most significant
/// bit. `input` gives the state from which to measure, representing a total of `n` qubits.
///
/// Keep in mind that qubits are big-endian to match kron product standards.
/// `|abc>` means `q0=a`, `q1=b`, `q2=c`
///
/// # Examples
/// ```
/// use qrect::state_ops::matrix_ops::from_reals;
/// use qrect::state_ops::measurement_ops::measure_prob;
///
/// // Make the state |10>
/// let input = from_reals(&[0.0, 0.0, 1.0, 0.0]);
///
/// let p = measure_prob(2, 0, &[0], &input);
/// assert_eq!(p, 0.0);
///
/// let p = measure_prob(2, 1, &[0], &input);
/// assert_eq!(p, 1.0);
///
/// let p = measure_prob(2, 0b10, &[0, 1], &input);
/// assert_eq!(p, 1.0);
///
/// let p = measure_prob(2, 0b01, &[1, 0], &input);
/// assert_eq!(p, 1.0);
/// ```
pub fn measure_prob<P: Precision>(
    n: usize,
    measured: usize,
    indices: &[usize],
    input: &[Complex<P>],
) -> P {
    iter!(input)
        .enumerate()
        .filter(|(row, _)| full_to_sub(n, indices, *row) == measured)
        .map(|(_, amp)| amp.norm_sqr())
        .sum()
}

/// Get probability for each possible measurement of `indices` on `input`.
pub fn measure_probs<P: Precision>(n: usize, indices: &[usize], input: &[Complex<P>]) -> Vec<P> {
    let r = 0usize..1 << indices.len();
    into_iter!(r)
        .map(|measured| measure_prob(n, measured, indices, input))
        .collect()
}

/// Pick an outcome from the distribution `probs` using `rng`. `probs` need not sum to exactly one,
/// outcomes of zero probability are never picked.
pub fn sample_outcome<P: Precision, R: Rng>(probs: &[P], rng: &mut R) -> usize {
    let total: P = probs.iter().copied().sum();
    let r = P::from(rng.gen::<f64>()).unwrap_or_else(P::zero) * total;
    let mut acc = P::zero();
    for (outcome, p) in probs.iter().enumerate() {
        acc += *p;
        if r < acc {
            return outcome;
        }
    }
    // Rounding left r at the very top of the range, fall back on the last possible outcome.
    probs
        .iter()
        .rposition(|p| !p.is_zero())
        .unwrap_or(0)
}

/// Sample `shots` measurements of the qubits `indices` of `input` and count how often each
/// outcome appeared. The returned vector has one entry per outcome.
pub fn sample_counts<P: Precision, R: Rng>(
    n: usize,
    indices: &[usize],
    input: &[Complex<P>],
    shots: usize,
    rng: &mut R,
) -> Vec<usize> {
    let probs = measure_probs(n, indices, input);
    let mut counts = vec![0; probs.len()];
    (0..shots).for_each(|_| counts[sample_outcome(&probs, rng)] += 1);
    counts
}
