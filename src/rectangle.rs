#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::comparator::{PairComparator, PairComparison};
use crate::config::RectangleConfig;
use crate::errors::{RectangleError, RectangleResult};
use crate::iter;
use crate::types::{Length, Pair, Precision};
use rand::Rng;
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;

/// Positions of the four lengths making up each pairing, checked in this order.
pub const PAIRINGS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 3, 1, 2]];

/// The three ways to split four lengths into two pairs:
/// `(a,b) vs (c,d)`, `(a,c) vs (b,d)` and `(a,d) vs (b,c)`.
///
/// # Example
/// ```
/// use qrect::rectangle::pairings;
/// use qrect::types::Pair;
///
/// let p = pairings([1, 2, 3, 4]);
/// assert_eq!(p[1], (Pair::new(1, 3), Pair::new(2, 4)));
/// ```
pub fn pairings(lengths: [Length; 4]) -> [(Pair, Pair); 3] {
    PAIRINGS.map(|[w, x, y, z]| {
        (
            Pair::new(lengths[w], lengths[x]),
            Pair::new(lengths[y], lengths[z]),
        )
    })
}

/// All three comparisons made for one set of lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleReport<P: Precision> {
    /// Lengths as given.
    pub lengths: [Length; 4],
    /// Bits per length register used for the comparisons.
    pub register_bits: usize,
    /// Each pairing with its comparison, in [`PAIRINGS`] order.
    pub comparisons: Vec<(Pair, Pair, PairComparison<P>)>,
    /// Whether any pairing matched.
    pub is_rectangle: bool,
}

impl<P: Precision> Display for RectangleReport<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (a, b, c) in &self.comparisons {
            let verdict = if c.equal { "equal" } else { "different" };
            writeln!(f, "{} vs {}: P(0) = {:.6} ({})", a, b, c.probability, verdict)?;
        }
        write!(
            f,
            "{:?} ({} bits per register): {}",
            self.lengths,
            self.register_bits,
            if self.is_rectangle {
                "rectangle"
            } else {
                "not a rectangle"
            }
        )
    }
}

/// Checks whether four lengths can form a rectangle.
#[derive(Clone, Copy, Debug)]
pub struct RectangleChecker<P: Precision> {
    config: RectangleConfig,
    phantom: PhantomData<P>,
}

impl<P: Precision> Default for RectangleChecker<P> {
    fn default() -> Self {
        Self {
            config: RectangleConfig::default(),
            phantom: PhantomData,
        }
    }
}

impl<P: Precision> RectangleChecker<P> {
    /// Make a checker with `config`.
    pub fn new(config: RectangleConfig) -> RectangleResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phantom: PhantomData,
        })
    }

    /// The settings in use.
    pub fn config(&self) -> &RectangleConfig {
        &self.config
    }

    /// A comparator wide enough for `lengths`. Every length must be positive.
    pub fn comparator_for(&self, lengths: [Length; 4]) -> RectangleResult<PairComparator<P>> {
        if let Some(&value) = lengths.iter().find(|l| **l == 0) {
            return Err(RectangleError::InvalidLength { value });
        }
        let bits = self.config.register_bits_for(&lengths)?;
        PairComparator::new(bits, self.config.tolerance)
    }

    /// Whether `a`, `b`, `c` and `d` can be the sides of a rectangle. Stops at the first
    /// matching pairing.
    pub fn is_rectangle(&self, a: Length, b: Length, c: Length, d: Length) -> RectangleResult<bool> {
        let lengths = [a, b, c, d];
        let comparator = self.comparator_for(lengths)?;
        for (left, right) in pairings(lengths) {
            if comparator.pairs_equal(left, right)? {
                tracing::debug!(?lengths, %left, %right, "rectangle found");
                return Ok(true);
            }
        }
        tracing::debug!(?lengths, "no matching pairing");
        Ok(false)
    }

    /// Evaluate every pairing, without stopping early.
    pub fn report(
        &self,
        a: Length,
        b: Length,
        c: Length,
        d: Length,
    ) -> RectangleResult<RectangleReport<P>> {
        let lengths = [a, b, c, d];
        let comparator = self.comparator_for(lengths)?;
        self.build_report(lengths, &comparator, |l, r| comparator.compare(l, r))
    }

    /// Like [`RectangleChecker::report`], with probabilities estimated from `shots` sampled
    /// measurements per pairing.
    pub fn sampled_report<R: Rng>(
        &self,
        lengths: [Length; 4],
        shots: usize,
        rng: &mut R,
    ) -> RectangleResult<RectangleReport<P>> {
        let comparator = self.comparator_for(lengths)?;
        self.build_report(lengths, &comparator, |l, r| {
            comparator.estimate(l, r, shots, rng)
        })
    }

    fn build_report<F>(
        &self,
        lengths: [Length; 4],
        comparator: &PairComparator<P>,
        mut compare: F,
    ) -> RectangleResult<RectangleReport<P>>
    where
        F: FnMut(Pair, Pair) -> RectangleResult<PairComparison<P>>,
    {
        let comparisons = pairings(lengths)
            .into_iter()
            .map(|(l, r)| compare(l, r).map(|c| (l, r, c)))
            .collect::<RectangleResult<Vec<_>>>()?;
        let is_rectangle = comparisons.iter().any(|(_, _, c)| c.equal);
        Ok(RectangleReport {
            lengths,
            register_bits: comparator.register_bits(),
            comparisons,
            is_rectangle,
        })
    }

    /// Check many sets of lengths, in parallel when the `parallel` feature is on. Results are in
    /// input order.
    pub fn are_rectangles(&self, quads: &[[Length; 4]]) -> Vec<RectangleResult<bool>> {
        iter!(quads)
            .map(|[a, b, c, d]| self.is_rectangle(*a, *b, *c, *d))
            .collect()
    }
}

/// Whether `a`, `b`, `c` and `d` can be the sides of a rectangle, using the default settings.
///
/// # Example
/// ```
/// use qrect::is_rectangle;
///
/// assert!(is_rectangle(2, 4, 4, 2).unwrap());
/// assert!(!is_rectangle(1, 2, 3, 3).unwrap());
/// ```
pub fn is_rectangle(a: Length, b: Length, c: Length, d: Length) -> RectangleResult<bool> {
    RectangleChecker::<f64>::default().is_rectangle(a, b, c, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RectangleConfig;

    #[test]
    fn test_pairings_cover_all_matchings() {
        let p = pairings([1, 2, 3, 4]);
        assert_eq!(p[0], (Pair::new(1, 2), Pair::new(3, 4)));
        assert_eq!(p[1], (Pair::new(1, 3), Pair::new(2, 4)));
        assert_eq!(p[2], (Pair::new(1, 4), Pair::new(2, 3)));
    }

    #[test]
    fn test_report_probabilities() {
        let checker = RectangleChecker::<f64>::default();
        let report = checker.report(5, 6, 6, 5).unwrap();
        assert!(report.is_rectangle);
        assert_eq!(report.register_bits, 3);
        let equal: Vec<bool> = report.comparisons.iter().map(|(_, _, c)| c.equal).collect();
        // (5,6) vs (6,5) twice, then (5,5) vs (6,6)
        assert_eq!(equal, vec![true, true, false]);
        assert!((report.comparisons[0].2.probability - 1.0).abs() < 1e-12);
        assert!((report.comparisons[2].2.probability - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_report_display() {
        let checker = RectangleChecker::<f64>::default();
        let report = checker.report(1, 2, 3, 3).unwrap();
        let text = report.to_string();
        assert!(text.contains("(1, 2) vs (3, 3): P(0) = 0.500000 (different)"));
        assert!(text.ends_with("not a rectangle"));
    }

    #[test]
    fn test_fixed_width_checker() {
        let config = RectangleConfig::default().with_register_bits(4);
        let checker = RectangleChecker::<f64>::new(config).unwrap();
        assert!(checker.is_rectangle(1, 1, 2, 2).unwrap());
        assert_eq!(checker.report(1, 1, 2, 2).unwrap().register_bits, 4);
    }

    #[test]
    fn test_zero_length_rejected() {
        let checker = RectangleChecker::<f64>::default();
        let expected = Err(RectangleError::InvalidLength { value: 0 });
        assert_eq!(checker.is_rectangle(0, 0, 9, 9), expected);
        assert_eq!(checker.is_rectangle(0, 0, 0, 0), expected);
        assert_eq!(checker.report(4, 0, 4, 1).map(|r| r.is_rectangle), expected);
    }

    #[test]
    fn test_invalid_config() {
        let config = RectangleConfig::default().with_tolerance(0.4);
        assert!(RectangleChecker::<f64>::new(config).is_err());
    }
}
