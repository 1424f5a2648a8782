#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    missing_docs
)]

//! Decides whether four side lengths can form a rectangle, using a simulated swap test.
//!
//! Four lengths make a rectangle when they split into two equal pairs. Each pair `(a, b)` is
//! encoded as the state `|a>|b> + |b>|a>`, which does not depend on the order of `a` and `b`.
//! Two encoded pairs hold the same lengths exactly when their states are identical, and
//! different lengths give orthogonal states. A swap test tells the two apart: its ancilla reads
//! 0 with probability 1 for identical states and 1/2 for orthogonal ones.
//!
//! # Example
//! ```
//! use qrect::prelude::*;
//!
//! # fn main() -> RectangleResult<()> {
//! // Two pairs of equal sides.
//! assert!(is_rectangle(5, 6, 6, 5)?);
//! // Four different sides.
//! assert!(!is_rectangle(5, 6, 7, 8)?);
//!
//! // Inspect the three comparisons.
//! let checker = RectangleChecker::<f64>::default();
//! let report = checker.report(2, 2, 5, 5)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! # Swap tests on arbitrary states
//! ```
//! use qrect::prelude::*;
//! use qrect::state_ops::matrix_ops::from_reals;
//!
//! # fn main() -> RectangleResult<()> {
//! let half = 0.5f64.sqrt();
//! let plus = QuantumState::from_amplitudes(from_reals(&[half, half]))?;
//! let zero = QuantumState::basis(1, 0);
//!
//! // |<+|0>|^2 = 1/2, so P(0) = 3/4
//! let p: f64 = swap_test_probability(|| plus, || zero, 1)?;
//! assert!((p - 0.75).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

/// Pair comparison by swap test.
pub mod comparator;
/// Register width and tolerance settings.
pub mod config;
/// Encoding of length pairs into states.
pub mod encoder;
/// Error types.
pub mod errors;
/// OpenQASM export.
pub mod qasm;
/// Helpers for converting from synchronous to parallel iterators.
pub mod rayon_helper;
/// The rectangle decision.
pub mod rectangle;
/// Simulated quantum states.
pub mod state;
/// Lower-level state operations.
pub mod state_ops;
/// Reusable types.
pub mod types;
pub mod utils;

pub use num_complex::Complex;
pub use rand;
pub use rectangle::is_rectangle;
pub use types::*;

/// Commonly used types and functions.
/// ```
/// use qrect::prelude::*;
/// ```
pub mod prelude {
    pub use super::*;
    pub use crate::comparator::{pairs_equal, PairComparator, PairComparison};
    pub use crate::config::{RectangleConfig, RegisterWidth};
    pub use crate::encoder::encode;
    pub use crate::errors::*;
    pub use crate::qasm::ToOpenQasm;
    pub use crate::rectangle::{RectangleChecker, RectangleReport};
    pub use crate::state::QuantumState;
    pub use crate::swap_test::{swap_test_probability, SwapTestCircuit};
}
