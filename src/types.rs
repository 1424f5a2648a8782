use num_traits::{Float, NumAssign};
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{Product, Sum};

/// The float precision of the simulation.
pub trait Precision:
    Default + NumAssign + Float + Sum + Send + Sync + Display + Product + Debug
{
}

impl Precision for f64 {}

impl Precision for f32 {}

/// A candidate side length.
pub type Length = u64;

/// An ordered pair of lengths. Once encoded the order no longer matters, `(a, b)` and `(b, a)`
/// produce the same state.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Pair {
    /// First element, stored in the leading register.
    pub first: Length,
    /// Second element, stored in the trailing register.
    pub second: Length,
}

impl Pair {
    /// Make a new pair.
    pub fn new(first: Length, second: Length) -> Self {
        Self { first, second }
    }

    /// The same pair with its elements exchanged.
    pub fn swapped(self) -> Self {
        Self::new(self.second, self.first)
    }

    /// The larger of the two elements.
    pub fn max(self) -> Length {
        self.first.max(self.second)
    }

    /// Whether both elements are the same length.
    pub fn is_degenerate(self) -> bool {
        self.first == self.second
    }
}

impl From<(Length, Length)> for Pair {
    fn from((first, second): (Length, Length)) -> Self {
        Self::new(first, second)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
