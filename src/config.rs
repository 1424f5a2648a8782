use crate::errors::{RectangleError, RectangleResult};
use crate::types::Length;
use crate::utils::bits_needed;

/// Widest register the simulator accepts. A swap test over two pair states uses `4 * bits + 1`
/// qubits, so this keeps the largest state vector at 2^21 amplitudes.
pub const MAX_REGISTER_BITS: usize = 5;

/// Default distance from 1.0 within which a swap test counts as "identical".
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Largest accepted deviation of a prepared state's squared norm from 1.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// How many qubits each length register gets.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RegisterWidth {
    /// Just wide enough for the largest length being checked (at least one bit).
    Fit,
    /// A fixed number of bits regardless of input.
    Fixed(usize),
}

/// Settings for rectangle checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleConfig {
    /// Register width policy.
    pub register_width: RegisterWidth,
    /// Swap-test tolerance, see [`DEFAULT_TOLERANCE`].
    pub tolerance: f64,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            register_width: RegisterWidth::Fit,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RectangleConfig {
    /// Use a fixed register width of `bits`.
    pub fn with_register_bits(mut self, bits: usize) -> Self {
        self.register_width = RegisterWidth::Fixed(bits);
        self
    }

    /// Use tolerance `tolerance`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> RectangleResult<()> {
        check_tolerance(self.tolerance)?;
        if let RegisterWidth::Fixed(bits) = self.register_width {
            check_register_bits(bits, 0)?;
        }
        Ok(())
    }

    /// The register width to use for `lengths`. Fails if any of them does not fit.
    ///
    /// # Example
    /// ```
    /// use qrect::config::RectangleConfig;
    ///
    /// let config = RectangleConfig::default();
    /// assert_eq!(config.register_bits_for(&[2, 4, 4, 2]).unwrap(), 3);
    /// assert_eq!(config.register_bits_for(&[0, 0, 1, 1]).unwrap(), 1);
    /// assert!(config.register_bits_for(&[32, 1, 1, 32]).is_err());
    /// ```
    pub fn register_bits_for(&self, lengths: &[Length]) -> RectangleResult<usize> {
        let largest = lengths.iter().copied().max().unwrap_or(0);
        let bits = match self.register_width {
            RegisterWidth::Fit => bits_needed(largest),
            RegisterWidth::Fixed(bits) => bits,
        };
        check_register_bits(bits, largest)?;
        if bits_needed(largest) > bits {
            return Err(RectangleError::EncodingOverflow {
                value: largest,
                bits,
            });
        }
        Ok(bits)
    }
}

/// Tolerances must separate the identical (1.0) and orthogonal (0.5) outcomes.
pub(crate) fn check_tolerance(tolerance: f64) -> RectangleResult<()> {
    if tolerance > 0.0 && tolerance <= 0.25 {
        Ok(())
    } else {
        Err(RectangleError::InvalidTolerance(tolerance))
    }
}

/// A register must hold at least one bit and fit the simulator.
pub(crate) fn check_register_bits(bits: usize, value: Length) -> RectangleResult<()> {
    if bits == 0 || bits > MAX_REGISTER_BITS {
        Err(RectangleError::EncodingOverflow { value, bits })
    } else {
        Ok(())
    }
}
