use crate::types::Length;

/// An error from encoding, building or simulating a comparison circuit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RectangleError {
    /// A side length of zero.
    #[error("side length {value} must be greater than 0")]
    InvalidLength {
        /// Offending length.
        value: Length,
    },
    /// A length does not fit in the register width.
    #[error("length {value} does not fit in a {bits}-bit register")]
    EncodingOverflow {
        /// Offending length.
        value: Length,
        /// Register width in bits.
        bits: usize,
    },
    /// The two sides of a swap test were prepared on different numbers of qubits.
    #[error("swap test expected a {expected}-qubit state, found {found} qubits")]
    QubitCountMismatch {
        /// Qubit count the circuit was built for.
        expected: usize,
        /// Qubit count of the prepared state.
        found: usize,
    },
    /// A prepared state was not unit-normalized.
    #[error("prepared state has squared norm {norm}, expected 1")]
    InvalidStateNorm {
        /// Squared norm of the offending state.
        norm: f64,
    },
    /// An amplitude vector whose length is not a power of two.
    #[error("amplitude vector of length {len} does not describe a whole number of qubits")]
    InvalidStateLength {
        /// Length of the amplitude vector.
        len: usize,
    },
    /// A comparison tolerance outside of `(0, 0.25]`.
    #[error("tolerance {0} must lie in (0, 0.25]")]
    InvalidTolerance(f64),
    /// A sampled estimate was requested with zero shots.
    #[error("shot count must be positive")]
    InvalidShots,
    /// A circuit operator was constructed from inconsistent parts.
    #[error("invalid circuit operator: {0}")]
    InvalidOperator(String),
}

impl RectangleError {
    /// Construct an operator error.
    pub fn operator<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidOperator(msg.into())
    }

    /// Whether this error can only come from a defect in circuit construction, as opposed to
    /// caller supplied input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::QubitCountMismatch { .. }
                | Self::InvalidStateNorm { .. }
                | Self::InvalidStateLength { .. }
                | Self::InvalidOperator(_)
        )
    }
}

/// A result which may contain a rectangle error.
pub type RectangleResult<T> = Result<T, RectangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors() {
        assert!(!RectangleError::EncodingOverflow { value: 9, bits: 3 }.is_internal());
        assert!(!RectangleError::InvalidShots.is_internal());
        assert!(!RectangleError::InvalidLength { value: 0 }.is_internal());
        assert!(RectangleError::QubitCountMismatch {
            expected: 4,
            found: 2
        }
        .is_internal());
        assert!(RectangleError::InvalidStateNorm { norm: 2.0 }.is_internal());
        assert!(RectangleError::operator("empty").is_internal());
    }

    #[test]
    fn test_display() {
        let err = RectangleError::EncodingOverflow { value: 9, bits: 3 };
        assert_eq!(err.to_string(), "length 9 does not fit in a 3-bit register");
    }
}
