// ============================================================================
// Numeric Errors
// Error types for bounded numeric dispatch
// ============================================================================

use super::kind::NumericKind;
use std::fmt;

/// Errors that can occur while adding bounded numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand type is outside the six supported kinds
    UnsupportedKind {
        /// `std::any::type_name` of the rejected type
        type_name: &'static str,
    },
    /// Operands carry different kinds
    KindMismatch {
        left: NumericKind,
        right: NumericKind,
    },
    /// Result exceeded the kind's maximum (checked policy only)
    Overflow,
    /// Result below the kind's minimum (checked policy only)
    Underflow,
    /// Floating-point sum was NaN or infinite while non-finite results are disallowed
    NonFinite,
    /// Batch summation received no operands
    EmptyInput,
    /// Batch summation received more operands than configured.
    /// `len` counts operands pulled, which stops one past `max`.
    BatchTooLarge { len: usize, max: usize },
    /// Adder configuration failed validation
    InvalidConfig(&'static str),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::UnsupportedKind { type_name } => {
                write!(f, "unsupported numeric kind: {}", type_name)
            },
            NumericError::KindMismatch { left, right } => {
                write!(f, "kind mismatch: cannot add {} and {}", left, right)
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::NonFinite => write!(f, "non-finite floating-point result"),
            NumericError::EmptyInput => write!(f, "empty input: nothing to sum"),
            NumericError::BatchTooLarge { len, max } => {
                write!(f, "batch too large: more than {} operands (read {})", max, len)
            },
            NumericError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
