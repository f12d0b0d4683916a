// ============================================================================
// Bounded Numeric Adder
// Kind-dispatched addition over the closed set of supported primitives
// ============================================================================

use crate::domain::config::{AdderConfig, OverflowPolicy};
use crate::numeric::{BoundedNumeric, NumericError, NumericResult, Operand};

/// Integer addition under an overflow policy.
///
/// Checked overflow can only go up when the addend is positive and only down
/// when it is negative.
macro_rules! integer_add {
    ($policy:expr, $x:expr, $y:expr) => {
        match $policy {
            OverflowPolicy::Wrapping => Ok($x.wrapping_add($y)),
            OverflowPolicy::Saturating => Ok($x.saturating_add($y)),
            OverflowPolicy::Checked => $x.checked_add($y).ok_or_else(|| {
                if $y > 0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                }
            }),
        }
    };
}

/// Adds two values of the same supported kind, returning that kind.
///
/// Dispatch is a `match` on the first operand's kind; the second operand must
/// carry the same kind or the call fails with `KindMismatch`.
///
/// With the default configuration integers wrap in two's complement and floats
/// follow IEEE-754:
///
/// ```text
/// i8:  127 + 1          -> -128
/// i16: 32767 + 1        -> -32768
/// i32: 2147483647 + 1   -> -2147483648
/// f64: 0.1 + 0.2        -> 0.30000000000000004
/// ```
///
/// # Example
/// ```
/// use bounded_numeric::prelude::*;
///
/// let adder = BoundedNumericAdder::default();
/// assert_eq!(adder.add(127i8, 1i8), Ok(-128));
/// assert!(adder.add(1u32, 2u32).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoundedNumericAdder {
    config: AdderConfig,
}

impl BoundedNumericAdder {
    /// Create an adder with the given configuration.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration does not validate.
    pub fn new(config: AdderConfig) -> NumericResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this adder was built with.
    pub fn config(&self) -> &AdderConfig {
        &self.config
    }

    /// Add two tagged operands.
    ///
    /// # Errors
    /// - `KindMismatch` if the operands carry different kinds
    /// - `Overflow`/`Underflow` under `OverflowPolicy::Checked`
    /// - `NonFinite` for NaN/infinite float sums when disallowed
    pub fn add_operands(&self, a: Operand, b: Operand) -> NumericResult<Operand> {
        tracing::trace!(kind = %a.kind(), "dispatching addition");

        let policy = self.config.overflow;
        let result = match (a, b) {
            (Operand::I32(x), Operand::I32(y)) => integer_add!(policy, x, y).map(Operand::I32),
            (Operand::I64(x), Operand::I64(y)) => integer_add!(policy, x, y).map(Operand::I64),
            (Operand::I16(x), Operand::I16(y)) => integer_add!(policy, x, y).map(Operand::I16),
            (Operand::I8(x), Operand::I8(y)) => integer_add!(policy, x, y).map(Operand::I8),
            (Operand::F32(x), Operand::F32(y)) => self.finite_or_err(Operand::F32(x + y)),
            (Operand::F64(x), Operand::F64(y)) => self.finite_or_err(Operand::F64(x + y)),
            _ => a.ensure_same_kind(b).map(|_| a),
        };

        if let Err(err) = &result {
            tracing::debug!(left = %a, right = %b, error = %err, "addition rejected");
        }

        result
    }

    /// Add two values of any bounded numeric type.
    ///
    /// # Errors
    /// `UnsupportedKind` if `T` is outside the supported set, plus every error
    /// of [`Self::add_operands`].
    pub fn add<T: BoundedNumeric>(&self, a: T, b: T) -> NumericResult<T> {
        let lhs = a.to_operand().inspect_err(log_unsupported)?;
        let rhs = b.to_operand()?;
        let sum = self.add_operands(lhs, rhs)?;
        T::from_operand(sum)
    }

    /// Fold a non-empty sequence of same-kind values.
    ///
    /// # Errors
    /// - `EmptyInput` for an empty sequence
    /// - `BatchTooLarge` when `max_batch_len` is exceeded
    /// - any error of [`Self::add`] for the first failing step
    pub fn sum<T, I>(&self, values: I) -> NumericResult<T>
    where
        T: BoundedNumeric,
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = match self.config.max_batch_len {
            Some(max) => {
                // Pull at most one operand past the cap.
                let values: Vec<T> = values.into_iter().take(max.saturating_add(1)).collect();
                if values.len() > max {
                    return Err(NumericError::BatchTooLarge {
                        len: values.len(),
                        max,
                    });
                }
                values
            },
            None => values.into_iter().collect(),
        };

        let (first, rest) = values.split_first().ok_or(NumericError::EmptyInput)?;
        rest.iter().try_fold(*first, |acc, &value| self.add(acc, value))
    }

    fn finite_or_err(&self, sum: Operand) -> NumericResult<Operand> {
        if self.config.allow_non_finite || sum.is_finite() {
            Ok(sum)
        } else {
            Err(NumericError::NonFinite)
        }
    }
}

fn log_unsupported(err: &NumericError) {
    if let NumericError::UnsupportedKind { type_name } = err {
        tracing::debug!(type_name, "addition rejected: unsupported kind");
    }
}

// ============================================================================
// Free Functions (default configuration)
// ============================================================================

/// Add two values with wraparound integer semantics.
///
/// Shorthand for `BoundedNumericAdder::default().add(a, b)`.
///
/// # Errors
/// `UnsupportedKind` if `T` is outside the supported set.
pub fn add<T: BoundedNumeric>(a: T, b: T) -> NumericResult<T> {
    BoundedNumericAdder::default().add(a, b)
}

/// Add two tagged operands with wraparound integer semantics.
///
/// # Errors
/// `KindMismatch` if the operands carry different kinds.
pub fn add_operands(a: Operand, b: Operand) -> NumericResult<Operand> {
    BoundedNumericAdder::default().add_operands(a, b)
}
