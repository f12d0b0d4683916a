// ============================================================================
// Operand
// Tagged numeric value carrying exactly one supported primitive
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::kind::NumericKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single numeric value tagged with its kind.
///
/// Operands are plain `Copy` values. Arithmetic on them lives in
/// [`crate::engine::BoundedNumericAdder`]; this type only carries, inspects
/// and converts.
///
/// # Example
/// ```
/// use bounded_numeric::numeric::{NumericKind, Operand};
///
/// let x = Operand::from(127i8);
/// assert_eq!(x.kind(), NumericKind::I8);
/// assert_eq!(x.to_string(), "127i8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    I32(i32),
    I64(i64),
    I16(i16),
    I8(i8),
    F32(f32),
    F64(f64),
}

impl Operand {
    /// The runtime kind of this operand.
    #[inline]
    pub const fn kind(self) -> NumericKind {
        match self {
            Operand::I32(_) => NumericKind::I32,
            Operand::I64(_) => NumericKind::I64,
            Operand::I16(_) => NumericKind::I16,
            Operand::I8(_) => NumericKind::I8,
            Operand::F32(_) => NumericKind::F32,
            Operand::F64(_) => NumericKind::F64,
        }
    }

    /// Widen to `f64`.
    ///
    /// Exact for every kind except `I64` values beyond 2^53.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Operand::I32(v) => f64::from(v),
            Operand::I64(v) => v as f64,
            Operand::I16(v) => f64::from(v),
            Operand::I8(v) => f64::from(v),
            Operand::F32(v) => f64::from(v),
            Operand::F64(v) => v,
        }
    }

    /// Returns `true` unless this is a NaN or infinite float.
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Operand::F32(v) => v.is_finite(),
            Operand::F64(v) => v.is_finite(),
            _ => true,
        }
    }

    /// Fails with `KindMismatch` unless `other` has the same kind.
    #[inline]
    pub fn ensure_same_kind(self, other: Operand) -> NumericResult<()> {
        if self.kind() == other.kind() {
            Ok(())
        } else {
            Err(NumericError::KindMismatch {
                left: self.kind(),
                right: other.kind(),
            })
        }
    }
}

// Same-kind operands are ordered by value; mixed kinds are unordered.
impl PartialOrd for Operand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Operand::I32(a), Operand::I32(b)) => a.partial_cmp(b),
            (Operand::I64(a), Operand::I64(b)) => a.partial_cmp(b),
            (Operand::I16(a), Operand::I16(b)) => a.partial_cmp(b),
            (Operand::I8(a), Operand::I8(b)) => a.partial_cmp(b),
            (Operand::F32(a), Operand::F32(b)) => a.partial_cmp(b),
            (Operand::F64(a), Operand::F64(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::I32(v) => write!(f, "{}{}", v, self.kind()),
            Operand::I64(v) => write!(f, "{}{}", v, self.kind()),
            Operand::I16(v) => write!(f, "{}{}", v, self.kind()),
            Operand::I8(v) => write!(f, "{}{}", v, self.kind()),
            Operand::F32(v) => write!(f, "{}{}", v, self.kind()),
            Operand::F64(v) => write!(f, "{}{}", v, self.kind()),
        }
    }
}

// ============================================================================
// Primitive Conversions
// ============================================================================

macro_rules! operand_conversions {
    ($($prim:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$prim> for Operand {
                #[inline]
                fn from(value: $prim) -> Self {
                    Operand::$variant(value)
                }
            }

            impl TryFrom<Operand> for $prim {
                type Error = NumericError;

                #[inline]
                fn try_from(op: Operand) -> Result<Self, Self::Error> {
                    match op {
                        Operand::$variant(v) => Ok(v),
                        other => Err(NumericError::KindMismatch {
                            left: NumericKind::$variant,
                            right: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

operand_conversions! {
    i32 => I32,
    i64 => I64,
    i16 => I16,
    i8 => I8,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Operand::from(1i32).kind(), NumericKind::I32);
        assert_eq!(Operand::from(1i64).kind(), NumericKind::I64);
        assert_eq!(Operand::from(1i16).kind(), NumericKind::I16);
        assert_eq!(Operand::from(1i8).kind(), NumericKind::I8);
        assert_eq!(Operand::from(1.0f32).kind(), NumericKind::F32);
        assert_eq!(Operand::from(1.0f64).kind(), NumericKind::F64);
    }

    #[test]
    fn test_try_from_matching_kind() {
        let value: i16 = Operand::I16(-7).try_into().unwrap();
        assert_eq!(value, -7);
    }

    #[test]
    fn test_try_from_wrong_kind() {
        let result: Result<i8, _> = Operand::I64(3).try_into();
        assert_eq!(
            result,
            Err(NumericError::KindMismatch {
                left: NumericKind::I8,
                right: NumericKind::I64,
            })
        );
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Operand::I8(-128).to_f64(), -128.0);
        assert_eq!(Operand::F32(0.5).to_f64(), 0.5);
        assert_eq!(Operand::I64(1 << 40).to_f64(), (1u64 << 40) as f64);
    }

    #[test]
    fn test_ordering_same_kind() {
        assert!(Operand::I32(1) < Operand::I32(2));
        assert!(Operand::F64(2.5) > Operand::F64(-1.0));
        assert_eq!(
            Operand::I8(5).partial_cmp(&Operand::I8(5)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_ordering_mixed_kind_is_none() {
        assert_eq!(Operand::I32(1).partial_cmp(&Operand::I64(1)), None);
    }

    #[test]
    fn test_ensure_same_kind() {
        assert!(Operand::F32(1.0).ensure_same_kind(Operand::F32(2.0)).is_ok());
        assert_eq!(
            Operand::F32(1.0).ensure_same_kind(Operand::F64(2.0)),
            Err(NumericError::KindMismatch {
                left: NumericKind::F32,
                right: NumericKind::F64,
            })
        );
    }

    #[test]
    fn test_is_finite() {
        assert!(Operand::I64(i64::MAX).is_finite());
        assert!(!Operand::F64(f64::NAN).is_finite());
        assert!(!Operand::F32(f32::INFINITY).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::I8(127).to_string(), "127i8");
        assert_eq!(Operand::I16(-32768).to_string(), "-32768i16");
        assert_eq!(Operand::F64(0.25).to_string(), "0.25f64");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Operand::I16(42)).unwrap();
        assert_eq!(json, r#"{"I16":42}"#);
        let back: Operand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operand::I16(42));
    }
}
