// ============================================================================
// Numeric Capability Traits
// Open "is a number" capability plus its intersection with ordering
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::operand::Operand;

/// A value that presents itself as a number.
///
/// The trait is open: anything numeric may implement it. Only the six
/// supported primitives (and [`Operand`] itself) can actually be lowered to an
/// [`Operand`]; every other implementor reports `UnsupportedKind`.
pub trait Numeric: Copy {
    /// Lower to a tagged operand.
    ///
    /// # Errors
    /// `UnsupportedKind` when the type is outside the supported set.
    fn to_operand(self) -> NumericResult<Operand>;

    /// Lift a tagged operand back into `Self`.
    ///
    /// # Errors
    /// `KindMismatch` when the operand carries another kind,
    /// `UnsupportedKind` when the type is outside the supported set.
    fn from_operand(op: Operand) -> NumericResult<Self>;
}

/// A number that is also ordered against itself.
///
/// Ordering is never consulted by the arithmetic; the bound only keeps
/// unordered types out of the generic entry points.
pub trait BoundedNumeric: Numeric + PartialOrd {}

impl<T: Numeric + PartialOrd> BoundedNumeric for T {}

impl Numeric for Operand {
    #[inline]
    fn to_operand(self) -> NumericResult<Operand> {
        Ok(self)
    }

    #[inline]
    fn from_operand(op: Operand) -> NumericResult<Self> {
        Ok(op)
    }
}

macro_rules! supported_numeric {
    ($($prim:ty),* $(,)?) => {
        $(
            impl Numeric for $prim {
                #[inline]
                fn to_operand(self) -> NumericResult<Operand> {
                    Ok(Operand::from(self))
                }

                #[inline]
                fn from_operand(op: Operand) -> NumericResult<Self> {
                    <$prim>::try_from(op)
                }
            }
        )*
    };
}

macro_rules! unsupported_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn to_operand(self) -> NumericResult<Operand> {
                    Err(unsupported::<$ty>())
                }

                #[inline]
                fn from_operand(_op: Operand) -> NumericResult<Self> {
                    Err(unsupported::<$ty>())
                }
            }
        )*
    };
}

fn unsupported<T>() -> NumericError {
    NumericError::UnsupportedKind {
        type_name: std::any::type_name::<T>(),
    }
}

supported_numeric!(i32, i64, i16, i8, f32, f64);

unsupported_numeric!(u8, u16, u32, u64, u128, usize, i128, isize, rust_decimal::Decimal);
