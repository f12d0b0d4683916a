// ============================================================================
// Numeric Kind
// The closed set of primitive kinds the adder knows how to dispatch on
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime tag for the six supported primitive kinds.
///
/// Declaration order defines the `Ord` implementation, which only exists so
/// kinds can be used as map keys and sorted in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 16-bit signed integer
    I16,
    /// 8-bit signed integer
    I8,
    /// IEEE-754 binary32
    F32,
    /// IEEE-754 binary64
    F64,
}

impl NumericKind {
    /// Every supported kind, in dispatch order.
    pub const ALL: [NumericKind; 6] = [
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::I16,
        NumericKind::I8,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// Short lowercase name, matching the Rust primitive it carries.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::I16 => "i16",
            NumericKind::I8 => "i8",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    /// Storage width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            NumericKind::I8 => 8,
            NumericKind::I16 => 16,
            NumericKind::I32 | NumericKind::F32 => 32,
            NumericKind::I64 | NumericKind::F64 => 64,
        }
    }

    /// `true` for `F32` and `F64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    /// `true` for the four signed integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
