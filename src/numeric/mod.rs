// ============================================================================
// Numeric Module
// Tagged operands and capability traits for bounded numeric dispatch
// ============================================================================
//
// This module provides:
// - NumericKind: the closed set of six supported primitive kinds
// - Operand: a value tagged with its kind
// - Numeric / BoundedNumeric: open capability traits for generic entry points
// - NumericError: Error types for dispatch and arithmetic
//
// Design principles:
// - Dispatch by `match` on a closed enum, never by runtime type inspection
// - All fallible operations return Result (no panics)
// - Types outside the supported set compile against the bound and fail at
//   the call with `UnsupportedKind`

mod bounded;
mod errors;
mod kind;
mod operand;

pub use bounded::{BoundedNumeric, Numeric};
pub use errors::{NumericError, NumericResult};
pub use kind::NumericKind;
pub use operand::Operand;
