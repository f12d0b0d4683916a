// ============================================================================
// Engine Module
// Contains the bounded numeric addition logic
// ============================================================================

mod adder;

pub use adder::{add, add_operands, BoundedNumericAdder};
