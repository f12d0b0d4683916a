// ============================================================================
// Bounded Numeric Library
// Closed-set generic addition and capability-bounded action runners
// ============================================================================

//! # Bounded Numeric
//!
//! Generic addition over a closed set of six primitive kinds, dispatched by
//! pattern matching on a tagged operand.
//!
//! ## Features
//!
//! - **Closed kind set**: `i32`, `i64`, `i16`, `i8`, `f32`, `f64`
//! - **Wraparound by default**: narrow integers truncate back to their width
//! - **Open bound, closed dispatch**: any `Numeric + PartialOrd` type compiles
//!   against the generic API; types outside the set fail with `UnsupportedKind`
//! - **Configurable policy**: checked or saturating integers, finite-only floats
//! - **Action runners** for callables and `Runnable + Serialize` actions
//!
//! ## Example
//!
//! ```rust
//! use bounded_numeric::prelude::*;
//!
//! assert_eq!(add(127i8, 1i8), Ok(-128));
//! assert_eq!(add(32767i16, 1i16), Ok(-32768));
//! assert_eq!(add(0.1f64, 0.2f64), Ok(0.30000000000000004));
//!
//! // Tagged operands
//! let sum = add_operands(Operand::I32(i32::MAX), Operand::I32(1)).unwrap();
//! assert_eq!(sum, Operand::I32(i32::MIN));
//!
//! // Outside the supported set
//! assert!(matches!(add(1u64, 2u64), Err(NumericError::UnsupportedKind { .. })));
//!
//! // Strict configuration
//! let adder = BoundedNumericAdder::new(AdderConfig::strict()).unwrap();
//! assert_eq!(adder.add(127i8, 1i8), Err(NumericError::Overflow));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AdderConfig, OverflowPolicy};
    pub use crate::engine::{add, add_operands, BoundedNumericAdder};
    pub use crate::interfaces::{run_action, run_serializable, Runnable};
    pub use crate::numeric::{
        BoundedNumeric, Numeric, NumericError, NumericKind, NumericResult, Operand,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use serde::Serialize;

    #[test]
    fn test_end_to_end_dispatch() {
        let cases = [
            (Operand::I8(127), Operand::I8(1), Operand::I8(-128)),
            (Operand::I16(32767), Operand::I16(1), Operand::I16(-32768)),
            (
                Operand::I32(2_147_483_647),
                Operand::I32(1),
                Operand::I32(-2_147_483_648),
            ),
            (Operand::I64(-1), Operand::I64(1), Operand::I64(0)),
            (Operand::F32(1.5), Operand::F32(2.25), Operand::F32(3.75)),
            (
                Operand::F64(0.1),
                Operand::F64(0.2),
                Operand::F64(0.30000000000000004),
            ),
        ];

        for (a, b, expected) in cases {
            assert_eq!(add_operands(a, b), Ok(expected), "{a} + {b}");
            assert_eq!(add_operands(b, a), Ok(expected), "{b} + {a}");
        }
    }

    #[test]
    fn test_config_from_json_drives_adder() {
        let config: AdderConfig = serde_json::from_str(
            r#"{"overflow":"Saturating","allow_non_finite":false,"max_batch_len":null}"#,
        )
        .unwrap();
        let adder = BoundedNumericAdder::new(config).unwrap();

        assert_eq!(adder.add(i16::MAX, 1i16), Ok(i16::MAX));
        assert_eq!(adder.add(f32::MAX, f32::MAX), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_sum_inside_serializable_action() {
        #[derive(Serialize)]
        struct SumJob {
            values: Vec<i8>,
        }

        impl Runnable for SumJob {
            type Output = NumericResult<i8>;

            fn run(self) -> Self::Output {
                BoundedNumericAdder::default().sum(self.values)
            }
        }

        let job = SumJob {
            values: vec![120, 7, 1],
        };
        assert_eq!(run_serializable(job), Ok(-128));

        let empty = SumJob { values: vec![] };
        assert_eq!(run_serializable(empty), Err(NumericError::EmptyInput));
    }

    #[test]
    fn test_error_propagates_through_run_action() {
        let result = run_action(|| -> NumericResult<u32> {
            let sum = add(1u32, 2u32)?;
            Ok(sum)
        });
        assert_eq!(
            result,
            Err(NumericError::UnsupportedKind { type_name: "u32" })
        );
    }
}
