// ============================================================================
// Adder Configuration
// Overflow and finiteness policy for bounded numeric addition
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Policy
// ============================================================================

/// How integer sums that leave the kind's range are handled.
///
/// Floating-point kinds are unaffected; see [`AdderConfig::allow_non_finite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Two's complement wraparound (narrowing back to the kind's width)
    /// - `127i8 + 1` -> `-128`
    /// - Never fails
    #[default]
    Wrapping,

    /// Out-of-range sums fail with `Overflow` or `Underflow`
    Checked,

    /// Out-of-range sums clamp to the kind's MIN or MAX
    Saturating,
}

// ============================================================================
// Complete Adder Configuration
// ============================================================================

/// Configuration for a [`crate::engine::BoundedNumericAdder`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdderConfig {
    /// Integer overflow handling
    pub overflow: OverflowPolicy,

    /// Whether float sums may be NaN or infinite.
    /// When false, such sums fail with `NonFinite`.
    pub allow_non_finite: bool,

    /// Optional: Maximum number of operands accepted by `sum`
    /// None means unlimited
    pub max_batch_len: Option<usize>,
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Wrapping,
            allow_non_finite: true,
            max_batch_len: None,
        }
    }
}

impl AdderConfig {
    /// Create a new configuration with the given overflow policy
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self {
            overflow,
            ..Self::default()
        }
    }

    /// Builder method: Allow or reject non-finite float sums
    pub fn with_non_finite(mut self, allow: bool) -> Self {
        self.allow_non_finite = allow;
        self
    }

    /// Builder method: Cap the length of batch sums
    pub fn with_max_batch_len(mut self, max: usize) -> Self {
        self.max_batch_len = Some(max);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_batch_len == Some(0) {
            return Err(NumericError::InvalidConfig(
                "max batch length must be positive",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl AdderConfig {
    /// Plain primitive semantics
    /// - Integer wraparound
    /// - IEEE-754 floats, NaN and infinities allowed
    pub fn wrapping() -> Self {
        Self::default()
    }

    /// Fail on anything that is not an exact, finite sum
    /// - Checked integer overflow
    /// - Non-finite float results rejected
    pub fn strict() -> Self {
        Self::new(OverflowPolicy::Checked).with_non_finite(false)
    }

    /// Clamp integers, keep IEEE-754 floats
    pub fn saturating() -> Self {
        Self::new(OverflowPolicy::Saturating)
    }
}
