// ============================================================================
// Domain Models Module
// Contains configuration value objects
// ============================================================================

pub mod config;

pub use config::{AdderConfig, OverflowPolicy};
