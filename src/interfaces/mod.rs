// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod runnable;

pub use runnable::{run_action, run_serializable, Runnable};
