// ============================================================================
// Runnable Interface
// Zero-argument actions and the runners that invoke them
// ============================================================================

use serde::Serialize;

/// A zero-argument action.
///
/// `run` consumes the action, so each value is invoked at most once. Failures
/// are expressed through `Output` (typically a `Result`) and are handed back to
/// the caller untouched.
pub trait Runnable {
    type Output;

    fn run(self) -> Self::Output;
}

/// Invoke a zero-argument callable exactly once and return its output.
///
/// # Example
/// ```
/// use bounded_numeric::interfaces::run_action;
///
/// let result: Result<u8, String> = run_action(|| Err("boom".to_string()));
/// assert_eq!(result, Err("boom".to_string()));
/// ```
pub fn run_action<F, T>(action: F) -> T
where
    F: FnOnce() -> T,
{
    tracing::trace!("running action");
    let output = action();
    tracing::trace!("action completed");
    output
}

/// Invoke an action that is both runnable and serializable.
///
/// The `Serialize` bound is a capability requirement only; the action is never
/// serialized here.
pub fn run_serializable<R>(action: R) -> R::Output
where
    R: Runnable + Serialize,
{
    tracing::trace!(action = std::any::type_name::<R>(), "running serializable action");
    let output = action.run();
    tracing::trace!("serializable action completed");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Serialize)]
    struct RecordingAction {
        label: String,
        #[serde(skip)]
        hits: Rc<Cell<u32>>,
    }

    impl Runnable for RecordingAction {
        type Output = String;

        fn run(self) -> Self::Output {
            self.hits.set(self.hits.get() + 1);
            self.label
        }
    }

    #[derive(Serialize)]
    struct FailingAction {
        code: i32,
    }

    impl Runnable for FailingAction {
        type Output = Result<(), String>;

        fn run(self) -> Self::Output {
            Err(format!("failed with code {}", self.code))
        }
    }

    #[test]
    fn test_run_action_invokes_once() {
        let hits = Cell::new(0);
        let output = run_action(|| {
            hits.set(hits.get() + 1);
            42
        });
        assert_eq!(output, 42);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_run_action_propagates_failure() {
        let result: Result<(), &str> = run_action(|| Err("nope"));
        assert_eq!(result, Err("nope"));
    }

    #[test]
    fn test_run_serializable_invokes_once() {
        let hits = Rc::new(Cell::new(0));
        let action = RecordingAction {
            label: "flush".to_string(),
            hits: Rc::clone(&hits),
        };

        assert_eq!(run_serializable(action), "flush");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_run_serializable_propagates_failure() {
        let result = run_serializable(FailingAction { code: 7 });
        assert_eq!(result, Err("failed with code 7".to_string()));
    }

    #[test]
    fn test_action_is_serializable() {
        let action = RecordingAction {
            label: "flush".to_string(),
            hits: Rc::new(Cell::new(0)),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"label":"flush"}"#);
    }
}
