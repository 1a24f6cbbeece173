// Confirmation policy for destructive operations

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveOp {
    /// Removing an existing target.
    Delete,
    /// Replacing an existing destination on move or copy.
    Overwrite,
}

/// Result of an operation that may be declined by the user.
/// Declining is a normal outcome, not an error.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Done(T),
    Aborted,
}

impl<T> Outcome<T> {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted)
    }
}

/// Only a case-insensitive "y" counts as yes.
pub fn is_affirmative(response: &str) -> bool {
    response.trim().eq_ignore_ascii_case("y")
}

/// Decides whether `op` may touch its target. `confirm` is called at most once.
///
/// Deleting a plain file never asks. Deleting a directory or overwriting
/// anything asks, and only an affirmative answer proceeds. A missing target
/// has nothing to protect.
pub fn should_proceed<F>(op: DestructiveOp, target_exists: bool, target_is_dir: bool, confirm: F) -> Decision
where
    F: FnOnce() -> String,
{
    if !target_exists {
        return Decision::Proceed;
    }
    let needs_confirmation = match op {
        DestructiveOp::Delete => target_is_dir,
        DestructiveOp::Overwrite => true,
    };
    if !needs_confirmation {
        return Decision::Proceed;
    }

    let response = confirm();
    let decision = if is_affirmative(&response) { Decision::Proceed } else { Decision::Abort };
    debug!("{:?} confirmation answered {:?} -> {:?}", op, response.trim(), decision);
    decision
}
