use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

/// Stop signal for one target's search tree.
///
/// Cancellation is cooperative: branches check it before doing more work, and
/// a branch that already passed its check may still finish. The scope also
/// observes its parent token, so cancelling the search as a whole stops every
/// exit tree.
#[derive(Debug)]
pub struct ExitScope {
    token: CancellationToken,
    tripped: AtomicBool,
}

impl ExitScope {
    /// A scope that is only cancelled through [`ExitScope::cancel`].
    pub fn new() -> Self {
        Self::from_token(CancellationToken::new())
    }

    /// A scope that is also cancelled whenever `parent` is.
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self::from_token(parent.child_token())
    }

    fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            tripped: AtomicBool::new(false),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels the scope. Safe to call any number of times from any thread;
    /// returns `true` only for the call that tripped it.
    pub fn cancel(&self) -> bool {
        let first = !self.tripped.swap(true, Ordering::AcqRel);
        self.token.cancel();
        first
    }
}

impl Default for ExitScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn cancel_is_idempotent() {
        let scope = ExitScope::new();
        assert!(!scope.is_cancelled());
        assert!(scope.cancel());
        assert!(scope.is_cancelled());
        assert!(!scope.cancel());
        assert!(scope.is_cancelled());
    }

    #[test]
    fn parent_cancellation_reaches_child() {
        let parent = CancellationToken::new();
        let scope = ExitScope::child_of(&parent);
        parent.cancel();
        assert!(scope.is_cancelled());
        // Tripping afterwards is still reported once.
        assert!(scope.cancel());
    }

    #[test]
    fn child_cancellation_leaves_parent_alone() {
        let parent = CancellationToken::new();
        let scope = ExitScope::child_of(&parent);
        scope.cancel();
        assert!(!parent.is_cancelled());
    }

    #[test]
    fn exactly_one_concurrent_trip_wins() {
        let scope = Arc::new(ExitScope::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let scope = Arc::clone(&scope);
                std::thread::spawn(move || scope.cancel())
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
    }
}
