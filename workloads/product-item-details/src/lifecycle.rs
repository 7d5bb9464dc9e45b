//! Mount lifecycle and fetch cancellation.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag telling an in-flight fetch its result is no longer wanted.
///
/// Clones observe the same flag. Cancellation is one-way.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    /// Create a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel this token and every clone of it.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Whether the token was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Whether two handles share the same flag.
    pub fn same_as(&self, other: &CancellationToken) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
