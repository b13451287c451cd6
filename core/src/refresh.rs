//! Refresh tokens and the counter a page uses to issue them.
//!
//! A token is an opaque, monotonically issued value. The list component
//! re-fetches whenever the token it is handed differs from the last one it
//! saw. Components run on a single UI thread, so the shared counter is an
//! `Rc<Cell<_>>` rather than anything `Send`.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared handle to the page's current refresh token.
///
/// Clones observe the same value; `bump` is the only way to advance it.
#[derive(Debug, Clone, Default)]
pub struct RefreshCounter {
    current: Rc<Cell<RefreshToken>>,
}

impl RefreshCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> RefreshToken {
        self.current.get()
    }

    /// Issue the next token and return it.
    pub fn bump(&self) -> RefreshToken {
        let next = self.current.get().next();
        self.current.set(next);
        next
    }
}
