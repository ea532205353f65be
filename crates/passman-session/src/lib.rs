//! # passman-session
//!
//! Session-token state for the Passman client.
//!
//! Holds the single opaque credential string returned by `user.login`.
//! The store is a cheap handle: clones share one slot, so the RPC transport
//! and the UI layer observe the same session. Absence of a token means
//! unauthenticated. Persistence across reloads is the caller's concern.

#![deny(unsafe_code)]

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

/// Shared holder of the current session token.
///
/// At most one token value is active at any time; a set fully replaces the
/// previous value. The slot is lock-guarded so the invariant holds when the
/// transport is driven from multiple threads.
#[derive(Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held token unconditionally. `None` represents logout.
    ///
    /// The value is stored as-is; no shape validation.
    pub fn set(&self, token: Option<String>) {
        debug!(authenticated = token.is_some(), "session token replaced");
        *self.token.write() = token;
    }

    /// The currently held token, if any. Pure read.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Drop the held token.
    pub fn clear(&self) {
        self.set(None);
    }

    /// Whether a token is currently held.
    ///
    /// Route guards use this to gate protected views.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl fmt::Debug for SessionStore {
    /// Token values are credentials; only their presence is printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
