//! # passman-events
//!
//! Single-slot event bus decoupling the RPC transport from the UI layer.
//!
//! Each event name holds at most one handler; registering again under the
//! same name replaces the previous handler. This is deliberate: callers
//! re-register on route change and must not stack stale handlers, so the bus
//! must not be upgraded to multi-subscriber fan-out. Emission is synchronous
//! and events with no registered handler are dropped.

#![deny(unsafe_code)]

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

/// Event carrying a human-readable error message (one string argument).
pub const EVENT_ERROR: &str = "error";

/// Event signaling that the session token was rejected (no arguments).
pub const EVENT_INVALID_TOKEN: &str = "invalid_token";

type Handler = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Name-keyed event registry with at most one handler per name.
///
/// Cloning yields another handle to the same registry. Registrations live
/// for the registry's lifetime; there is no unregister operation.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: Arc<Mutex<HashMap<String, Handler>>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`, replacing any existing handler
    /// under that name.
    pub fn on<F>(&self, event: &str, handler: F)
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        debug!(event, "registering event handler");
        let _ = self
            .handlers
            .lock()
            .insert(event.to_string(), Arc::new(handler));
    }

    /// Invoke the handler registered for `event`, if any.
    ///
    /// The handler runs synchronously on the calling thread; emitting an
    /// event nobody listens to is a no-op. The handler is cloned out of the
    /// lock before the call, so it may itself register handlers.
    pub fn emit(&self, event: &str, args: &[Value]) {
        let handler = self.handlers.lock().get(event).cloned();
        if let Some(handler) = handler {
            handler(args);
        }
    }

    /// Emit [`EVENT_ERROR`] with a message for the global error surface
    /// (typically rendered as a toast).
    pub fn notify_error(&self, message: impl Into<String>) {
        self.emit(EVENT_ERROR, &[Value::String(message.into())]);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
