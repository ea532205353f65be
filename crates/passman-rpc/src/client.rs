//! JSON-RPC transport client.
//!
//! Per call: inject the session token (bootstrap methods excepted), allocate
//! a request id, POST the envelope to `/rpc`, and classify the response.
//! Server-side errors are announced on the event bus before being returned;
//! transport failures pass through untouched. One request per call — no
//! retry, no timeout, no cancellation.

use std::sync::atomic::{AtomicU64, Ordering};

use passman_events::{EVENT_ERROR, EVENT_INVALID_TOKEN, EventBus};
use passman_session::SessionStore;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::RpcError;
use crate::types::{ERR_INVALID_TOKEN, RPC_PATH, RpcRequest, RpcResponse, TOKEN_PARAM, requires_token};

/// Client for the Passman JSON-RPC endpoint.
///
/// Owns the request-id counter and shares the session store and event bus
/// with the surrounding application. Calls are stateless request/response
/// cycles; the token and the id counter are the only persistent state.
/// Wrap in an [`Arc`](std::sync::Arc) to share across tasks.
pub struct RpcClient {
    /// HTTP client, reused across requests.
    http: reqwest::Client,
    /// Server origin, e.g. `http://127.0.0.1:8888`.
    base_url: String,
    /// Shared session-token slot.
    session: SessionStore,
    /// Shared bus for error and forced-logout announcements.
    events: EventBus,
    /// Next request id. Starts at 1, never reused.
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client with a fresh session store and event bus.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_parts(base_url, SessionStore::new(), EventBus::new())
    }

    /// Create a client over externally owned session and event handles.
    ///
    /// The UI layer passes in the handles its route guards and toast
    /// surface already hold; tests construct isolated instances.
    #[must_use]
    pub fn with_parts(
        base_url: impl Into<String>,
        session: SessionStore,
        events: EventBus,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            events,
            next_id: AtomicU64::new(1),
        }
    }

    /// The shared session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The shared event bus.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Invoke `method` with `params` and return its result payload.
    ///
    /// For authenticated methods the current token (JSON `null` when
    /// unauthenticated) is inserted into `params` under `token` before
    /// sending.
    ///
    /// # Errors
    ///
    /// [`RpcError::Server`] when the response carries an error object; the
    /// reserved code `-2` additionally clears the session store and emits
    /// `invalid_token`, and every server error emits `error` with its
    /// message before this function returns. [`RpcError::Http`] when the
    /// request itself fails or the body is not valid JSON — those paths
    /// touch neither the session nor the bus.
    pub async fn call(
        &self,
        method: &str,
        mut params: Map<String, Value>,
    ) -> Result<Value, RpcError> {
        if requires_token(method) {
            let token = self.session.get().map_or(Value::Null, Value::String);
            let _ = params.insert(TOKEN_PARAM.to_string(), token);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, id);
        debug!(method, id, "sending RPC request");

        let response: RpcResponse = self
            .http
            .post(format!("{}{}", self.base_url, RPC_PATH))
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            if error.code == ERR_INVALID_TOKEN {
                warn!(method, id, "session token rejected, forcing logout");
                self.session.clear();
                self.events.emit(EVENT_INVALID_TOKEN, &[]);
            }
            debug!(method, id, code = error.code, "RPC request failed");
            self.events
                .emit(EVENT_ERROR, &[Value::String(error.message.clone())]);
            return Err(error.into());
        }

        debug!(method, id, "RPC request succeeded");
        Ok(response.result.unwrap_or(Value::Null))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
