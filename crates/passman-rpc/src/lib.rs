//! # passman-rpc
//!
//! JSON-RPC 2.0 transport for the Passman password-manager server.
//!
//! - **Wire format**: request/response envelopes and reserved error codes
//!   matching the server bit-exact ([`types`])
//! - **Transport client**: token injection, monotonic request ids, error
//!   classification with forced logout on code `-2` ([`client`])
//! - **Typed surface**: one async wrapper per server method, from
//!   `user.login` to `password.delete` ([`api`])
//!
//! The client shares a [`passman_session::SessionStore`] and a
//! [`passman_events::EventBus`] with the surrounding application: server
//! errors are announced as `error` events (and `invalid_token` when the
//! session is rejected) before the failing call returns, so a global error
//! surface and per-call handling can coexist.

#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod errors;
pub mod types;

pub use api::{PasswordDraft, PasswordEntry, PasswordListItem};
pub use client::RpcClient;
pub use errors::RpcError;
pub use types::{
    ERR_GENERAL, ERR_INVALID_TOKEN, METHOD_USER_CREATE, METHOD_USER_LOGIN, RpcErrorBody,
    RpcRequest, RpcResponse, requires_token,
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _client = RpcClient::new("http://127.0.0.1:8888");
        assert_eq!(ERR_INVALID_TOKEN, -2);
        assert!(requires_token("password.list"));
    }
}
