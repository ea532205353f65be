//! Wire-format types and reserved constants for the Passman JSON-RPC
//! protocol.
//!
//! The envelope must serialize bit-exact:
//! `{"jsonrpc":"2.0","method":…,"params":…,"id":…}` out,
//! `{"result":…}` or `{"error":{"code":…,"message":…}}` back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Path of the RPC endpoint, relative to the server origin.
pub const RPC_PATH: &str = "/rpc";

/// Params key the transport injects the session token under.
pub const TOKEN_PARAM: &str = "token";

/// Account-creation method; one of the two methods callable without a token.
pub const METHOD_USER_CREATE: &str = "user.create";

/// Login method; one of the two methods callable without a token.
pub const METHOD_USER_LOGIN: &str = "user.login";

/// Catch-all application error code.
pub const ERR_GENERAL: i64 = -1;

/// Reserved code: the session token is invalid or expired. Receiving it
/// forces a client-side logout.
pub const ERR_INVALID_TOKEN: i64 = -2;

/// Whether `method` runs authenticated, i.e. gets the session token
/// injected into its params. Everything except the two bootstrap methods
/// does.
#[must_use]
pub fn requires_token(method: &str) -> bool {
    method != METHOD_USER_CREATE && method != METHOD_USER_LOGIN
}

/// Outgoing JSON-RPC 2.0 request envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: String,
    /// Method name (e.g. `password.list`).
    pub method: String,
    /// Named parameters, including the injected `token` field for
    /// authenticated methods.
    pub params: Map<String, Value>,
    /// Client-assigned request id; unique and strictly increasing per
    /// client.
    pub id: u64,
}

impl RpcRequest {
    /// Build an envelope for `method` under the given id.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Map<String, Value>, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// Incoming JSON-RPC response envelope.
///
/// A well-formed response carries exactly one of `result` and `error`.
/// When both appear the error wins; an absent or `null` result reads as
/// JSON `null`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Result payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorBody>,
}

/// Structured error body inside an [`RpcResponse`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// Machine-readable code ([`ERR_GENERAL`], [`ERR_INVALID_TOKEN`], …).
    pub code: i64,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
