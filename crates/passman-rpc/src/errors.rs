//! RPC error types.

use serde_json::Value;

use crate::types::{ERR_INVALID_TOKEN, RpcErrorBody};

/// Errors surfaced by the RPC transport and the typed method wrappers.
///
/// Transport-level failures pass through untouched (no retry, no wrapping);
/// well-formed server errors are re-raised after their side effects so
/// callers can still branch on [`code`](RpcError::code).
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP request failed or the response body was not valid JSON.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client-side payload (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a JSON-RPC error object.
    #[error("server error ({code}): {message}")]
    Server {
        /// Wire error code.
        code: i64,
        /// Human-readable description.
        message: String,
        /// Optional structured details.
        data: Option<Value>,
    },
}

impl RpcError {
    /// Wire error code for server errors, `None` for local failures.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Server { code, .. } => Some(*code),
            Self::Http(_) | Self::Json(_) => None,
        }
    }

    /// Whether this is the reserved invalid/expired-token error.
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        self.code() == Some(ERR_INVALID_TOKEN)
    }
}

impl From<RpcErrorBody> for RpcError {
    fn from(body: RpcErrorBody) -> Self {
        Self::Server {
            code: body.code,
            message: body.message,
            data: body.data,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display() {
        let err = RpcError::Server {
            code: -1,
            message: "bad input".to_string(),
            data: None,
        };
        assert_eq!(err.to_string(), "server error (-1): bad input");
    }

    #[test]
    fn code_is_only_set_for_server_errors() {
        let err = RpcError::Server {
            code: -2,
            message: "expired".to_string(),
            data: None,
        };
        assert_eq!(err.code(), Some(-2));
        assert!(err.is_invalid_token());

        let err = RpcError::Json(serde_json::from_str::<i64>("oops").unwrap_err());
        assert_eq!(err.code(), None);
        assert!(!err.is_invalid_token());
    }

    #[test]
    fn error_body_converts_into_server_variant() {
        let body = RpcErrorBody {
            code: -1,
            message: "no such entry".to_string(),
            data: None,
        };
        let err = RpcError::from(body);
        assert_eq!(err.code(), Some(-1));
        assert!(err.to_string().contains("no such entry"));
    }
}
