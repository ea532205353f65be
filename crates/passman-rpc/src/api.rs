//! Typed wrappers for the Passman method surface.
//!
//! Each wrapper is a thin delegation to [`RpcClient::call`], so token
//! injection, id allocation, forced logout, and event emission behave
//! identically to a raw call. Payload shapes mirror the server's wire
//! format.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::RpcClient;
use crate::errors::RpcError;
use crate::types::{METHOD_USER_CREATE, METHOD_USER_LOGIN};

/// Row of the password list: metadata only, secrets stay server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordListItem {
    /// Entry id.
    pub id: i64,
    /// Display name of the entry.
    pub name: String,
    /// Last-modified time, unix seconds.
    pub updated_at: i64,
}

/// Fully decrypted password entry as returned by `password.view`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    /// Entry id.
    pub id: i64,
    /// Display name of the entry.
    pub name: String,
    /// Stored account name.
    pub username: String,
    /// Stored secret.
    pub password: String,
    /// Free-form note, if any.
    pub attachment: Option<String>,
}

/// Fields for creating or updating a password entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordDraft {
    /// Display name of the entry.
    pub name: String,
    /// Account name to store.
    pub username: String,
    /// Secret to store.
    pub password: String,
    /// Free-form note, if any.
    pub attachment: Option<String>,
}

#[derive(Serialize)]
struct CredentialParams<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct IdParams {
    id: i64,
}

#[derive(Serialize)]
struct UpdateParams<'a> {
    id: i64,
    #[serde(flatten)]
    draft: &'a PasswordDraft,
}

/// Serialize a params struct into a JSON-RPC params object.
fn to_params<T: Serialize>(value: &T) -> Result<Map<String, Value>, RpcError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(serde_json::Error::custom("params must be a JSON object").into()),
    }
}

impl RpcClient {
    /// Log in with `user.login` and store the returned session token.
    ///
    /// The token is also returned so callers that persist it across reloads
    /// can do so.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, RpcError> {
        let params = to_params(&CredentialParams { username, password })?;
        let result = self.call(METHOD_USER_LOGIN, params).await?;
        let token: String = serde_json::from_value(result)?;
        self.session().set(Some(token.clone()));
        Ok(token)
    }

    /// Create an account with `user.create`.
    ///
    /// Registration may be disabled server-side; that surfaces as an
    /// ordinary server error.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<(), RpcError> {
        let params = to_params(&CredentialParams { username, password })?;
        let _ = self.call(METHOD_USER_CREATE, params).await?;
        Ok(())
    }

    /// Forget the held session token. Purely client-side; the server keeps
    /// no logout method.
    pub fn logout(&self) {
        self.session().clear();
    }

    /// List password entries with `password.list`, most recently updated
    /// first.
    pub async fn list_passwords(&self) -> Result<Vec<PasswordListItem>, RpcError> {
        let result = self.call("password.list", Map::new()).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Fetch a decrypted entry with `password.view`.
    ///
    /// Resolves to `None` when the id does not exist or belongs to another
    /// user.
    pub async fn view_password(&self, id: i64) -> Result<Option<PasswordEntry>, RpcError> {
        let result = self.call("password.view", to_params(&IdParams { id })?).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Store a new entry with `password.create`.
    pub async fn create_password(&self, draft: &PasswordDraft) -> Result<(), RpcError> {
        let _ = self.call("password.create", to_params(draft)?).await?;
        Ok(())
    }

    /// Overwrite an existing entry with `password.update`.
    pub async fn update_password(&self, id: i64, draft: &PasswordDraft) -> Result<(), RpcError> {
        let _ = self
            .call("password.update", to_params(&UpdateParams { id, draft })?)
            .await?;
        Ok(())
    }

    /// Remove an entry with `password.delete`.
    pub async fn delete_password(&self, id: i64) -> Result<(), RpcError> {
        let _ = self.call("password.delete", to_params(&IdParams { id })?).await?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
