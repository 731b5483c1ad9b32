//! Single-endpoint publish client.
//!
//! A [`PublishClient`] owns one control endpoint URI and its auth
//! configuration. Publishing exports the item, resolves the auth header
//! under the client's lock, then POSTs the envelope to
//! `<uri>/publish/`. The lock covers only the auth read - the HTTP call
//! itself runs after it is released, so concurrent publishes never
//! serialize on network latency.
//!
//! # Example
//!
//! ```ignore
//! use gripwire::format::HttpStreamFormat;
//! use gripwire::{Item, PublishClient};
//!
//! let client = PublishClient::new("https://api.example.com/realm");
//! client.set_auth_bearer("token");
//!
//! let item = Item::single(HttpStreamFormat::chunk("data\n"));
//! client.publish("updates", &item).await?;
//! ```

use std::sync::Mutex;

use serde_json::json;

use crate::auth::Auth;
use crate::error::{GripError, Result};
use crate::item::Item;

/// A publishing endpoint with its auth configuration.
///
/// Safe to share across tasks: auth can be swapped between publishes and
/// any number of publishes may run concurrently.
pub struct PublishClient {
    uri: String,
    auth: Mutex<Auth>,
    http: reqwest::Client,
}

impl PublishClient {
    /// Create a client for the given control endpoint URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            auth: Mutex::new(Auth::None),
            http: reqwest::Client::new(),
        }
    }

    /// The configured endpoint URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Use HTTP basic auth on subsequent publishes.
    pub fn set_auth_basic(&self, username: impl Into<String>, password: impl Into<String>) {
        self.set_auth(Auth::Basic {
            username: username.into(),
            password: password.into(),
        });
    }

    /// Use per-request JWT auth on subsequent publishes. A missing `exp`
    /// claim is filled in at signing time.
    pub fn set_auth_jwt(&self, claims: serde_json::Map<String, serde_json::Value>, key: impl Into<Vec<u8>>) {
        self.set_auth(Auth::Jwt {
            claims,
            key: key.into(),
        });
    }

    /// Use a pre-signed bearer token on subsequent publishes.
    pub fn set_auth_bearer(&self, token: impl Into<String>) {
        self.set_auth(Auth::Bearer(token.into()));
    }

    /// Replace the auth configuration.
    pub fn set_auth(&self, auth: Auth) {
        *self.lock_auth() = auth;
    }

    /// Snapshot of the current auth configuration.
    pub fn auth(&self) -> Auth {
        self.lock_auth().clone()
    }

    /// Publish an item to a channel on this endpoint.
    ///
    /// Exports the item (a duplicate format name fails the call), injects
    /// the channel, and POSTs `{"items": [...]}` to `<uri>/publish/`. A
    /// non-2xx answer becomes [`GripError::Publish`]; network failures
    /// surface as [`GripError::Transport`].
    pub async fn publish(&self, channel: &str, item: &Item) -> Result<()> {
        let mut export = item.export()?;
        export.insert("channel".to_string(), channel.into());

        // Resolve auth inside the lock, release before the network call.
        let auth_header = self.lock_auth().to_header()?;

        let uri = format!("{}/publish/", self.uri);
        tracing::debug!(uri = %uri, channel = %channel, "publishing item");

        let mut request = self.http.post(&uri).json(&json!({ "items": [export] }));
        if let Some(header) = auth_header {
            request = request.header(reqwest::header::AUTHORIZATION, header);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(uri = %uri, status = status.as_u16(), "publish rejected");
            return Err(GripError::Publish {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    fn lock_auth(&self) -> std::sync::MutexGuard<'_, Auth> {
        // A panicked setter cannot leave auth half-written; recover the
        // value instead of propagating the poison.
        self.auth.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_accessor() {
        let client = PublishClient::new("http://localhost:5561");
        assert_eq!(client.uri(), "http://localhost:5561");
    }

    #[test]
    fn test_setters_replace_auth() {
        let client = PublishClient::new("uri");
        client.set_auth_basic("user", "pass");
        assert!(matches!(client.auth(), Auth::Basic { .. }));

        client.set_auth_bearer("token");
        assert!(matches!(client.auth(), Auth::Bearer(_)));

        client.set_auth_jwt(serde_json::Map::new(), b"key".to_vec());
        assert!(matches!(client.auth(), Auth::Jwt { .. }));

        client.set_auth(Auth::None);
        assert!(matches!(client.auth(), Auth::None));
    }
}
