//! Fan-out publishing across a set of endpoints.
//!
//! [`Publisher`] applies one item to every configured [`PublishClient`] in
//! registration order, stopping at the first failure. [`GripPublisher`]
//! adds GRIP-endpoint configuration and convenience publishing of plain
//! strings or bytes as HTTP response/stream payloads.
//!
//! # Example
//!
//! ```ignore
//! use gripwire::grip::parse_grip_uri;
//! use gripwire::GripPublisher;
//!
//! let config = parse_grip_uri("https://api.example.com/realm?iss=realm&key=base64:a2V5")?;
//! let mut publisher = GripPublisher::new();
//! publisher.apply_grip_config(std::slice::from_ref(&config));
//!
//! publisher.publish_http_stream("updates", "data\n", None, None).await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::client::PublishClient;
use crate::error::Result;
use crate::format::{Format, HttpResponseFormat, HttpStreamFormat};
use crate::grip::GripConfig;
use crate::item::Item;

/// Configuration entry for one plain publishing endpoint.
///
/// A URI is required; `iss` and `key` together enable JWT auth. Entries
/// without a URI are unrepresentable here - malformed config fails when it
/// is deserialized rather than being skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Publishing endpoint URI.
    pub uri: String,
    /// Issuer claim for JWT auth.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub iss: Option<String>,
    /// Symmetric signing key for JWT auth.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<Vec<u8>>,
}

/// A set of publishing endpoints addressed as one.
///
/// The client list is owned exclusively; mutating it while publishes are
/// in flight is the caller's responsibility to synchronize.
#[derive(Default)]
pub struct Publisher {
    clients: Vec<Arc<PublishClient>>,
}

impl Publisher {
    /// Create an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a publisher from endpoint configuration entries.
    pub fn with_config(entries: &[EndpointConfig]) -> Self {
        let mut publisher = Self::new();
        publisher.apply_config(entries);
        publisher
    }

    /// Append a client.
    pub fn add_client(&mut self, client: Arc<PublishClient>) {
        self.clients.push(client);
    }

    /// Drop all configured clients.
    pub fn remove_all_clients(&mut self) {
        self.clients.clear();
    }

    /// The configured clients, in registration order.
    pub fn clients(&self) -> &[Arc<PublishClient>] {
        &self.clients
    }

    /// Append one client per configuration entry. JWT auth is enabled when
    /// an entry carries both `iss` and `key`.
    pub fn apply_config(&mut self, entries: &[EndpointConfig]) {
        for entry in entries {
            let client = PublishClient::new(&entry.uri);
            if let (Some(iss), Some(key)) = (&entry.iss, &entry.key) {
                let mut claims = Map::new();
                claims.insert("iss".to_string(), iss.as_str().into());
                client.set_auth_jwt(claims, key.clone());
            }
            self.clients.push(Arc::new(client));
        }
    }

    /// Publish an item to a channel on every configured endpoint.
    ///
    /// Clients are tried in registration order; the first failure is
    /// returned verbatim and the remaining clients are not attempted.
    /// Callers needing delivery to all endpoints despite failures must
    /// retry or parallelize externally.
    pub async fn publish(&self, channel: &str, item: &Item) -> Result<()> {
        for client in &self.clients {
            client.publish(channel, item).await?;
        }
        Ok(())
    }
}

/// Content accepted by [`GripPublisher::publish_http_response`].
#[derive(Debug, Clone)]
pub enum ResponseContent {
    /// A fully-formed response format.
    Format(HttpResponseFormat),
    /// A text body.
    Text(String),
    /// A raw byte body.
    Bytes(Vec<u8>),
}

impl ResponseContent {
    fn into_format(self) -> HttpResponseFormat {
        match self {
            ResponseContent::Format(format) => format,
            ResponseContent::Text(text) => HttpResponseFormat::from_body(text),
            ResponseContent::Bytes(bytes) => HttpResponseFormat::from_body(bytes),
        }
    }
}

impl From<HttpResponseFormat> for ResponseContent {
    fn from(format: HttpResponseFormat) -> Self {
        ResponseContent::Format(format)
    }
}

impl From<&str> for ResponseContent {
    fn from(text: &str) -> Self {
        ResponseContent::Text(text.to_string())
    }
}

impl From<String> for ResponseContent {
    fn from(text: String) -> Self {
        ResponseContent::Text(text)
    }
}

impl From<Vec<u8>> for ResponseContent {
    fn from(bytes: Vec<u8>) -> Self {
        ResponseContent::Bytes(bytes)
    }
}

impl From<&[u8]> for ResponseContent {
    fn from(bytes: &[u8]) -> Self {
        ResponseContent::Bytes(bytes.to_vec())
    }
}

/// Content accepted by [`GripPublisher::publish_http_stream`].
#[derive(Debug, Clone)]
pub enum StreamContent {
    /// A fully-formed stream format.
    Format(HttpStreamFormat),
    /// A text chunk.
    Text(String),
    /// A raw byte chunk.
    Bytes(Vec<u8>),
}

impl StreamContent {
    fn into_format(self) -> HttpStreamFormat {
        match self {
            StreamContent::Format(format) => format,
            StreamContent::Text(text) => HttpStreamFormat::chunk(text),
            StreamContent::Bytes(bytes) => HttpStreamFormat::chunk(bytes),
        }
    }
}

impl From<HttpStreamFormat> for StreamContent {
    fn from(format: HttpStreamFormat) -> Self {
        StreamContent::Format(format)
    }
}

impl From<&str> for StreamContent {
    fn from(text: &str) -> Self {
        StreamContent::Text(text.to_string())
    }
}

impl From<String> for StreamContent {
    fn from(text: String) -> Self {
        StreamContent::Text(text)
    }
}

impl From<Vec<u8>> for StreamContent {
    fn from(bytes: Vec<u8>) -> Self {
        StreamContent::Bytes(bytes)
    }
}

impl From<&[u8]> for StreamContent {
    fn from(bytes: &[u8]) -> Self {
        StreamContent::Bytes(bytes.to_vec())
    }
}

/// A fan-out publisher for GRIP proxy endpoints.
#[derive(Default)]
pub struct GripPublisher {
    publisher: Publisher,
}

impl GripPublisher {
    /// Create an empty GRIP publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GRIP publisher from control endpoint configurations.
    pub fn with_grip_config(configs: &[GripConfig]) -> Self {
        let mut publisher = Self::new();
        publisher.apply_grip_config(configs);
        publisher
    }

    /// Append one client per GRIP control endpoint. An endpoint with both
    /// `control_iss` and `key` uses JWT auth; a key alone is taken as a
    /// pre-signed bearer token.
    pub fn apply_grip_config(&mut self, configs: &[GripConfig]) {
        for config in configs {
            let client = PublishClient::new(&config.control_uri);
            match (&config.control_iss, &config.key) {
                (Some(iss), Some(key)) => {
                    let mut claims = Map::new();
                    claims.insert("iss".to_string(), iss.as_str().into());
                    client.set_auth_jwt(claims, key.clone());
                }
                (None, Some(key)) => {
                    client.set_auth_bearer(String::from_utf8_lossy(key).into_owned());
                }
                _ => {}
            }
            self.publisher.add_client(Arc::new(client));
        }
    }

    /// Append a client.
    pub fn add_client(&mut self, client: Arc<PublishClient>) {
        self.publisher.add_client(client);
    }

    /// Drop all configured clients.
    pub fn remove_all_clients(&mut self) {
        self.publisher.remove_all_clients();
    }

    /// The configured clients, in registration order.
    pub fn clients(&self) -> &[Arc<PublishClient>] {
        self.publisher.clients()
    }

    /// Publish an item to a channel on every configured endpoint,
    /// fail-fast like [`Publisher::publish`].
    pub async fn publish(&self, channel: &str, item: &Item) -> Result<()> {
        self.publisher.publish(channel, item).await
    }

    /// Publish content to HTTP response clients on a channel.
    pub async fn publish_http_response(
        &self,
        channel: &str,
        content: impl Into<ResponseContent>,
        id: Option<&str>,
        prev_id: Option<&str>,
    ) -> Result<()> {
        let item = build_item(content.into().into_format(), id, prev_id);
        self.publish(channel, &item).await
    }

    /// Publish content to HTTP stream clients on a channel.
    pub async fn publish_http_stream(
        &self,
        channel: &str,
        content: impl Into<StreamContent>,
        id: Option<&str>,
        prev_id: Option<&str>,
    ) -> Result<()> {
        let item = build_item(content.into().into_format(), id, prev_id);
        self.publish(channel, &item).await
    }
}

fn build_item(format: impl Format + 'static, id: Option<&str>, prev_id: Option<&str>) -> Item {
    let mut item = Item::single(format);
    if let Some(id) = id {
        item = item.with_id(id);
    }
    if let Some(prev_id) = prev_id {
        item = item.with_prev_id(prev_id);
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Auth;

    #[test]
    fn test_apply_config() {
        let publisher = Publisher::with_config(&[EndpointConfig {
            uri: "uri".to_string(),
            iss: Some("hello".to_string()),
            key: Some(b"key".to_vec()),
        }]);
        assert_eq!(publisher.clients().len(), 1);
        assert_eq!(publisher.clients()[0].uri(), "uri");
        assert!(matches!(publisher.clients()[0].auth(), Auth::Jwt { .. }));
    }

    #[test]
    fn test_apply_config_without_auth() {
        let publisher = Publisher::with_config(&[EndpointConfig {
            uri: "uri".to_string(),
            iss: None,
            key: None,
        }]);
        assert!(matches!(publisher.clients()[0].auth(), Auth::None));
    }

    #[test]
    fn test_add_and_remove_all_clients() {
        let mut publisher = Publisher::new();
        let client = Arc::new(PublishClient::new("uri"));
        publisher.add_client(client.clone());
        publisher.add_client(client);
        assert_eq!(publisher.clients().len(), 2);
        publisher.remove_all_clients();
        assert!(publisher.clients().is_empty());
    }

    #[test]
    fn test_apply_grip_config_jwt() {
        let publisher = GripPublisher::with_grip_config(&[GripConfig {
            control_uri: "uri".to_string(),
            control_iss: Some("hello".to_string()),
            key: Some(b"key".to_vec()),
        }]);
        assert_eq!(publisher.clients().len(), 1);
        assert!(matches!(publisher.clients()[0].auth(), Auth::Jwt { .. }));
    }

    #[test]
    fn test_apply_grip_config_bearer() {
        let publisher = GripPublisher::with_grip_config(&[GripConfig {
            control_uri: "uri".to_string(),
            control_iss: None,
            key: Some(b"key".to_vec()),
        }]);
        match publisher.clients()[0].auth() {
            Auth::Bearer(token) => assert_eq!(token, "key"),
            other => panic!("expected bearer auth, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_config_from_json() {
        let entries: Vec<EndpointConfig> =
            serde_json::from_str(r#"[{"uri": "http://localhost:5561", "iss": "realm"}]"#).unwrap();
        assert_eq!(entries[0].uri, "http://localhost:5561");
        assert_eq!(entries[0].iss.as_deref(), Some("realm"));
        assert_eq!(entries[0].key, None);

        // A missing URI is a deserialization error, not a silent skip.
        assert!(serde_json::from_str::<Vec<EndpointConfig>>(r#"[{"iss": "realm"}]"#).is_err());
    }

    #[test]
    fn test_response_content_conversions() {
        assert_eq!(
            ResponseContent::from("data").into_format().export(),
            HttpResponseFormat::from_body("data").export()
        );
        assert_eq!(
            ResponseContent::from(b"data".to_vec()).into_format().export(),
            HttpResponseFormat::from_body(&b"data"[..]).export()
        );
        let format = HttpResponseFormat {
            code: Some(200),
            ..Default::default()
        };
        assert_eq!(
            ResponseContent::from(format.clone()).into_format().export(),
            format.export()
        );
    }

    #[test]
    fn test_stream_content_conversions() {
        assert_eq!(
            StreamContent::from("data").into_format().export(),
            HttpStreamFormat::chunk("data").export()
        );
        assert_eq!(
            StreamContent::from(HttpStreamFormat::close()).into_format().export(),
            HttpStreamFormat::close().export()
        );
    }

    #[test]
    fn test_build_item_ids() {
        let item = build_item(HttpStreamFormat::chunk("data"), Some("id"), Some("prev-id"));
        let export = item.export().unwrap();
        assert_eq!(export["id"], "id");
        assert_eq!(export["prev-id"], "prev-id");

        let item = build_item(HttpStreamFormat::chunk("data"), None, None);
        let export = item.export().unwrap();
        assert!(!export.contains_key("id"));
        assert!(!export.contains_key("prev-id"));
    }
}
