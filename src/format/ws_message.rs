//! Format for publishing to WebSocket clients.

use bytes::Bytes;
use serde_json::{json, Value};

use super::Format;

/// Payload delivered to WebSocket clients connected to a GRIP proxy.
///
/// The binary flag selects the field name (`content-bin` instead of
/// `content`); the content itself is carried as its string representation
/// in both cases. Unlike the HTTP formats there is no base64 transform
/// here - that is the wire contract the proxy expects.
#[derive(Debug, Clone, Default)]
pub struct WebSocketMessageFormat {
    /// Message content.
    pub content: Bytes,
    /// Deliver as a binary WebSocket frame instead of a text frame.
    pub binary: bool,
}

impl WebSocketMessageFormat {
    /// Create a text message.
    pub fn text(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
            binary: false,
        }
    }

    /// Create a binary message.
    pub fn binary(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
            binary: true,
        }
    }
}

impl Format for WebSocketMessageFormat {
    fn name(&self) -> &'static str {
        "ws-message"
    }

    fn export(&self) -> Value {
        let content = String::from_utf8_lossy(&self.content);
        if self.binary {
            json!({ "content-bin": content })
        } else {
            json!({ "content": content })
        }
    }
}
