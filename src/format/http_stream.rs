//! Format for publishing to HTTP stream clients.

use bytes::Bytes;
use serde_json::{Map, Value};

use super::{insert_text_or_bin, Format};

/// Payload delivered to HTTP stream clients connected to a GRIP proxy.
///
/// A stream message is either a chunk of content appended to the open
/// response or a close action that ends it. When the close flag is set the
/// content is ignored.
#[derive(Debug, Clone, Default)]
pub struct HttpStreamFormat {
    /// Content appended to the stream.
    pub content: Option<Bytes>,
    /// Close the held connection instead of writing content.
    pub close: bool,
}

impl HttpStreamFormat {
    /// Create a content chunk.
    pub fn chunk(content: impl Into<Bytes>) -> Self {
        Self {
            content: Some(content.into()),
            close: false,
        }
    }

    /// Create a close action.
    pub fn close() -> Self {
        Self {
            content: None,
            close: true,
        }
    }
}

impl Format for HttpStreamFormat {
    fn name(&self) -> &'static str {
        "http-stream"
    }

    fn export(&self) -> Value {
        let mut export = Map::new();
        if self.close {
            export.insert("action".to_string(), "close".into());
        } else if let Some(content) = &self.content {
            insert_text_or_bin(&mut export, "content", "content-bin", content);
        }
        Value::Object(export)
    }
}
