//! Format for publishing to held HTTP request/response clients.

use bytes::Bytes;
use serde_json::{Map, Value};

use super::{insert_text_or_bin, Format};

/// Payload delivered to HTTP response clients connected to a GRIP proxy.
///
/// Only the fields that are set appear in the export. The body is emitted
/// as `body` when it is valid UTF-8 and as base64 `body-bin` otherwise.
#[derive(Debug, Clone, Default)]
pub struct HttpResponseFormat {
    /// HTTP status code, included only when positive.
    pub code: Option<u16>,
    /// Reason phrase, included only when non-empty.
    pub reason: Option<String>,
    /// Response headers, included only when non-empty.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Option<Bytes>,
}

impl HttpResponseFormat {
    /// Create an empty format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a format carrying only a body.
    pub fn from_body(body: impl Into<Bytes>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }
}

impl Format for HttpResponseFormat {
    fn name(&self) -> &'static str {
        "http-response"
    }

    fn export(&self) -> Value {
        let mut export = Map::new();
        if let Some(code) = self.code.filter(|c| *c > 0) {
            export.insert("code".to_string(), code.into());
        }
        if let Some(reason) = self.reason.as_deref().filter(|r| !r.is_empty()) {
            export.insert("reason".to_string(), reason.into());
        }
        if !self.headers.is_empty() {
            let headers: Map<String, Value> = self
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            export.insert("headers".to_string(), Value::Object(headers));
        }
        if let Some(body) = &self.body {
            insert_text_or_bin(&mut export, "body", "body-bin", body);
        }
        Value::Object(export)
    }
}
