//! Response - HTTP response data rendered into a hold instruction.

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::format::insert_text_or_bin;

/// A set of HTTP response data.
///
/// Used as input to the hold instruction builders; the proxy deserializes
/// it and replays it to the held client as an actual HTTP response. This is
/// not part of the publish envelope.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code, included only when positive.
    pub code: Option<u16>,
    /// Reason phrase, included only when non-empty.
    pub reason: Option<String>,
    /// Response headers, included only when non-empty.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Option<Bytes>,
}

impl Response {
    /// Create an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a response carrying only a body.
    pub fn from_body(body: impl Into<Bytes>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Render the populated fields into a JSON object. The body follows the
    /// same UTF-8 rule as the publish formats: `body` for text, base64
    /// `body-bin` otherwise.
    pub(crate) fn to_export(&self) -> Map<String, Value> {
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
        export
    }
}
