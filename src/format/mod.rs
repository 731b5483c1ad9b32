//! Publish formats - the wire payload variants carried by an [`Item`].
//!
//! Every format knows its wire name and how to render itself into the
//! JSON fragment the proxy expects:
//!
//! - [`HttpResponseFormat`] - payloads for held HTTP request/response clients
//! - [`HttpStreamFormat`] - chunks (or a close action) for HTTP stream clients
//! - [`WebSocketMessageFormat`] - messages for WebSocket clients
//!
//! # Example
//!
//! ```
//! use gripwire::format::{Format, HttpStreamFormat};
//!
//! let format = HttpStreamFormat::chunk("event: update\n\n");
//! assert_eq!(format.name(), "http-stream");
//! assert_eq!(format.export()["content"], "event: update\n\n");
//! ```
//!
//! [`Item`]: crate::Item

mod http_response;
mod http_stream;
mod ws_message;

pub use http_response::HttpResponseFormat;
pub use http_stream::HttpStreamFormat;
pub use ws_message::WebSocketMessageFormat;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};

/// A named wire-format payload.
///
/// Formats are bundled into an [`Item`](crate::Item) and rendered into the
/// publish envelope keyed by their name. Implementations outside this crate
/// are allowed; the proxy decides which names it understands.
pub trait Format: Send + Sync {
    /// The wire name this format is published under, e.g. `http-stream`.
    fn name(&self) -> &'static str;

    /// Render the format-specific JSON fragment.
    fn export(&self) -> Value;
}

/// Insert `data` under `text_key` when it is valid UTF-8, otherwise under
/// `bin_key` base64-encoded. Never both.
pub(crate) fn insert_text_or_bin(
    export: &mut Map<String, Value>,
    text_key: &str,
    bin_key: &str,
    data: &[u8],
) {
    match std::str::from_utf8(data) {
        Ok(text) => export.insert(text_key.to_string(), Value::String(text.to_string())),
        Err(_) => export.insert(bin_key.to_string(), Value::String(BASE64.encode(data))),
    };
}
