//! Hold instruction and channel header builders.

use bytes::Bytes;
use serde_json::{Map, Value};

use super::{Channel, Response};
use crate::error::Result;
use crate::format::insert_text_or_bin;

/// Body content accepted by the hold instruction builders.
///
/// A hold may carry an initial response for the held client: either a full
/// [`Response`], plain text, or raw bytes. `From` impls cover all three, so
/// callers can pass a `&str`, `String`, `Vec<u8>` or `Response` directly.
#[derive(Debug, Clone)]
pub enum HoldBody {
    /// A structured HTTP response.
    Response(Response),
    /// A text body.
    Text(String),
    /// A raw byte body, emitted base64-encoded when not valid UTF-8.
    Bytes(Vec<u8>),
}

impl HoldBody {
    fn to_export(&self) -> Map<String, Value> {
        match self {
            HoldBody::Response(response) => response.to_export(),
            HoldBody::Text(text) => {
                let mut export = Map::new();
                export.insert("body".to_string(), text.as_str().into());
                export
            }
            HoldBody::Bytes(bytes) => {
                let mut export = Map::new();
                insert_text_or_bin(&mut export, "body", "body-bin", bytes);
                export
            }
        }
    }
}

impl From<Response> for HoldBody {
    fn from(response: Response) -> Self {
        HoldBody::Response(response)
    }
}

impl From<&str> for HoldBody {
    fn from(text: &str) -> Self {
        HoldBody::Text(text.to_string())
    }
}

impl From<String> for HoldBody {
    fn from(text: String) -> Self {
        HoldBody::Text(text)
    }
}

impl From<Vec<u8>> for HoldBody {
    fn from(bytes: Vec<u8>) -> Self {
        HoldBody::Bytes(bytes)
    }
}

impl From<&[u8]> for HoldBody {
    fn from(bytes: &[u8]) -> Self {
        HoldBody::Bytes(bytes.to_vec())
    }
}

impl From<Bytes> for HoldBody {
    fn from(bytes: Bytes) -> Self {
        HoldBody::Bytes(bytes.to_vec())
    }
}

/// Build a hold instruction telling the proxy to keep the current
/// connection open on the given channels.
///
/// `mode` is passed through verbatim; the proxy understands `response` and
/// `stream` (see [`create_hold_response`] and [`create_hold_stream`]).
/// `timeout` is in seconds. The `response` key is omitted when no response
/// fields are populated.
///
/// # Example
///
/// ```
/// use gripwire::grip::{create_hold, Channel};
///
/// let instruct = create_hold("stream", &[Channel::new("c")], Some("body".into()), None).unwrap();
/// let parsed: serde_json::Value = serde_json::from_str(&instruct).unwrap();
/// assert_eq!(parsed["hold"]["mode"], "stream");
/// assert_eq!(parsed["response"]["body"], "body");
/// ```
pub fn create_hold(
    mode: &str,
    channels: &[Channel],
    response: Option<HoldBody>,
    timeout: Option<u64>,
) -> Result<String> {
    let mut hold = Map::new();
    hold.insert("mode".to_string(), mode.into());
    hold.insert("channels".to_string(), serde_json::to_value(channels)?);
    if let Some(timeout) = timeout {
        hold.insert("timeout".to_string(), timeout.into());
    }

    let mut instruct = Map::new();
    instruct.insert("hold".to_string(), Value::Object(hold));
    if let Some(body) = response {
        let rendered = body.to_export();
        if !rendered.is_empty() {
            instruct.insert("response".to_string(), Value::Object(rendered));
        }
    }
    Ok(serde_json::to_string(&instruct)?)
}

/// Build a `response`-mode hold instruction (long-polling).
pub fn create_hold_response(
    channels: &[Channel],
    response: Option<HoldBody>,
    timeout: Option<u64>,
) -> Result<String> {
    create_hold("response", channels, response, timeout)
}

/// Build a `stream`-mode hold instruction. Streams have no timeout.
pub fn create_hold_stream(channels: &[Channel], response: Option<HoldBody>) -> Result<String> {
    create_hold("stream", channels, response, None)
}

/// Build the `Grip-Channel` header value for a plain HTTP response.
///
/// Channels render as `name` or `name; prev-id=<id>` joined by `, `, in
/// input order.
pub fn create_grip_channel_header(channels: &[Channel]) -> String {
    channels
        .iter()
        .map(|channel| match &channel.prev_id {
            Some(prev_id) => format!("{}; prev-id={}", channel.name, prev_id),
            None => channel.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
