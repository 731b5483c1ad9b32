//! WebSocket control message builder.

use serde_json::{Map, Value};

use crate::error::Result;

/// Build a JSON control message for WebSocket-over-HTTP signaling.
///
/// Merges `args` with a `type` field; the given type always overwrites a
/// `type` key supplied in `args`. Key order is not significant.
///
/// # Example
///
/// ```
/// use gripwire::ws::websocket_control_message;
///
/// let message = websocket_control_message("subscribe", None).unwrap();
/// assert_eq!(message, r#"{"type":"subscribe"}"#);
/// ```
pub fn websocket_control_message(
    message_type: &str,
    args: Option<&Map<String, Value>>,
) -> Result<String> {
    let mut out = args.cloned().unwrap_or_default();
    out.insert("type".to_string(), message_type.into());
    Ok(serde_json::to_string(&Value::Object(out))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_without_args() {
        let message = websocket_control_message("type", None).unwrap();
        assert_eq!(message, r#"{"type":"type"}"#);
    }

    #[test]
    fn test_with_args() {
        let mut args = Map::new();
        args.insert("channel".to_string(), "test".into());
        let message = websocket_control_message("subscribe", Some(&args)).unwrap();
        let parsed: Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed, json!({"type": "subscribe", "channel": "test"}));
    }

    #[test]
    fn test_type_overwrites_args() {
        let mut args = Map::new();
        args.insert("type".to_string(), "other".into());
        let message = websocket_control_message("subscribe", Some(&args)).unwrap();
        let parsed: Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed, json!({"type": "subscribe"}));
    }
}
