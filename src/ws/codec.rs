//! WebSocket-over-HTTP framing codec.
//!
//! Events are framed as `<type> <hex-length>\r\n<content>\r\n` when they
//! carry content and `<type>\r\n` when they do not. The length is the byte
//! count of the content in lowercase hex. A body ends at the end of the
//! buffer or at an explicit blank `\r\n` marker.

use std::fmt::Write;

use super::WebSocketEvent;
use crate::error::{GripError, Result};

/// Encode a sequence of events into a request/response body.
pub fn encode_websocket_events(events: &[WebSocketEvent]) -> String {
    let mut out = String::new();
    for event in events {
        if event.content.is_empty() {
            let _ = write!(out, "{}\r\n", event.event_type);
        } else {
            let _ = write!(
                out,
                "{} {:x}\r\n{}\r\n",
                event.event_type,
                event.content.len(),
                event.content
            );
        }
    }
    out
}

/// Decode a request/response body into its sequence of events.
///
/// One call consumes one full buffer; the codec is not restartable
/// mid-stream. Truncated frames, invalid hex lengths and content that is
/// not valid UTF-8 fail with [`GripError::Format`].
pub fn decode_websocket_events(body: &str) -> Result<Vec<WebSocketEvent>> {
    let bytes = body.as_bytes();
    let mut events = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        // Explicit end marker.
        if &bytes[pos..] == b"\r\n" {
            break;
        }

        let line_end = pos
            + find_crlf(&bytes[pos..]).ok_or_else(|| {
                GripError::Format("websocket event missing \\r\\n terminator".to_string())
            })?;
        let type_line = &body[pos..line_end];
        pos = line_end + 2;

        match type_line.split_once(' ') {
            Some((event_type, len_hex)) => {
                let content_len = usize::from_str_radix(len_hex, 16).map_err(|_| {
                    GripError::Format(format!("invalid websocket content length '{}'", len_hex))
                })?;
                if bytes.len().saturating_sub(pos) < content_len.saturating_add(2) {
                    return Err(GripError::Format(
                        "truncated websocket event content".to_string(),
                    ));
                }
                let content_end = pos + content_len;
                let content = std::str::from_utf8(&bytes[pos..content_end]).map_err(|_| {
                    GripError::Format("websocket event content is not valid UTF-8".to_string())
                })?;
                if &bytes[content_end..content_end + 2] != b"\r\n" {
                    return Err(GripError::Format(
                        "websocket event content missing \\r\\n terminator".to_string(),
                    ));
                }
                events.push(WebSocketEvent::new(event_type, content));
                pos = content_end + 2;
            }
            None => events.push(WebSocketEvent::new(type_line, "")),
        }
    }

    Ok(events)
}

fn find_crlf(bytes: &[u8]) -> Option<usize> {
    bytes.windows(2).position(|pair| pair == b"\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let body = encode_websocket_events(&[
            WebSocketEvent::new("TEXT", "Hello"),
            WebSocketEvent::new("TEXT", ""),
        ]);
        assert_eq!(body, "TEXT 5\r\nHello\r\nTEXT\r\n");
    }

    #[test]
    fn test_encode_length_is_byte_count() {
        // Two-byte UTF-8 character: one char, two bytes on the wire.
        let body = encode_websocket_events(&[WebSocketEvent::new("TEXT", "é")]);
        assert_eq!(body, "TEXT 2\r\né\r\n");
    }

    #[test]
    fn test_encode_long_content_lowercase_hex() {
        let content = "x".repeat(26);
        let body = encode_websocket_events(&[WebSocketEvent::new("TEXT", content.clone())]);
        assert_eq!(body, format!("TEXT 1a\r\n{}\r\n", content));
    }

    #[test]
    fn test_decode_mixed_events() {
        let events =
            decode_websocket_events("OPEN\r\nTEXT 5\r\nHello\r\nTEXT 0\r\n\r\nCLOSE\r\nTEXT\r\nCLOSE\r\n")
                .unwrap();
        let expected = [
            ("OPEN", ""),
            ("TEXT", "Hello"),
            ("TEXT", ""),
            ("CLOSE", ""),
            ("TEXT", ""),
            ("CLOSE", ""),
        ];
        assert_eq!(events.len(), expected.len());
        for (event, (event_type, content)) in events.iter().zip(expected) {
            assert_eq!(event.event_type, event_type);
            assert_eq!(event.content, content);
        }
    }

    #[test]
    fn test_decode_single_event() {
        let events = decode_websocket_events("OPEN\r\n").unwrap();
        assert_eq!(events, vec![WebSocketEvent::new("OPEN", "")]);

        let events = decode_websocket_events("TEXT 5\r\nHello\r\n").unwrap();
        assert_eq!(events, vec![WebSocketEvent::new("TEXT", "Hello")]);
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert!(decode_websocket_events("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_stops_at_end_marker() {
        let events = decode_websocket_events("TEXT 2\r\nhi\r\n\r\n").unwrap();
        assert_eq!(events, vec![WebSocketEvent::new("TEXT", "hi")]);
    }

    #[test]
    fn test_decode_truncated_type_line() {
        assert!(decode_websocket_events("TEXT 5").is_err());
        assert!(decode_websocket_events("OPEN\r\nTEXT").is_err());
    }

    #[test]
    fn test_decode_truncated_content() {
        assert!(decode_websocket_events("TEXT 5\r\nHel").is_err());
    }

    #[test]
    fn test_decode_bad_length() {
        assert!(decode_websocket_events("TEXT zz\r\nHello\r\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let events = vec![
            WebSocketEvent::new("OPEN", ""),
            WebSocketEvent::new("TEXT", "Hello"),
            WebSocketEvent::new("BINARY", "raw"),
            WebSocketEvent::new("CLOSE", ""),
        ];
        let decoded = decode_websocket_events(&encode_websocket_events(&events)).unwrap();
        assert_eq!(decoded, events);
    }
}
