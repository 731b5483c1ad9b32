//! WebSocket event type.

/// One WebSocket event carried over the WebSocket-over-HTTP framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSocketEvent {
    /// Event type token, e.g. `OPEN`, `TEXT`, `CLOSE`.
    pub event_type: String,
    /// Event content; empty for events that carry none.
    pub content: String,
}

impl WebSocketEvent {
    /// Connection opened.
    pub const OPEN: &'static str = "OPEN";
    /// Text message.
    pub const TEXT: &'static str = "TEXT";
    /// Binary message.
    pub const BINARY: &'static str = "BINARY";
    /// Keepalive ping.
    pub const PING: &'static str = "PING";
    /// Keepalive pong.
    pub const PONG: &'static str = "PONG";
    /// Clean close.
    pub const CLOSE: &'static str = "CLOSE";
    /// Unclean disconnect.
    pub const DISCONNECT: &'static str = "DISCONNECT";

    /// Create an event.
    pub fn new(event_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            content: content.into(),
        }
    }
}
