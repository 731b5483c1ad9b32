//! WebSocket-over-HTTP - carrying WebSocket events in plain HTTP bodies.
//!
//! A GRIP proxy translates a client WebSocket connection into a series of
//! HTTP requests against the origin. Each request/response body holds a
//! sequence of events in a length-prefixed text framing:
//!
//! ```text
//! TYPE[ hex-length\r\nCONTENT]\r\n
//! ```
//!
//! - [`encode_websocket_events`] / [`decode_websocket_events`] - the framing codec
//! - [`websocket_control_message`] - JSON control messages (subscribe,
//!   unsubscribe, ...) sent as events of type `TEXT` with a `c:` prefix
//!   by convention
//!
//! # Example
//!
//! ```
//! use gripwire::ws::{encode_websocket_events, WebSocketEvent};
//!
//! let body = encode_websocket_events(&[
//!     WebSocketEvent::new("TEXT", "Hello"),
//!     WebSocketEvent::new("TEXT", ""),
//! ]);
//! assert_eq!(body, "TEXT 5\r\nHello\r\nTEXT\r\n");
//! ```

mod codec;
mod control;
mod event;

pub use codec::{decode_websocket_events, encode_websocket_events};
pub use control::websocket_control_message;
pub use event::WebSocketEvent;
