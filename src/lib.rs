//! # gripwire
//!
//! Publishing client for GRIP-compatible realtime proxies.
//!
//! A GRIP proxy holds open HTTP long-poll, streaming and WebSocket
//! connections on behalf of an origin server. The origin instructs it
//! with hold instructions and channel headers, and pushes data to held
//! clients by publishing items to the proxy's control endpoint. This
//! crate implements the origin side:
//!
//! - **Instructions** ([`grip`]): hold instructions, the `Grip-Channel`
//!   header, connection URI parsing and `Grip-Sig` validation
//! - **WebSocket-over-HTTP** ([`ws`]): the event framing codec and
//!   control messages
//! - **Publishing** ([`format`], [`Item`], [`PublishClient`],
//!   [`Publisher`], [`GripPublisher`]): the per-format envelope and the
//!   HTTP publish pipeline with basic/JWT/bearer auth
//!
//! ## Example
//!
//! ```ignore
//! use gripwire::grip::parse_grip_uri;
//! use gripwire::GripPublisher;
//!
//! #[tokio::main]
//! async fn main() -> gripwire::Result<()> {
//!     let config = parse_grip_uri("https://api.example.com/realm?iss=realm&key=base64:a2V5")?;
//!     let mut publisher = GripPublisher::new();
//!     publisher.apply_grip_config(std::slice::from_ref(&config));
//!
//!     publisher.publish_http_stream("updates", "data\n", None, None).await
//! }
//! ```

pub mod error;
pub mod format;
pub mod grip;
pub mod ws;

mod auth;
mod client;
mod item;
mod publisher;

pub use auth::Auth;
pub use client::PublishClient;
pub use error::{GripError, Result};
pub use format::Format;
pub use item::Item;
pub use publisher::{
    EndpointConfig, GripPublisher, Publisher, ResponseContent, StreamContent,
};
