//! GRIP proxy instructions - holds, channel headers, connection URIs and
//! signature validation.
//!
//! A GRIP proxy holds client connections open on behalf of the origin. The
//! origin instructs it through response bodies and headers built here:
//!
//! - [`create_hold`] / [`create_hold_response`] / [`create_hold_stream`] -
//!   the JSON hold instruction returned in a response body
//! - [`create_grip_channel_header`] - the `Grip-Channel` header value for
//!   plain HTTP responses
//! - [`parse_grip_uri`] - turn a GRIP connection URI into a [`GripConfig`]
//! - [`validate_sig`] - check the `Grip-Sig` header a proxy sends inbound
//!
//! # Example
//!
//! ```
//! use gripwire::grip::{create_hold_stream, Channel};
//!
//! let instruct = create_hold_stream(&[Channel::new("updates")], None).unwrap();
//! assert!(instruct.contains("\"mode\":\"stream\""));
//! ```

mod channel;
mod hold;
mod response;
mod sig;
mod uri;

pub use channel::Channel;
pub use hold::{
    create_grip_channel_header, create_hold, create_hold_response, create_hold_stream, HoldBody,
};
pub use response::Response;
pub use sig::validate_sig;
pub use uri::{parse_grip_uri, GripConfig};
