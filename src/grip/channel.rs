//! Channel - a named topic with an optional resume cursor.

use serde::{Deserialize, Serialize};

/// A channel on a GRIP proxy.
///
/// The optional previous ID tells the proxy which message the client last
/// saw, so delivery can resume in order. Serializes as
/// `{"name": ..., "prev-id"?: ...}` inside hold instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name.
    pub name: String,
    /// ID of the last message seen on this channel.
    #[serde(rename = "prev-id", skip_serializing_if = "Option::is_none", default)]
    pub prev_id: Option<String>,
}

impl Channel {
    /// Create a channel without a resume cursor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prev_id: None,
        }
    }

    /// Set the previous message ID.
    pub fn with_prev_id(mut self, prev_id: impl Into<String>) -> Self {
        self.prev_id = Some(prev_id.into());
        self
    }
}
