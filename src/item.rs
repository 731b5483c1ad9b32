//! Item - the publish envelope.
//!
//! An [`Item`] bundles one or more [`Format`] payloads with an optional
//! message ID and previous-ID pair. A single publish call delivers the same
//! item to every kind of connected client; the proxy picks the fragment
//! matching each client's transport by format name.
//!
//! # Example
//!
//! ```
//! use gripwire::format::{HttpStreamFormat, WebSocketMessageFormat};
//! use gripwire::Item;
//!
//! let item = Item::new(vec![
//!     Box::new(HttpStreamFormat::chunk("data\n")),
//!     Box::new(WebSocketMessageFormat::text("data")),
//! ])
//! .with_id("3")
//! .with_prev_id("2");
//!
//! let export = item.export().unwrap();
//! assert_eq!(export["id"], "3");
//! assert!(export.contains_key("http-stream"));
//! assert!(export.contains_key("ws-message"));
//! ```

use serde_json::{Map, Value};

use crate::error::{GripError, Result};
use crate::format::Format;

/// A bundle of format payloads published as one message.
///
/// At most one format of each name may be present; [`Item::export`] fails
/// with [`GripError::DuplicateFormat`] otherwise. An item is immutable once
/// built and can be shared read-only across any number of publish calls.
pub struct Item {
    formats: Vec<Box<dyn Format>>,
    id: Option<String>,
    prev_id: Option<String>,
}

impl Item {
    /// Create an item from a list of format payloads.
    pub fn new(formats: Vec<Box<dyn Format>>) -> Self {
        Self {
            formats,
            id: None,
            prev_id: None,
        }
    }

    /// Create an item carrying a single format payload.
    pub fn single(format: impl Format + 'static) -> Self {
        Self::new(vec![Box::new(format)])
    }

    /// Set the message ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the previous message ID, used by the proxy to resume delivery
    /// in order.
    pub fn with_prev_id(mut self, prev_id: impl Into<String>) -> Self {
        self.prev_id = Some(prev_id.into());
        self
    }

    /// Serialize the item into the publish envelope.
    ///
    /// The result contains `id` and `prev-id` when set, plus one entry per
    /// format keyed by its name. Two formats sharing a name fail the whole
    /// export; no partial map is returned.
    pub fn export(&self) -> Result<Map<String, Value>> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            let name = format.name();
            if seen.contains(&name) {
                return Err(GripError::DuplicateFormat(name.to_string()));
            }
            seen.push(name);
        }

        let mut export = Map::new();
        if let Some(id) = &self.id {
            export.insert("id".to_string(), id.as_str().into());
        }
        if let Some(prev_id) = &self.prev_id {
            export.insert("prev-id".to_string(), prev_id.as_str().into());
        }
        for format in &self.formats {
            export.insert(format.name().to_string(), format.export());
        }
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TestFormat {
        name: &'static str,
        value: &'static str,
    }

    impl Format for TestFormat {
        fn name(&self) -> &'static str {
            self.name
        }

        fn export(&self) -> Value {
            self.value.into()
        }
    }

    #[test]
    fn test_export_with_ids() {
        let item = Item::new(vec![
            Box::new(TestFormat {
                name: "test-format",
                value: "value1",
            }),
            Box::new(TestFormat {
                name: "test-format2",
                value: "value2",
            }),
        ])
        .with_id("id")
        .with_prev_id("prev-id");

        let export = item.export().unwrap();
        assert_eq!(export["id"], "id");
        assert_eq!(export["prev-id"], "prev-id");
        assert_eq!(export["test-format"], "value1");
        assert_eq!(export["test-format2"], "value2");
    }

    #[test]
    fn test_export_without_ids() {
        let item = Item::single(TestFormat {
            name: "test-format",
            value: "value1",
        });

        let export = item.export().unwrap();
        assert!(!export.contains_key("id"));
        assert!(!export.contains_key("prev-id"));
        assert_eq!(export["test-format"], "value1");
    }

    #[test]
    fn test_export_is_deterministic() {
        let item = Item::single(TestFormat {
            name: "test-format",
            value: "value1",
        })
        .with_id("id");

        assert_eq!(
            Value::Object(item.export().unwrap()),
            json!({"id": "id", "test-format": "value1"})
        );
        assert_eq!(item.export().unwrap(), item.export().unwrap());
    }

    #[test]
    fn test_duplicate_format_fails_export() {
        let item = Item::new(vec![
            Box::new(TestFormat {
                name: "test-format",
                value: "value1",
            }),
            Box::new(TestFormat {
                name: "test-format",
                value: "value2",
            }),
        ]);

        match item.export() {
            Err(GripError::DuplicateFormat(name)) => assert_eq!(name, "test-format"),
            other => panic!("expected DuplicateFormat, got {:?}", other.map(Value::Object)),
        }
    }
}
