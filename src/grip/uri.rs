//! GRIP connection URI parsing.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GripError, Result};

/// Configuration for one GRIP control endpoint.
///
/// Usually produced by [`parse_grip_uri`], but can also be built directly
/// or deserialized from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GripConfig {
    /// Control endpoint base URI.
    pub control_uri: String,
    /// Issuer claim for JWT auth against the control endpoint.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub control_iss: Option<String>,
    /// Symmetric signing key.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<Vec<u8>>,
}

impl GripConfig {
    /// Create a config with only a control URI.
    pub fn new(control_uri: impl Into<String>) -> Self {
        Self {
            control_uri: control_uri.into(),
            control_iss: None,
            key: None,
        }
    }
}

/// Parse a GRIP connection URI into a [`GripConfig`].
///
/// The `iss` and `key` query parameters are consumed; every other
/// parameter stays on the control URI. A key prefixed with `base64:` is
/// decoded to raw bytes, anything else is taken as the literal bytes of
/// the string. A single trailing slash on the path is stripped.
///
/// # Example
///
/// ```
/// use gripwire::grip::parse_grip_uri;
///
/// let config = parse_grip_uri("http://api.example.com/realm?iss=realm&key=base64:a2V5").unwrap();
/// assert_eq!(config.control_uri, "http://api.example.com/realm");
/// assert_eq!(config.control_iss.as_deref(), Some("realm"));
/// assert_eq!(config.key.as_deref(), Some(&b"key"[..]));
/// ```
pub fn parse_grip_uri(uri: &str) -> Result<GripConfig> {
    let mut url = Url::parse(uri)?;

    let mut iss = None;
    let mut raw_key = None;
    let mut rest: Vec<(String, String)> = Vec::new();
    for (name, value) in url.query_pairs() {
        match name.as_ref() {
            "iss" => iss = Some(value.into_owned()),
            "key" => raw_key = Some(value.into_owned()),
            _ => rest.push((name.into_owned(), value.into_owned())),
        }
    }

    let key = match raw_key {
        Some(raw) => {
            if raw.starts_with("base64:") {
                let encoded = &raw["base64:".len()..];
                Some(
                    BASE64
                        .decode(encoded)
                        .map_err(|e| GripError::Format(format!("invalid base64 key: {}", e)))?,
                )
            } else if raw.is_empty() {
                None
            } else {
                Some(raw.into_bytes())
            }
        }
        None => None,
    };

    if rest.is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(rest.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    if let Some(stripped) = url.path().strip_suffix('/') {
        let stripped = stripped.to_string();
        url.set_path(&stripped);
    }

    Ok(GripConfig {
        control_uri: url.to_string(),
        control_iss: iss,
        key,
    })
}
