//! Endpoint authentication schemes and header generation.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Map, Value};

use crate::error::Result;

/// Lifetime of a generated JWT when the claims carry no `exp`.
const DEFAULT_JWT_TTL_SECS: u64 = 3600;

/// Authentication used on outbound publish requests.
///
/// Exactly one scheme is active per client at any time; the `set_auth_*`
/// methods on [`PublishClient`](crate::PublishClient) replace the whole
/// value, so precedence can never depend on which fields happen to be set.
#[derive(Debug, Clone, Default)]
pub enum Auth {
    /// No `Authorization` header.
    #[default]
    None,
    /// HTTP basic auth.
    Basic {
        /// Username.
        username: String,
        /// Password.
        password: String,
    },
    /// A JWT signed per request from a claim set and an HS256 key.
    Jwt {
        /// Claims to embed in the token.
        claims: Map<String, Value>,
        /// Symmetric signing key.
        key: Vec<u8>,
    },
    /// A pre-signed bearer token, sent as-is.
    Bearer(String),
}

impl Auth {
    /// Render the `Authorization` header value.
    ///
    /// Returns `None` for [`Auth::None`]. JWT claims without an `exp` get
    /// one 3600 seconds from now before signing.
    pub fn to_header(&self) -> Result<Option<String>> {
        match self {
            Auth::None => Ok(None),
            Auth::Basic { username, password } => {
                let credentials = BASE64.encode(format!("{}:{}", username, password));
                Ok(Some(format!("Basic {}", credentials)))
            }
            Auth::Jwt { claims, key } => {
                let mut claims = claims.clone();
                if !claims.contains_key("exp") {
                    let exp = SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .unwrap_or_default()
                        .as_secs()
                        + DEFAULT_JWT_TTL_SECS;
                    claims.insert("exp".to_string(), exp.into());
                }
                let token = jsonwebtoken::encode(
                    &Header::new(Algorithm::HS256),
                    &Value::Object(claims),
                    &EncodingKey::from_secret(key),
                )?;
                Ok(Some(format!("Bearer {}", token)))
            }
            Auth::Bearer(token) => Ok(Some(format!("Bearer {}", token))),
        }
    }
}
