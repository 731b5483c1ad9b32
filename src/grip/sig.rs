//! `Grip-Sig` header validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};

/// Check that `token` is a valid, unexpired JWT signed with `key`.
///
/// Proxies identify themselves to the origin with a signed token in the
/// `Grip-Sig` header. Every failure mode - bad signature, malformed token,
/// missing or past `exp` - collapses to `false`; this never errors.
pub fn validate_sig(token: &str, key: &[u8]) -> bool {
    let validation = Validation::new(Algorithm::HS256);
    jsonwebtoken::decode::<serde_json::Value>(token, &DecodingKey::from_secret(key), &validation)
        .is_ok()
}
