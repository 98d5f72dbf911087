use serde::de::DeserializeOwned;
use tracing::debug;

pub mod authenticate;
pub mod create;

/// Best-effort JSON decode of an opaque body, ignoring the declared content
/// type. Empty or undecodable bodies yield `T::default()`.
pub(crate) fn decode_body_lenient<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!(error = %e, "body is not a JSON user, using defaults");
        T::default()
    })
}
