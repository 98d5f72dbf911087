use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Produces session tokens for successful authentications.
///
/// Implementations must never return an empty string.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self) -> String;
}

/// 32 random bytes from the OS, url-safe base64, `tok_` prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTokenIssuer;

impl TokenIssuer for RandomTokenIssuer {
    fn issue(&self) -> String {
        new_token()
    }
}

pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}
