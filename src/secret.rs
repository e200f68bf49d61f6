//! Shared session secret handling.
//!
//! The secret is supplied once by the hosting environment and threaded
//! explicitly into every codec call — there is no process-global state.
//! The modern cipher uses the first 32 bytes as an AES-256 key; the
//! legacy key derivation consumes the full secret.

use zeroize::Zeroize;

use crate::errors::{Result, SessionCryptError};

/// Number of secret bytes used as the AES-256 key by the modern scheme.
pub const AES_KEY_LEN: usize = 32;

/// A wrapper around the shared session secret that automatically zeroes
/// its memory when dropped.
///
/// Construction rejects an empty secret so a misconfigured deployment
/// fails at startup instead of on the first request.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SessionSecret {
    bytes: Vec<u8>,
}

impl SessionSecret {
    /// Create a new `SessionSecret` from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SessionCryptError::EmptySecret);
        }
        Ok(Self { bytes })
    }

    /// Access the full secret bytes (legacy key derivation input).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The first 32 bytes of the secret, used as the AES-256 key by the
    /// modern scheme.
    pub fn aes_key(&self) -> Result<&[u8; AES_KEY_LEN]> {
        self.bytes
            .get(..AES_KEY_LEN)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(SessionCryptError::SecretTooShort {
                expected: AES_KEY_LEN,
                actual: self.bytes.len(),
            })
    }
}
