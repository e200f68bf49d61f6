//! Wire-format classification for session cookies.
//!
//! The raw cookie value is parsed into a [`SessionFormat`] exactly once;
//! everything downstream dispatches on the variant instead of re-deriving
//! the shape decision.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{Result, SessionCryptError};

/// A session cookie value, classified and base64-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFormat {
    /// Current format: `base64(ciphertext)|base64(iv)`.
    Modern { ciphertext: Vec<u8>, iv: Vec<u8> },
    /// Retired format: a single base64 blob whose first 8 bytes are a
    /// fixed marker and next 8 bytes are the key-derivation salt.
    Legacy { blob: Vec<u8> },
}

impl SessionFormat {
    /// Parse a raw cookie value into its format variant.
    ///
    /// A non-empty second `|`-delimited field marks the modern format;
    /// anything after a second `|` is ignored, matching the historical
    /// decoder. Base64 failures collapse into the undifferentiated
    /// decryption error.
    pub fn parse(token: &str) -> Result<Self> {
        let mut fields = token.split('|');
        let first = fields.next().unwrap_or("");

        match fields.next() {
            Some(iv) if !iv.is_empty() => Ok(SessionFormat::Modern {
                ciphertext: decode_b64(first)?,
                iv: decode_b64(iv)?,
            }),
            // No IV field: the whole token is a legacy blob. A stray
            // trailing `|` makes the base64 decode fail, which is the
            // desired rejection for malformed tokens.
            _ => Ok(SessionFormat::Legacy {
                blob: decode_b64(token)?,
            }),
        }
    }

    /// Whether this value was issued under the retired scheme.
    pub fn is_legacy(&self) -> bool {
        matches!(self, SessionFormat::Legacy { .. })
    }
}

/// Shape-only probe: true iff the cookie value lacks a non-empty second
/// `|`-delimited field. False for empty input.
pub fn is_legacy_session(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let mut fields = token.split('|');
    let _ = fields.next();
    !matches!(fields.next(), Some(iv) if !iv.is_empty())
}

fn decode_b64(input: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(input)
        .map_err(|_| SessionCryptError::SessionDecryptionFailed)
}
