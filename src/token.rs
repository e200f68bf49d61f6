//! One-way token hashing.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of an arbitrary token string.
///
/// Deterministic and unsalted: suitable for lookup of tokens the caller
/// already guarantees to be unique and unguessable (API keys, reset
/// tokens), never for passwords.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
