//! Session-cookie encryption and decryption.
//!
//! This module provides:
//! - Format classification of a raw cookie value (`format`)
//! - AES-256-CBC encryption/decryption of session payloads (`codec`)
//! - Decryption of blobs issued under the retired scheme (`legacy`)
//!
//! Two wire formats exist. The current one is
//! `base64(ciphertext)|base64(iv)`; the retired one is a single base64
//! blob with an 8-byte marker and 8-byte salt header. The cookie's shape
//! alone decides which decoder runs — new cookies are only ever written
//! in the current format.

pub mod codec;
pub mod format;
pub mod legacy;

pub use codec::{decrypt_session, encrypt_session, DecryptedSession};
pub use format::{is_legacy_session, SessionFormat};
