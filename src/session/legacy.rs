//! Decryption of session blobs issued under the retired scheme.
//!
//! The retired scheme derived its key and IV from the shared secret and
//! an 8-byte salt embedded in the blob, using three rounds of MD5 digest
//! chaining (the OpenSSL `EVP_BytesToKey` construction):
//!
//! ```text
//! d0 = MD5(secret || salt)
//! di = MD5(d(i-1) || secret || salt)
//! key = d0 || d1   (32 bytes)
//! iv  = d2         (16 bytes)
//! ```
//!
//! Every constant here is frozen. Changing the round count, the salt
//! offset, or the digest silently invalidates all previously issued
//! sessions, so nothing in this module may be "improved".

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use md5::{Digest, Md5};

use crate::errors::{Result, SessionCryptError};
use crate::secret::SessionSecret;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Salt location within the decoded blob: bytes 8..16, after the 8-byte
/// marker the historical writer always emitted (and the historical
/// reader never verified).
const SALT_RANGE: std::ops::Range<usize> = 8..16;

/// Ciphertext starts immediately after the salt.
const HEADER_LEN: usize = 16;

/// Rounds of MD5 digest chaining. Three rounds produce exactly the
/// 48 bytes of key-plus-IV material the cipher needs.
const KDF_ROUNDS: usize = 3;

/// Decrypt a decoded legacy blob with the full secret bytes.
pub fn decrypt(blob: &[u8], secret: &SessionSecret) -> Result<Vec<u8>> {
    let salt = blob
        .get(SALT_RANGE)
        .ok_or(SessionCryptError::SessionDecryptionFailed)?;
    let ciphertext = &blob[HEADER_LEN..];

    let (key, iv) = derive_key_iv(secret.as_bytes(), salt);

    Aes256CbcDec::new(&key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| SessionCryptError::SessionDecryptionFailed)
}

/// Stretch `secret || salt` into an AES-256 key and IV via chained MD5.
fn derive_key_iv(secret: &[u8], salt: &[u8]) -> ([u8; 32], [u8; 16]) {
    let mut rounds: Vec<[u8; 16]> = Vec::with_capacity(KDF_ROUNDS);

    for i in 0..KDF_ROUNDS {
        let mut hasher = Md5::new();
        if let Some(previous) = i.checked_sub(1).and_then(|p| rounds.get(p)) {
            hasher.update(previous);
        }
        hasher.update(secret);
        hasher.update(salt);
        rounds.push(hasher.finalize().into());
    }

    let mut key = [0u8; 32];
    key[..16].copy_from_slice(&rounds[0]);
    key[16..].copy_from_slice(&rounds[1]);

    (key, rounds[2])
}
