//! AES-256-CBC session codec.
//!
//! `encrypt_session` generates a fresh random 16-byte IV per call and
//! returns `base64(ciphertext)|base64(iv)`. `decrypt_session` accepts
//! either wire format, delegating to [`super::legacy`] for blobs issued
//! under the retired scheme, and splits the plaintext into the JSON data
//! segment and the CSRF token.
//!
//! Plaintext layout inside a cookie:
//!   `<json-data> ";" <csrf-token>`   (CSRF segment optional)

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};

use super::format::SessionFormat;
use super::legacy;
use crate::errors::{Result, SessionCryptError};
use crate::secret::SessionSecret;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes.
const IV_LEN: usize = 16;

/// A decrypted session: the structured payload plus the CSRF token that
/// was embedded alongside it at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecryptedSession {
    pub data: serde_json::Value,
    pub csrf_token: Option<String>,
}

impl DecryptedSession {
    /// Render the `<json> ";" <csrf>` plaintext this session encrypts to.
    pub fn to_plaintext(&self) -> String {
        match &self.csrf_token {
            Some(csrf) => format!("{};{}", self.data, csrf),
            None => self.data.to_string(),
        }
    }

    /// Split decrypted plaintext into JSON data and CSRF token.
    ///
    /// Only the first two `;`-separated segments are meaningful; anything
    /// beyond them is dropped, matching the historical decoder.
    fn from_plaintext(plaintext: &str) -> Result<Self> {
        let mut segments = plaintext.split(';');
        let data_segment = segments.next().unwrap_or("");
        let csrf_token = segments.next().map(str::to_owned);

        let data = serde_json::from_str(data_segment)
            .map_err(|_| SessionCryptError::SessionDecryptionFailed)?;

        Ok(Self { data, csrf_token })
    }
}

/// Encrypt a session plaintext into the current wire format.
///
/// Consumes entropy for the IV; the same payload encrypted twice never
/// produces the same cookie value.
pub fn encrypt_session(plaintext: &str, secret: &SessionSecret) -> Result<String> {
    let key = secret.aes_key()?;

    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| SessionCryptError::EncryptionFailed(format!("IV generation failed: {e}")))?;

    let ciphertext = Aes256CbcEnc::new(key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(format!("{}|{}", BASE64.encode(ciphertext), BASE64.encode(iv)))
}

/// Decrypt a session cookie value of either wire format.
///
/// Returns `Ok(None)` for an absent or blank token. Every decode-path
/// failure — base64, cipher, padding, UTF-8 or JSON — surfaces as the
/// single cause-free [`SessionCryptError::SessionDecryptionFailed`].
pub fn decrypt_session(
    token: Option<&str>,
    secret: &SessionSecret,
) -> Result<Option<DecryptedSession>> {
    let token = match token {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Ok(None),
    };

    let plaintext_bytes = match SessionFormat::parse(token)? {
        SessionFormat::Modern { ciphertext, iv } => {
            let key = secret.aes_key()?;
            let iv: [u8; IV_LEN] = iv
                .as_slice()
                .try_into()
                .map_err(|_| SessionCryptError::SessionDecryptionFailed)?;

            Aes256CbcDec::new(key.into(), &iv.into())
                .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
                .map_err(|_| SessionCryptError::SessionDecryptionFailed)?
        }
        SessionFormat::Legacy { blob } => legacy::decrypt(&blob, secret)?,
    };

    let plaintext = String::from_utf8(plaintext_bytes)
        .map_err(|_| SessionCryptError::SessionDecryptionFailed)?;

    DecryptedSession::from_plaintext(&plaintext).map(Some)
}
