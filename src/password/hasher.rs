//! Password hashing using scrypt.
//!
//! The password is normalized to Unicode NFC before hashing so that
//! composed and decomposed renderings of the same text (e.g. `é` typed
//! on different platforms) produce the same digest. The hex-encoded salt
//! string itself — not its decoded bytes — is the scrypt salt input,
//! which is what the historical implementation fed the KDF.

use rand::TryRngCore;
use scrypt::{scrypt, Params};
use subtle::ConstantTimeEq;
use unicode_normalization::UnicodeNormalization;

use super::params::ScryptParams;
use crate::errors::{Result, SessionCryptError};

/// Length of the derived digest in bytes (256 bits).
const DIGEST_LEN: usize = 32;

/// Length of a fresh salt in bytes, before hex encoding.
const SALT_LEN: usize = 32;

/// A freshly hashed password: the parameter-carrying hash string and the
/// hex salt it was derived with. The caller persists both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub hash: String,
    pub salt: String,
}

/// Hash a password with a fresh random salt and default parameters.
pub fn hash_password(password: &str) -> Result<HashedPassword> {
    let salt = generate_salt()?;
    hash_password_with(password, &salt, &ScryptParams::default())
}

/// Hash a password with an explicit salt and explicit cost parameters.
///
/// The returned hash string embeds the parameters
/// (`<hex-digest>|<cost>|<blockSize>|<parallelization>`) so verification
/// can re-derive with exactly the same settings.
pub fn hash_password_with(
    password: &str,
    salt: &str,
    params: &ScryptParams,
) -> Result<HashedPassword> {
    let digest = derive(password, salt, params)?;
    Ok(HashedPassword {
        hash: format!("{}|{}", hex::encode(digest), params.encode()),
        salt: salt.to_owned(),
    })
}

/// Verify a password against a stored hash and its salt.
///
/// Parameters are taken from the stored hash; a bare digest with no
/// parameter block falls back to the defaults. The digest comparison is
/// constant-time, so where the mismatch occurs leaks nothing.
pub fn verify_password(password: &str, stored_hash: &str, salt: &str) -> Result<bool> {
    let params = ScryptParams::from_stored_hash(stored_hash)?.unwrap_or_default();

    let stored_digest = stored_hash.split('|').next().unwrap_or("");
    let recomputed = hex::encode(derive(password, salt, &params)?);

    Ok(bool::from(
        recomputed.as_bytes().ct_eq(stored_digest.as_bytes()),
    ))
}

/// Generate a cryptographically random salt, hex-encoded.
pub fn generate_salt() -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| SessionCryptError::RngFailed(e.to_string()))?;
    Ok(hex::encode(salt))
}

fn derive(password: &str, salt: &str, params: &ScryptParams) -> Result<[u8; DIGEST_LEN]> {
    let normalized: String = password.nfc().collect();

    let scrypt_params = Params::new(
        params.log_n()?,
        params.block_size,
        params.parallelization,
        DIGEST_LEN,
    )
    .map_err(|e| SessionCryptError::InvalidScryptParams(e.to_string()))?;

    let mut digest = [0u8; DIGEST_LEN];
    scrypt(
        normalized.as_bytes(),
        salt.as_bytes(),
        &scrypt_params,
        &mut digest,
    )
    .map_err(|e| SessionCryptError::KeyDerivationFailed(e.to_string()))?;

    Ok(digest)
}
