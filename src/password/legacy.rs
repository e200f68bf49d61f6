//! PBKDF2-SHA1 hashing for pre-migration credentials.
//!
//! A single iteration of PBKDF2-HMAC-SHA1 with a 32-byte output —
//! deliberately weak, frozen for compatibility with digests created
//! before the scrypt migration. New credentials must never be hashed
//! through this path; it exists so old ones can still be verified (and
//! re-hashed through the modern scheme as an explicit migration step).

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use subtle::ConstantTimeEq;

use super::hasher::generate_salt;
use crate::errors::Result;

/// The retired scheme ran exactly one round.
const ITERATIONS: u32 = 1;

/// Length of the derived digest in bytes.
const DIGEST_LEN: usize = 32;

/// Hash a password under the retired scheme. Returns `(hex_digest, salt)`.
///
/// A fresh salt is generated when none is supplied; supplying the stored
/// salt reproduces the stored digest.
pub fn hash_password(password: &str, salt: Option<&str>) -> Result<(String, String)> {
    let salt = match salt {
        Some(s) => s.to_owned(),
        None => generate_salt()?,
    };
    Ok((hex::encode(derive(password, &salt)), salt))
}

/// Verify a password against a pre-migration digest and its salt.
pub fn verify_password(password: &str, stored_hash: &str, salt: &str) -> bool {
    let recomputed = hex::encode(derive(password, salt));
    bool::from(recomputed.as_bytes().ct_eq(stored_hash.as_bytes()))
}

fn derive(password: &str, salt: &str) -> [u8; DIGEST_LEN] {
    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        salt.as_bytes(),
        ITERATIONS,
        &mut digest,
    );
    digest
}
