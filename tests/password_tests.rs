//! Integration tests for credential hashing.

use sessioncrypt::errors::SessionCryptError;
use sessioncrypt::password::{
    hash_password, hash_password_with, legacy, verify_password, ScryptParams,
};

/// Fixed salt used by the golden vectors below.
const SALT: &str = "2ef27f4073cd5a23b355992a6b58d56a";

// Golden digests generated independently with Python hashlib against the
// exact historical algorithms (scrypt over the salt string's bytes;
// PBKDF2-HMAC-SHA1 with a single iteration).
const SCRYPT_DEFAULT: &str = "dae1635115e0e5ca15e0924756a84a972ac7d524f2f073d23ace90f3f1f1e6f9";
const SCRYPT_4096_4_2: &str = "a7807fd51243a869772bc1f6ce0578b18581730a70e293f06e7d2f2f1f2dbea3";
const SCRYPT_CAFE_NFC: &str = "9dd731656bddcf98159b0dbafdaac7f4942c3e99dca71cf65d753703920fefa4";
const PBKDF2_LEGACY: &str = "604f1aaaf0cccc4797c2a83e838dd6c222938ea508a710057e56189abb82b73c";

// ---------------------------------------------------------------------------
// Hash/verify round-trip
// ---------------------------------------------------------------------------

#[test]
fn hash_verify_roundtrip() {
    let hashed = hash_password("correct horse battery staple").expect("hash");

    assert!(verify_password("correct horse battery staple", &hashed.hash, &hashed.salt)
        .expect("verify"));
    assert!(!verify_password("wrong password", &hashed.hash, &hashed.salt).expect("verify"));
}

#[test]
fn fresh_hash_carries_defaults_and_a_64_char_hex_salt() {
    let hashed = hash_password("password").expect("hash");

    assert!(hashed.hash.ends_with("|16384|8|1"));
    assert_eq!(hashed.salt.len(), 64);
    assert!(hashed.salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn two_hashes_of_the_same_password_use_different_salts() {
    let a = hash_password("password").expect("hash a");
    let b = hash_password("password").expect("hash b");

    assert_ne!(a.salt, b.salt);
    assert_ne!(a.hash, b.hash);
}

// ---------------------------------------------------------------------------
// Golden vectors
// ---------------------------------------------------------------------------

#[test]
fn default_params_match_known_digest() {
    let hashed =
        hash_password_with("password", SALT, &ScryptParams::default()).expect("hash");
    assert_eq!(hashed.hash, format!("{SCRYPT_DEFAULT}|16384|8|1"));
    assert_eq!(hashed.salt, SALT);
}

#[test]
fn custom_params_match_known_digest() {
    let params = ScryptParams {
        cost: 4096,
        block_size: 4,
        parallelization: 2,
    };
    let hashed = hash_password_with("password", SALT, &params).expect("hash");
    assert_eq!(hashed.hash, format!("{SCRYPT_4096_4_2}|4096|4|2"));
}

#[test]
fn verification_honors_embedded_parameters() {
    let params = ScryptParams {
        cost: 4096,
        block_size: 4,
        parallelization: 2,
    };
    let hashed = hash_password_with("password", SALT, &params).expect("hash");

    assert!(verify_password("password", &hashed.hash, SALT).expect("verify"));
    assert!(!verify_password("Password", &hashed.hash, SALT).expect("verify"));
}

// ---------------------------------------------------------------------------
// Parameter fidelity and malformed hashes
// ---------------------------------------------------------------------------

#[test]
fn embedded_parameters_roundtrip_exactly() {
    let params = ScryptParams {
        cost: 4096,
        block_size: 16,
        parallelization: 2,
    };
    let hashed = hash_password_with("password", SALT, &params).expect("hash");

    assert_eq!(
        ScryptParams::from_stored_hash(&hashed.hash).expect("parse"),
        Some(params)
    );
}

#[test]
fn truncated_parameter_block_is_a_hard_error() {
    let stored = format!("{SCRYPT_DEFAULT}|16384|8");
    assert!(matches!(
        verify_password("password", &stored, SALT),
        Err(SessionCryptError::MalformedHash(_))
    ));
}

#[test]
fn non_numeric_parameter_is_a_hard_error() {
    let stored = format!("{SCRYPT_DEFAULT}|16384|eight|1");
    assert!(matches!(
        verify_password("password", &stored, SALT),
        Err(SessionCryptError::MalformedHash(_))
    ));
}

#[test]
fn non_power_of_two_cost_is_rejected() {
    let params = ScryptParams {
        cost: 10_000,
        ..Default::default()
    };
    assert!(matches!(
        hash_password_with("password", SALT, &params),
        Err(SessionCryptError::InvalidScryptParams(_))
    ));
}

// ---------------------------------------------------------------------------
// Unicode normalization
// ---------------------------------------------------------------------------

#[test]
fn composed_and_decomposed_input_hash_identically() {
    // "café" composed (U+00E9) vs decomposed (e + U+0301).
    let composed = "caf\u{e9}";
    let decomposed = "cafe\u{301}";

    let a = hash_password_with(composed, SALT, &ScryptParams::default()).expect("hash");
    let b = hash_password_with(decomposed, SALT, &ScryptParams::default()).expect("hash");

    assert_eq!(a.hash, b.hash);
    assert_eq!(a.hash, format!("{SCRYPT_CAFE_NFC}|16384|8|1"));
}

// ---------------------------------------------------------------------------
// Legacy scheme bridge
// ---------------------------------------------------------------------------

#[test]
fn legacy_digest_matches_known_vector() {
    let (digest, salt) = legacy::hash_password("password", Some(SALT)).expect("hash");
    assert_eq!(digest, PBKDF2_LEGACY);
    assert_eq!(salt, SALT);
}

#[test]
fn legacy_verify_roundtrip() {
    assert!(legacy::verify_password("password", PBKDF2_LEGACY, SALT));
    assert!(!legacy::verify_password("wrong", PBKDF2_LEGACY, SALT));
}

#[test]
fn legacy_hash_without_salt_generates_one() {
    let (digest, salt) = legacy::hash_password("password", None).expect("hash");
    assert_eq!(salt.len(), 64);
    assert!(legacy::verify_password("password", &digest, &salt));
}

#[test]
fn bare_legacy_digest_never_verifies_through_the_modern_path() {
    // A pre-migration digest has no parameter block; the modern verifier
    // falls back to scrypt defaults, which cannot reproduce a PBKDF2
    // digest. It must report a clean mismatch, not an error.
    let result = verify_password("password", PBKDF2_LEGACY, SALT).expect("verify");
    assert!(!result);
}
