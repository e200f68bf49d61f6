use thiserror::Error;

/// All errors that can occur in sessioncrypt.
#[derive(Debug, Error)]
pub enum SessionCryptError {
    // --- Session codec errors ---
    /// Deliberately carries no cause: base64, key, padding, UTF-8 and JSON
    /// failures all collapse into this one variant so an attacker cannot
    /// distinguish them (padding-oracle mitigation).
    #[error("Session decryption failed — invalid or corrupted session cookie")]
    SessionDecryptionFailed,

    #[error("Session encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Secret configuration errors ---
    #[error("Session secret is empty — set it in the deployment environment")]
    EmptySecret,

    #[error("Session secret must be at least {expected} bytes, got {actual}")]
    SecretTooShort { expected: usize, actual: usize },

    // --- Password hashing errors ---
    #[error("Malformed stored hash: {0}")]
    MalformedHash(String),

    #[error("Invalid scrypt parameters: {0}")]
    InvalidScryptParams(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Entropy ---
    #[error("OS random source failure: {0}")]
    RngFailed(String),
}

/// Convenience type alias for sessioncrypt results.
pub type Result<T> = std::result::Result<T, SessionCryptError>;
