//! Credential hashing.
//!
//! This module provides:
//! - scrypt password hashing with inline-encoded parameters (`hasher`)
//! - the stored-parameter record and its wire encoding (`params`)
//! - PBKDF2-SHA1 hashing for pre-migration credentials (`legacy`)
//!
//! The legacy scheme is intentionally not re-exported: verifying or
//! migrating an old credential means naming `password::legacy` at the
//! call site, so no modern code path carries legacy conditionals.

pub mod hasher;
pub mod legacy;
pub mod params;

pub use hasher::{hash_password, hash_password_with, verify_password, HashedPassword};
pub use params::ScryptParams;
