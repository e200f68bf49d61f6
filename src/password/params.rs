//! Scrypt cost parameters and their inline wire encoding.
//!
//! A stored hash carries its own parameters so verification can re-derive
//! with exactly the settings the hash was created under:
//!
//! ```text
//! <64-hex-char digest>|<cost>|<blockSize>|<parallelization>
//! ```
//!
//! A bare digest with no parameter block is a pre-migration hash; its
//! parameters were fixed by convention and are not encoded.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SessionCryptError};

/// Scrypt cost parameters as stored inline in the hash string.
///
/// `cost` is the scrypt `N` value itself (not its log2), because that is
/// what the wire format stores. It must therefore be a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParams {
    pub cost: u32,
    pub block_size: u32,
    pub parallelization: u32,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            cost: 1 << 14,
            block_size: 8,
            parallelization: 1,
        }
    }
}

impl ScryptParams {
    /// Check that these values are legal scrypt inputs.
    pub fn validate(&self) -> Result<()> {
        if self.cost < 2 || !self.cost.is_power_of_two() {
            return Err(SessionCryptError::InvalidScryptParams(format!(
                "cost must be a power of two greater than 1, got {}",
                self.cost
            )));
        }
        if self.block_size == 0 {
            return Err(SessionCryptError::InvalidScryptParams(
                "block size must be at least 1".into(),
            ));
        }
        if self.parallelization == 0 {
            return Err(SessionCryptError::InvalidScryptParams(
                "parallelization must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// log2 of the cost, which is what the scrypt primitive takes.
    pub(crate) fn log_n(&self) -> Result<u8> {
        self.validate()?;
        Ok(self.cost.trailing_zeros() as u8)
    }

    /// The inline parameter block appended to a stored hash.
    pub fn encode(&self) -> String {
        format!("{}|{}|{}", self.cost, self.block_size, self.parallelization)
    }

    /// Parse the parameter block out of a stored hash string.
    ///
    /// Exactly three trailing `|`-fields parse as parameters; zero
    /// trailing fields is a bare pre-migration digest and parses as
    /// `None`. Any other field count, or a non-integer field, is a
    /// malformed hash — re-deriving with guessed defaults against a hash
    /// created under different parameters can only ever fail
    /// verification, so this is a hard error rather than a silent
    /// fallback.
    pub fn from_stored_hash(stored_hash: &str) -> Result<Option<Self>> {
        let fields: Vec<&str> = stored_hash.split('|').skip(1).collect();

        match fields.len() {
            0 => Ok(None),
            3 => {
                let mut values = [0u32; 3];
                for (value, field) in values.iter_mut().zip(&fields) {
                    *value = field.parse().map_err(|_| {
                        SessionCryptError::MalformedHash(format!(
                            "non-integer scrypt parameter field: {field:?}"
                        ))
                    })?;
                }
                Ok(Some(Self {
                    cost: values[0],
                    block_size: values[1],
                    parallelization: values[2],
                }))
            }
            n => Err(SessionCryptError::MalformedHash(format!(
                "expected 0 or 3 parameter fields, found {n}"
            ))),
        }
    }
}
