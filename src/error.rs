//! @acp:module "Errors"
//! @acp:summary "Error types for option validation and options-file loading"
//! @acp:domain primes
//! @acp:layer model

use thiserror::Error;

/// Errors raised by the prime finder
#[derive(Debug, Error)]
pub enum PrimeError {
    /// The search options are inconsistent (bad bounds or unknown mode)
    #[error("{0}")]
    InvalidOptions(String),

    /// The candidate pool for `2..=to` cannot be allocated
    #[error("range too large: cannot allocate a candidate pool up to {to}")]
    PoolTooLarge { to: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrimeError {
    /// Whether this error came from option validation
    pub fn is_invalid_options(&self) -> bool {
        matches!(self, PrimeError::InvalidOptions(_))
    }
}

pub type Result<T> = std::result::Result<T, PrimeError>;
