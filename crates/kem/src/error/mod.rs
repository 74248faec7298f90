//! Error handling for KEM operations

pub mod validate;

use core::fmt;
use lattica_api::error::Error as ApiError;

/// Error type for KEM operations
///
/// Authentication failure during decapsulation is deliberately absent:
/// it is not an error but a designed outcome, reported through
/// [`crate::DecapsStatus`] alongside a still-valid shared secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The random source failed or produced a short read
    RandomSource { algorithm: &'static str },

    /// Underlying CPA keypair generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        context: &'static str,
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RandomSource { algorithm } => {
                write!(f, "random source failure in {}", algorithm)
            }
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "key generation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "serialization error in {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::RandomSource { algorithm } => ApiError::RandomGeneration {
                context: algorithm,
            },
            Error::KeyGeneration { algorithm, .. } => ApiError::KeyGeneration {
                context: algorithm,
            },
            Error::InvalidKey { key_type, .. } => ApiError::InvalidKey { context: key_type },
            Error::InvalidCiphertext { algorithm, .. } => ApiError::InvalidCiphertext {
                context: algorithm,
            },
            Error::Serialization { context, .. } => ApiError::SerializationError { context },
        }
    }
}
