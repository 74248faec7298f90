//! Error type definitions for cryptographic operations

use core::fmt;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey { context: &'static str },

    /// Invalid ciphertext error
    InvalidCiphertext { context: &'static str },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter { context: &'static str },

    /// Serialization error
    SerializationError { context: &'static str },

    /// Random generation error
    RandomGeneration { context: &'static str },

    /// Key generation error
    KeyGeneration { context: &'static str },

    /// Other error
    Other { context: &'static str },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey { context },
            Self::InvalidCiphertext { .. } => Self::InvalidCiphertext { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            Self::SerializationError { .. } => Self::SerializationError { context },
            Self::RandomGeneration { .. } => Self::RandomGeneration { context },
            Self::KeyGeneration { .. } => Self::KeyGeneration { context },
            Self::Other { .. } => Self::Other { context },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { context } => write!(f, "invalid key: {}", context),
            Self::InvalidCiphertext { context } => write!(f, "invalid ciphertext: {}", context),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "invalid length in {}: expected {}, got {}",
                context, expected, actual
            ),
            Self::InvalidParameter { context } => write!(f, "invalid parameter: {}", context),
            Self::SerializationError { context } => write!(f, "serialization error: {}", context),
            Self::RandomGeneration { context } => {
                write!(f, "random generation failure: {}", context)
            }
            Self::KeyGeneration { context } => write!(f, "key generation failure: {}", context),
            Self::Other { context } => write!(f, "error: {}", context),
        }
    }
}
