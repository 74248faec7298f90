//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate a key-format condition
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate a ciphertext-format condition
pub fn ciphertext(condition: bool, algorithm: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCiphertext { algorithm, reason });
    }
    Ok(())
}

/// Validate a serialization condition
pub fn serialization(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Serialization { context, details });
    }
    Ok(())
}
