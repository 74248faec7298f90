//! Public API traits and types for the lattica library
//!
//! This crate provides the public API surface for the lattica ecosystem:
//! trait definitions for key encapsulation and serialization, plus the
//! error types shared by all algorithm crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
