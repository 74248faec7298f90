//! Lattice-based Key Encapsulation Mechanisms
//!
//! This crate implements two independent lattice-based KEM families, both
//! wrapped in an IND-CCA2 transform with re-encryption checking and
//! implicit rejection:
//!
//! - [`kyber`]: module-LWE over Z_3329\[x\]/(x^256+1), vectors of K
//!   polynomials, compressed ciphertexts.
//! - [`newhope`]: ring-LWE over Z_12289\[x\]/(x^n+1), a single polynomial
//!   with n in {512, 1024}.
//!
//! All randomness comes from a caller-supplied CSPRNG; a short read is
//! surfaced as an error and never retried.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), feature = "alloc"))]
#[macro_use]
extern crate alloc;

pub mod error;
pub mod kyber;
pub mod newhope;

pub(crate) mod hash;

// Re-exports
pub use kyber::{Kyber1024, Kyber512, Kyber768};
pub use newhope::{NewHope1024, NewHope512};

/// Outcome of a checked decapsulation.
///
/// `AuthFail` means the re-encryption check did not match: the returned
/// shared secret was derived from the hidden rejection seed instead of the
/// decrypted message (implicit rejection). The secret is well-formed on
/// both paths; protocol code must not branch observably on this value
/// when using the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecapsStatus {
    /// Ciphertext authenticated; the secret matches the encapsulator's.
    Success,
    /// Re-encryption mismatch; the secret is the implicit-rejection value.
    AuthFail,
}

impl DecapsStatus {
    /// True when the ciphertext authenticated.
    pub fn is_success(self) -> bool {
        self == DecapsStatus::Success
    }
}
