//! # lattica
//!
//! A modular library of lattice-based key encapsulation mechanisms.
//!
//! Two independent constructions are provided, both wrapped in an
//! IND-CCA2 transform with re-encryption checking and implicit rejection:
//!
//! - [`kem::kyber`]: module-LWE KEM (Kyber-512/768/1024 parameter sets)
//! - [`kem::newhope`]: ring-LWE KEM (NewHope-512/1024 parameter sets)
//!
//! ## Usage
//!
//! ```
//! use lattica::prelude::*;
//! use rand_chacha::ChaChaRng;
//! use rand::SeedableRng;
//!
//! let mut rng = ChaChaRng::seed_from_u64(1);
//! let (pk, sk) = Kyber768::keypair(&mut rng).unwrap();
//! let (ct, ss_sender) = Kyber768::encapsulate(&mut rng, &pk).unwrap();
//! let ss_receiver = Kyber768::decapsulate(&sk, &ct).unwrap();
//! assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from sub-crates:
//!
//! - `lattica-api`: trait definitions and error types
//! - `lattica-internal`: constant-time building blocks
//! - `lattica-params`: parameter-set constants
//! - `lattica-kem`: the KEM implementations

#![cfg_attr(not(feature = "std"), no_std)]

pub use lattica_api as api;
pub use lattica_internal as internal;
pub use lattica_kem as kem;
pub use lattica_params as params;

// Re-export the crates users interact with at the API boundary.
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for lattica users.
pub mod prelude {
    pub use crate::api::{Kem, Serialize, SerializeSecret};
    pub use crate::kem::kyber::{Kyber1024, Kyber512, Kyber768};
    pub use crate::kem::newhope::{NewHope1024, NewHope512};
    pub use crate::kem::DecapsStatus;
}
