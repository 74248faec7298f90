//! Numeric parameter sets for the lattica algorithm crates
//!
//! Pure constants, no code. Algorithm crates re-export what they need so
//! callers normally never depend on this crate directly.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod pqc;
