//! Trait definitions for the lattica public API

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
