// kem/src/newhope/newhope512.rs

//! NewHope-512 KEM (n = 512).

use super::kem::NewHopeKem;
use super::params::NewHope512ParamsImpl;

/// NewHope-512 KEM, implementing `api::Kem`.
pub type NewHope512 = NewHopeKem<NewHope512ParamsImpl>;
