//! NewHope-1024 KEM (n = 1024).

use super::kem::NewHopeKem;
use super::params::NewHope1024ParamsImpl;

/// NewHope-1024 KEM, implementing `api::Kem`.
pub type NewHope1024 = NewHopeKem<NewHope1024ParamsImpl>;
