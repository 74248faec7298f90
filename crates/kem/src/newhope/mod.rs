// kem/src/newhope/mod.rs

//! NewHope key encapsulation mechanism.
//!
//! Ring-LWE construction over Z_12289\[x\]/(x^n + 1) with n in
//! {512, 1024}: a CPA-secure PKE wrapped in the same IND-CCA2 transform
//! as the Kyber module, with re-encryption checking and implicit
//! rejection.

mod params;
mod poly;
mod serialize;
mod cpa_pke;
mod ind_cca;
mod kem;

mod newhope512;
mod newhope1024;

pub use self::newhope512::NewHope512;
pub use self::newhope1024::NewHope1024;

pub use self::kem::{
    NewHopeCiphertext, NewHopeKem, NewHopePublicKey, NewHopeSecretKey, NewHopeSharedSecret,
};
pub use self::params::{
    NewHope1024ParamsImpl, NewHope512ParamsImpl, NewHopeParams, NEWHOPE_SS_BYTES,
};

#[cfg(test)]
mod tests;
