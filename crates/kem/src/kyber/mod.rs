// kem/src/kyber/mod.rs

//! Kyber key encapsulation mechanism.
//!
//! Module-LWE construction over Z_3329\[x\]/(x^256 + 1): a CPA-secure
//! PKE wrapped in an IND-CCA2 transform with re-encryption checking and
//! implicit rejection.

mod params;
mod poly;
mod polyvec;
mod serialize;
mod cpa_pke;
mod ind_cca;
mod kem;

mod kyber512;
mod kyber768;
mod kyber1024;

pub use self::kyber512::Kyber512;
pub use self::kyber768::Kyber768;
pub use self::kyber1024::Kyber1024;

pub use self::kem::{KyberCiphertext, KyberKem, KyberPublicKey, KyberSecretKey, KyberSharedSecret};
pub use self::params::{
    Kyber1024ParamsImpl, Kyber512ParamsImpl, Kyber768ParamsImpl, KyberParams, KYBER_SS_BYTES,
};
