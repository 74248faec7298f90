// kem/src/kyber/params.rs

//! Kyber parameter definitions.

use lattica_params::pqc::kyber as global_params;

/// Common Kyber polynomial degree.
pub const KYBER_N: usize = global_params::KYBER_N;
/// Common Kyber coefficient modulus.
pub const KYBER_Q: u32 = global_params::KYBER_Q as u32;
/// Shared secret size for all Kyber variants.
pub const KYBER_SS_BYTES: usize = 32;
/// Seed / message size in bytes.
pub const KYBER_SYM_BYTES: usize = global_params::KYBER_SYM_BYTES;
/// Packed size of one polynomial (12 bits per coefficient).
pub const KYBER_POLY_BYTES: usize = (KYBER_N * 12) / 8;

/// Trait defining parameters for a specific Kyber variant.
pub trait KyberParams: Send + Sync + 'static {
    /// Security parameter k (dimension of vectors/matrices).
    const K: usize;
    /// Noise parameter eta1 for the secret and error vectors.
    const ETA1: u8;
    /// Noise parameter eta2 for the ephemeral errors.
    const ETA2: u8;
    /// Compression bits for the ciphertext vector u.
    const DU: usize;
    /// Compression bits for the ciphertext polynomial v.
    const DV: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the (CCA) secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Packed size of the CPA secret key (the NTT-domain secret vector).
    const CPA_SECRET_KEY_BYTES: usize = KYBER_POLY_BYTES * Self::K;
    /// Compressed size of the ciphertext component u.
    const CIPHERTEXT_U_BYTES: usize = (Self::K * KYBER_N * Self::DU) / 8;
    /// Compressed size of the ciphertext component v.
    const CIPHERTEXT_V_BYTES: usize = (KYBER_N * Self::DV) / 8;
}

// Concrete parameter implementations for the Kyber variants.

#[derive(Debug, PartialEq, Eq)]
pub struct Kyber512ParamsImpl;
impl KyberParams for Kyber512ParamsImpl {
    const K: usize = global_params::KYBER512.k;
    const ETA1: u8 = global_params::KYBER512.eta1;
    const ETA2: u8 = global_params::KYBER512.eta2;
    const DU: usize = global_params::KYBER512.du;
    const DV: usize = global_params::KYBER512.dv;
    const NAME: &'static str = "Kyber-512";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER512.ciphertext_size;
}

#[derive(Debug, PartialEq, Eq)]
pub struct Kyber768ParamsImpl;
impl KyberParams for Kyber768ParamsImpl {
    const K: usize = global_params::KYBER768.k;
    const ETA1: u8 = global_params::KYBER768.eta1;
    const ETA2: u8 = global_params::KYBER768.eta2;
    const DU: usize = global_params::KYBER768.du;
    const DV: usize = global_params::KYBER768.dv;
    const NAME: &'static str = "Kyber-768";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER768.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER768.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER768.ciphertext_size;
}

#[derive(Debug, PartialEq, Eq)]
pub struct Kyber1024ParamsImpl;
impl KyberParams for Kyber1024ParamsImpl {
    const K: usize = global_params::KYBER1024.k;
    const ETA1: u8 = global_params::KYBER1024.eta1;
    const ETA2: u8 = global_params::KYBER1024.eta2;
    const DU: usize = global_params::KYBER1024.du;
    const DV: usize = global_params::KYBER1024.dv;
    const NAME: &'static str = "Kyber-1024";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER1024.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER1024.ciphertext_size;
}
