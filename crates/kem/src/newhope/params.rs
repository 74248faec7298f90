// kem/src/newhope/params.rs

//! NewHope parameter definitions.

use lattica_params::pqc::newhope as global_params;

/// Common NewHope coefficient modulus.
pub const NEWHOPE_Q: u32 = global_params::NEWHOPE_Q as u32;
/// Shared secret size for all NewHope variants.
pub const NEWHOPE_SS_BYTES: usize = 32;
/// Seed / message size in bytes.
pub const NEWHOPE_SYM_BYTES: usize = global_params::NEWHOPE_SYM_BYTES;

/// Trait defining parameters for a specific NewHope variant.
pub trait NewHopeParams: Send + Sync + 'static {
    /// Polynomial degree n.
    const N: usize;
    /// Primitive 2n-th root of unity mod q, the negacyclic twist factor.
    const GAMMA: u32;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the (CCA) secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Packed size of one polynomial (14 bits per coefficient).
    const POLY_BYTES: usize = (Self::N * 14) / 8;
    /// Compressed size of the ciphertext polynomial v (3 bits per
    /// coefficient).
    const COMPRESSED_BYTES: usize = (Self::N * 3) / 8;
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewHope512ParamsImpl;
impl NewHopeParams for NewHope512ParamsImpl {
    const N: usize = global_params::NEWHOPE512.n;
    const GAMMA: u32 = global_params::NEWHOPE512.gamma as u32;
    const NAME: &'static str = "NewHope-512";
    const PUBLIC_KEY_BYTES: usize = global_params::NEWHOPE512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::NEWHOPE512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::NEWHOPE512.ciphertext_size;
}

#[derive(Debug, PartialEq, Eq)]
pub struct NewHope1024ParamsImpl;
impl NewHopeParams for NewHope1024ParamsImpl {
    const N: usize = global_params::NEWHOPE1024.n;
    const GAMMA: u32 = global_params::NEWHOPE1024.gamma as u32;
    const NAME: &'static str = "NewHope-1024";
    const PUBLIC_KEY_BYTES: usize = global_params::NEWHOPE1024.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::NEWHOPE1024.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::NEWHOPE1024.ciphertext_size;
}
