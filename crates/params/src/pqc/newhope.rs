//! Constants for the NewHope-style key encapsulation mechanism

/// NewHope coefficient modulus
pub const NEWHOPE_Q: u16 = 12289;

/// Size of seeds, messages and shared secrets in bytes
pub const NEWHOPE_SYM_BYTES: usize = 32;

/// Binomial noise parameter (psi_8 distribution)
pub const NEWHOPE_K: u32 = 8;

/// Parameters of one NewHope security level
pub struct NewHopeParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Primitive 2n-th root of unity mod q, used to twist the cyclic NTT
    /// into the negacyclic ring
    pub gamma: u16,

    /// Compression bits for the ciphertext polynomial v
    pub dv: usize,

    /// Size of the public key in bytes
    pub public_key_size: usize,

    /// Size of the (CCA) secret key in bytes
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

/// NewHope-512 parameters (n = 512)
///
/// gamma = 49 has multiplicative order 1024 mod 12289.
pub const NEWHOPE512: NewHopeParamSet = NewHopeParamSet {
    n: 512,
    q: NEWHOPE_Q,
    gamma: 49,
    dv: 3,
    public_key_size: 928,
    secret_key_size: 1888,
    ciphertext_size: 1088,
    shared_secret_size: 32,
};

/// NewHope-1024 parameters (n = 1024)
///
/// gamma = 7 has multiplicative order 2048 mod 12289.
pub const NEWHOPE1024: NewHopeParamSet = NewHopeParamSet {
    n: 1024,
    q: NEWHOPE_Q,
    gamma: 7,
    dv: 3,
    public_key_size: 1824,
    secret_key_size: 3680,
    ciphertext_size: 2176,
    shared_secret_size: 32,
};
