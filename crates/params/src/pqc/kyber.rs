//! Constants for the Kyber-style key encapsulation mechanism

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber coefficient modulus
pub const KYBER_Q: u16 = 3329;

/// Size of seeds, messages and shared secrets in bytes
pub const KYBER_SYM_BYTES: usize = 32;

/// Parameters of one Kyber security level
pub struct KyberParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials (module dimension)
    pub k: usize,

    /// Noise parameter for the secret and error vectors
    pub eta1: u8,

    /// Noise parameter for the ephemeral errors
    pub eta2: u8,

    /// Compression bits for the ciphertext vector u
    pub du: usize,

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

/// Kyber-512 parameters (k = 2)
pub const KYBER512: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: 32,
};

/// Kyber-768 parameters (k = 3)
pub const KYBER768: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: 32,
};

/// Kyber-1024 parameters (k = 4)
pub const KYBER1024: KyberParamSet = KyberParamSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: 32,
};
