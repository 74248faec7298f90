//! Hash suite shared by the KEM constructions
//!
//! H is SHA3-256, G is SHA3-512, seed expansion and samplers run over
//! SHAKE128/SHAKE256. All functions are deterministic with no failure
//! path.

/// Width of H output, shared secrets and seeds.
pub(crate) const HASH_BYTES: usize = 32;

/// H: SHA3-256.
pub(crate) fn hash256(data: &[u8]) -> [u8; HASH_BYTES] {
    use sha3::{Digest, Sha3_256};

    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// G: SHA3-512. Callers split the output into (pre-key, coins) or
/// (public seed, noise seed).
pub(crate) fn hash512(data: &[u8]) -> [u8; 2 * HASH_BYTES] {
    use sha3::{Digest, Sha3_512};

    let mut hasher = Sha3_512::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHAKE128 over the concatenation of `chunks`, squeezed incrementally
/// by the caller. Used for public-polynomial rejection sampling.
pub(crate) fn shake128_reader(chunks: &[&[u8]]) -> sha3::Shake128Reader {
    use sha3::digest::{ExtendableOutput, Update};

    let mut xof = sha3::Shake128::default();
    for chunk in chunks {
        xof.update(chunk);
    }
    xof.finalize_xof()
}

/// SHAKE256 over the concatenation of `chunks`, filling `out` completely.
pub(crate) fn shake256_into(out: &mut [u8], chunks: &[&[u8]]) {
    use sha3::digest::{ExtendableOutput, Update, XofReader};

    let mut xof = sha3::Shake256::default();
    for chunk in chunks {
        xof.update(chunk);
    }
    xof.finalize_xof().read(out);
}
