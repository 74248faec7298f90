// kem/src/newhope/cpa_pke.rs

//! NewHope CPA-secure public key encryption.
//!
//! Single-polynomial ring-LWE: the public value is b = a*s + e with a
//! expanded from a public seed, and both b and s are kept in the NTT
//! domain. Encryption is deterministic in `(msg, coins)`.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::params::{NewHopeParams, NEWHOPE_SYM_BYTES};
use super::poly::Poly;
use crate::error::{Error, Result};
use crate::hash::shake256_into;

/// (b_hat, seed): NTT-domain public polynomial plus the uniform seed.
pub(crate) type CpaPublicKey<P> = (Poly<P>, [u8; NEWHOPE_SYM_BYTES]);
/// s_hat: NTT-domain secret polynomial.
pub(crate) type CpaSecretKey<P> = Poly<P>;
/// (u_hat, v): NTT-domain u and normal-domain v before compression.
pub(crate) type CpaCiphertext<P> = (Poly<P>, Poly<P>);

/// CPA key generation.
///
/// A 32-byte seed is drawn and expanded with SHAKE256 into the public
/// seed for a and the noise seed, so the public key never exposes raw
/// RNG output.
pub(crate) fn keypair_cpa<P: NewHopeParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(CpaPublicKey<P>, CpaSecretKey<P>)> {
    let mut z = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
    rng.try_fill_bytes(z.as_mut())
        .map_err(|_| Error::RandomSource { algorithm: P::NAME })?;

    let mut expanded = Zeroizing::new([0u8; 2 * NEWHOPE_SYM_BYTES]);
    shake256_into(expanded.as_mut(), &[z.as_ref()]);
    let mut public_seed = [0u8; NEWHOPE_SYM_BYTES];
    let mut noise_seed = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
    public_seed.copy_from_slice(&expanded[..NEWHOPE_SYM_BYTES]);
    noise_seed.copy_from_slice(&expanded[NEWHOPE_SYM_BYTES..]);

    let a = Poly::<P>::sample_uniform(&public_seed);

    let mut s = Poly::<P>::sample_noise(noise_seed.as_ref(), 0);
    let mut e = Poly::<P>::sample_noise(noise_seed.as_ref(), 1);
    s.ntt_inplace();
    e.ntt_inplace();

    let b = a.mul_pointwise(&s).add(&e);

    Ok(((b, public_seed), s))
}

/// CPA encryption of a 32-byte message, deterministic in `coins`.
pub(crate) fn encrypt_cpa<P: NewHopeParams>(
    pk: &CpaPublicKey<P>,
    msg: &[u8; NEWHOPE_SYM_BYTES],
    coins: &[u8; NEWHOPE_SYM_BYTES],
) -> CpaCiphertext<P> {
    let (b_hat, public_seed) = pk;

    let a = Poly::<P>::sample_uniform(public_seed);

    let mut s_prime = Poly::<P>::sample_noise(coins, 0);
    let mut e_prime = Poly::<P>::sample_noise(coins, 1);
    let e_double = Poly::<P>::sample_noise(coins, 2);
    s_prime.ntt_inplace();
    e_prime.ntt_inplace();

    // u stays in the NTT domain on the wire.
    let u = a.mul_pointwise(&s_prime).add(&e_prime);

    // v = invNTT(b_hat . s'_hat) + e'' + encode(msg)
    let mut v = b_hat.mul_pointwise(&s_prime);
    v.inv_ntt_inplace();
    let v = v.add(&e_double).add(&Poly::from_msg(msg));

    (u, v)
}

/// CPA decryption: decode(invNTT(s_hat . u_hat) - v).
pub(crate) fn decrypt_cpa<P: NewHopeParams>(
    sk: &CpaSecretKey<P>,
    ct: &CpaCiphertext<P>,
) -> Zeroizing<[u8; NEWHOPE_SYM_BYTES]> {
    let (u_hat, v) = ct;

    let mut t = sk.mul_pointwise(u_hat);
    t.inv_ntt_inplace();

    // The decoder only measures distance from q/2, so the sign of the
    // difference does not matter.
    Zeroizing::new(t.sub(v).to_msg())
}
