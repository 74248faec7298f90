// kem/src/kyber/cpa_pke.rs

//! Kyber CPA-secure public key encryption.
//!
//! Keys and ciphertext components stay in the NTT domain wherever the
//! scheme allows it: the matrix A is sampled directly in NTT form, and
//! t and s are stored NTT-transformed. Encryption is deterministic in
//! `(msg, coins)`; the CCA layer derives the coins.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::params::{KyberParams, KYBER_SYM_BYTES};
use super::poly::Poly;
use super::polyvec::PolyVec;
use crate::error::{Error, Result};
use crate::hash::{hash512, shake128_reader};

/// (t_hat, rho): NTT-domain public vector plus the matrix seed.
pub(crate) type CpaPublicKey<P> = (PolyVec<P>, [u8; KYBER_SYM_BYTES]);
/// s_hat: NTT-domain secret vector.
pub(crate) type CpaSecretKey<P> = PolyVec<P>;
/// (u, v): normal-domain ciphertext components before compression.
pub(crate) type CpaCiphertext<P> = (PolyVec<P>, Poly);

/// Expand rho into the K x K matrix A, sampled in NTT form.
///
/// `transposed` selects the SHAKE128 domain-separation order: keygen
/// uses A\[i\]\[j\] = XOF(rho || j || i) with `transposed = false`, and
/// encryption reuses the same rows as A^T by flipping the indices.
fn gen_matrix<P: KyberParams>(
    rho: &[u8; KYBER_SYM_BYTES],
    transposed: bool,
) -> Vec<PolyVec<P>> {
    let mut a = Vec::with_capacity(P::K);
    for i in 0..P::K {
        let mut row = PolyVec::<P>::zero();
        for j in 0..P::K {
            let (first, second) = if transposed {
                (i as u8, j as u8)
            } else {
                (j as u8, i as u8)
            };
            let mut xof = shake128_reader(&[rho, &[first, second]]);
            row.polys[j] = Poly::sample_uniform(&mut xof);
        }
        a.push(row);
    }
    a
}

/// Sample a vector of K noise polynomials with consecutive nonces
/// starting at `base_nonce`.
fn sample_noise_vec<P: KyberParams>(seed: &[u8], base_nonce: u8, eta: u8) -> PolyVec<P> {
    let mut pv = PolyVec::<P>::zero();
    for i in 0..P::K {
        pv.polys[i] = Poly::sample_cbd(seed, base_nonce + i as u8, eta);
    }
    pv
}

/// CPA key generation: t = A*s + e, all in the NTT domain.
pub(crate) fn keypair_cpa<P: KyberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(CpaPublicKey<P>, CpaSecretKey<P>)> {
    let mut d = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    rng.try_fill_bytes(d.as_mut())
        .map_err(|_| Error::RandomSource { algorithm: P::NAME })?;

    let g = Zeroizing::new(hash512(d.as_ref()));
    let mut rho = [0u8; KYBER_SYM_BYTES];
    let mut sigma = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
    rho.copy_from_slice(&g[..KYBER_SYM_BYTES]);
    sigma.copy_from_slice(&g[KYBER_SYM_BYTES..]);

    let a = gen_matrix::<P>(&rho, false);

    let mut s = sample_noise_vec::<P>(sigma.as_ref(), 0, P::ETA1);
    let mut e = sample_noise_vec::<P>(sigma.as_ref(), P::K as u8, P::ETA1);
    s.ntt_inplace();
    e.ntt_inplace();

    let mut t = PolyVec::<P>::zero();
    for (i, row) in a.iter().enumerate() {
        t.polys[i] = row.pointwise_accum(&s);
    }
    t.add_assign(&e);

    Ok(((t, rho), s))
}

/// CPA encryption of a 32-byte message, deterministic in `coins`.
pub(crate) fn encrypt_cpa<P: KyberParams>(
    pk: &CpaPublicKey<P>,
    msg: &[u8; KYBER_SYM_BYTES],
    coins: &[u8; KYBER_SYM_BYTES],
) -> CpaCiphertext<P> {
    let (t_hat, rho) = pk;

    let at = gen_matrix::<P>(rho, true);

    let mut r = sample_noise_vec::<P>(coins, 0, P::ETA1);
    let e1 = sample_noise_vec::<P>(coins, P::K as u8, P::ETA2);
    let e2 = Poly::sample_cbd(coins, 2 * P::K as u8, P::ETA2);
    r.ntt_inplace();

    // u = invNTT(A^T * r_hat) + e1
    let mut u = PolyVec::<P>::zero();
    for (i, row) in at.iter().enumerate() {
        u.polys[i] = row.pointwise_accum(&r);
    }
    u.inv_ntt_inplace();
    u.add_assign(&e1);

    // v = invNTT(t_hat . r_hat) + e2 + encode(msg)
    let mut v = t_hat.pointwise_accum(&r);
    v.inv_ntt_inplace();
    let v = v.add(&e2).add(&Poly::from_msg(msg));

    (u, v)
}

/// CPA decryption: decode(v - invNTT(s_hat . NTT(u))).
pub(crate) fn decrypt_cpa<P: KyberParams>(
    sk: &CpaSecretKey<P>,
    ct: &CpaCiphertext<P>,
) -> Zeroizing<[u8; KYBER_SYM_BYTES]> {
    let (u, v) = ct;

    let mut u_hat = u.clone();
    u_hat.ntt_inplace();

    let mut su = sk.pointwise_accum(&u_hat);
    su.inv_ntt_inplace();

    let m_poly = v.sub(&su);
    Zeroizing::new(m_poly.to_msg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::params::Kyber768ParamsImpl;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    #[test]
    fn cpa_roundtrip() {
        let mut rng = ChaChaRng::seed_from_u64(21);
        let (pk, sk) = keypair_cpa::<Kyber768ParamsImpl, _>(&mut rng).unwrap();

        let mut msg = [0u8; KYBER_SYM_BYTES];
        let mut coins = [0u8; KYBER_SYM_BYTES];
        rng.fill(&mut msg);
        rng.fill(&mut coins);

        let ct = encrypt_cpa::<Kyber768ParamsImpl>(&pk, &msg, &coins);
        let recovered = decrypt_cpa::<Kyber768ParamsImpl>(&sk, &ct);
        assert_eq!(recovered.as_ref(), &msg);
    }

    #[test]
    fn encryption_is_deterministic_in_coins() {
        let mut rng = ChaChaRng::seed_from_u64(22);
        let (pk, _) = keypair_cpa::<Kyber768ParamsImpl, _>(&mut rng).unwrap();

        let msg = [0xabu8; KYBER_SYM_BYTES];
        let coins = [0xcdu8; KYBER_SYM_BYTES];
        let ct1 = encrypt_cpa::<Kyber768ParamsImpl>(&pk, &msg, &coins);
        let ct2 = encrypt_cpa::<Kyber768ParamsImpl>(&pk, &msg, &coins);
        assert_eq!(ct1, ct2);
    }
}
