// kem/src/newhope/ind_cca.rs

//! IND-CCA2 transform over the NewHope CPA scheme.
//!
//! Same shape as the Kyber transform: hash the decrypted message with
//! the cached public-key hash, re-encrypt deterministically, compare in
//! constant time, and swap in the rejection seed without branching.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::{Zeroize, Zeroizing};

use lattica_internal::constant_time::{ct_assign, ct_ne};

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::{NewHopeParams, NEWHOPE_SS_BYTES, NEWHOPE_SYM_BYTES};
use super::serialize::{pack_ciphertext, pack_pk, pack_sk, unpack_ciphertext, unpack_pk, unpack_sk};
use crate::error::{validate, Error, Result};
use crate::hash::{hash256, hash512, HASH_BYTES};
use crate::DecapsStatus;

/// CCA secret key, stored structured but serialized flat as
/// `sk_cpa || pk || H(pk) || z`.
pub(crate) struct CcaSecretKey<P: NewHopeParams> {
    /// Packed NTT-domain secret polynomial.
    pub(crate) sk_cpa: Zeroizing<Vec<u8>>,
    /// Packed public key, needed for re-encryption.
    pub(crate) pk: Vec<u8>,
    /// Cached H(pk).
    pub(crate) pk_hash: [u8; HASH_BYTES],
    /// Implicit-rejection seed z.
    pub(crate) reject: Zeroizing<[u8; NEWHOPE_SYM_BYTES]>,
    _params: core::marker::PhantomData<P>,
}

impl<P: NewHopeParams> Clone for CcaSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            sk_cpa: self.sk_cpa.clone(),
            pk: self.pk.clone(),
            pk_hash: self.pk_hash,
            reject: self.reject.clone(),
            _params: core::marker::PhantomData,
        }
    }
}

impl<P: NewHopeParams> Zeroize for CcaSecretKey<P> {
    fn zeroize(&mut self) {
        self.sk_cpa.zeroize();
        self.pk_hash.zeroize();
        self.reject.zeroize();
    }
}

impl<P: NewHopeParams> CcaSecretKey<P> {
    /// Serialize to the flat wire layout.
    pub(crate) fn pack(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(P::SECRET_KEY_BYTES));
        bytes.extend_from_slice(&self.sk_cpa);
        bytes.extend_from_slice(&self.pk);
        bytes.extend_from_slice(&self.pk_hash);
        bytes.extend_from_slice(self.reject.as_ref());
        bytes
    }

    /// Parse the flat wire layout, validating the total length.
    pub(crate) fn unpack(bytes: &[u8]) -> Result<Self> {
        validate::key(
            bytes.len() == P::SECRET_KEY_BYTES,
            "secret",
            "unexpected secret key length",
        )?;

        let sk_cpa_end = P::POLY_BYTES;
        let pk_end = sk_cpa_end + P::PUBLIC_KEY_BYTES;
        let hash_end = pk_end + HASH_BYTES;

        let mut pk_hash = [0u8; HASH_BYTES];
        pk_hash.copy_from_slice(&bytes[pk_end..hash_end]);
        let mut reject = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
        reject.copy_from_slice(&bytes[hash_end..]);

        Ok(Self {
            sk_cpa: Zeroizing::new(bytes[..sk_cpa_end].to_vec()),
            pk: bytes[sk_cpa_end..pk_end].to_vec(),
            pk_hash,
            reject,
            _params: core::marker::PhantomData,
        })
    }
}

/// CCA key generation.
pub(crate) fn kem_keygen<P: NewHopeParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Vec<u8>, CcaSecretKey<P>)> {
    let (pk_cpa, sk_cpa) = keypair_cpa::<P, R>(rng)?;
    let pk_bytes = pack_pk::<P>(&pk_cpa);

    let mut reject = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
    rng.try_fill_bytes(reject.as_mut())
        .map_err(|_| Error::RandomSource { algorithm: P::NAME })?;

    let sk = CcaSecretKey {
        sk_cpa: Zeroizing::new(pack_sk::<P>(&sk_cpa)),
        pk_hash: hash256(&pk_bytes),
        pk: pk_bytes.clone(),
        reject,
        _params: core::marker::PhantomData,
    };

    Ok((pk_bytes, sk))
}

/// CCA encapsulation against a packed public key.
pub(crate) fn kem_encaps<P: NewHopeParams, R: RngCore + CryptoRng>(
    pk_bytes: &[u8],
    rng: &mut R,
) -> Result<(Vec<u8>, Zeroizing<[u8; NEWHOPE_SS_BYTES]>)> {
    let pk_cpa = unpack_pk::<P>(pk_bytes)?;

    let mut m = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
    rng.try_fill_bytes(m.as_mut())
        .map_err(|_| Error::RandomSource { algorithm: P::NAME })?;
    let m = Zeroizing::new(hash256(m.as_ref()));

    // (pre_key, coins) = G(m || H(pk))
    let mut g_input = Zeroizing::new([0u8; 2 * HASH_BYTES]);
    g_input[..HASH_BYTES].copy_from_slice(m.as_ref());
    g_input[HASH_BYTES..].copy_from_slice(&hash256(pk_bytes));
    let mut kr = Zeroizing::new(hash512(g_input.as_ref()));

    let mut coins = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
    coins.copy_from_slice(&kr[HASH_BYTES..]);
    let ct = pack_ciphertext::<P>(&encrypt_cpa::<P>(&pk_cpa, &m, &coins));

    // ss = H(pre_key || H(ct))
    kr[HASH_BYTES..].copy_from_slice(&hash256(&ct));
    let ss = Zeroizing::new(hash256(kr.as_ref()));

    Ok((ct, ss))
}

/// CCA decapsulation with implicit rejection.
pub(crate) fn kem_decaps<P: NewHopeParams>(
    sk: &CcaSecretKey<P>,
    ct_bytes: &[u8],
) -> Result<(Zeroizing<[u8; NEWHOPE_SS_BYTES]>, DecapsStatus)> {
    let ct_cpa = unpack_ciphertext::<P>(ct_bytes)?;
    let sk_cpa = unpack_sk::<P>(&sk.sk_cpa)?;
    let pk_cpa = unpack_pk::<P>(&sk.pk)?;

    let m_prime = decrypt_cpa::<P>(&sk_cpa, &ct_cpa);

    let mut g_input = Zeroizing::new([0u8; 2 * HASH_BYTES]);
    g_input[..HASH_BYTES].copy_from_slice(m_prime.as_ref());
    g_input[HASH_BYTES..].copy_from_slice(&sk.pk_hash);
    let mut kr = Zeroizing::new(hash512(g_input.as_ref()));

    let mut coins = Zeroizing::new([0u8; NEWHOPE_SYM_BYTES]);
    coins.copy_from_slice(&kr[HASH_BYTES..]);
    let ct_prime = pack_ciphertext::<P>(&encrypt_cpa::<P>(&pk_cpa, &m_prime, &coins));

    let fail: Choice = ct_ne(&ct_prime[..], ct_bytes);

    // Same work on both paths; only the conditional swap depends on the
    // comparison, and it runs without branching.
    kr[HASH_BYTES..].copy_from_slice(&hash256(ct_bytes));
    ct_assign(&mut kr[..HASH_BYTES], sk.reject.as_ref(), fail);
    let ss = Zeroizing::new(hash256(kr.as_ref()));

    let status = if bool::from(fail) {
        DecapsStatus::AuthFail
    } else {
        DecapsStatus::Success
    };
    Ok((ss, status))
}
