//! Kyber KEM types and the `api::Kem` implementation.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use core::marker::PhantomData;

use lattica_api::traits::serialize::{Serialize, SerializeSecret};
use lattica_api::{Kem, Result as ApiResult};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen, CcaSecretKey};
use super::params::{KyberParams, KYBER_SS_BYTES};
use crate::error::{validate, Result};
use crate::DecapsStatus;

/// Kyber public key (packed t_hat plus the matrix seed).
pub struct KyberPublicKey<P: KyberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// Kyber CCA secret key.
pub struct KyberSecretKey<P: KyberParams> {
    inner: CcaSecretKey<P>,
}

/// Kyber ciphertext (compressed u and v).
pub struct KyberCiphertext<P: KyberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// 32-byte shared secret, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KyberSharedSecret {
    bytes: [u8; KYBER_SS_BYTES],
}

impl<P: KyberParams> Clone for KyberPublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> Clone for KyberSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: KyberParams> Clone for KyberCiphertext<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> Zeroize for KyberSecretKey<P> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl<P: KyberParams> AsRef<[u8]> for KyberPublicKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> AsRef<[u8]> for KyberCiphertext<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> AsMut<[u8]> for KyberCiphertext<P> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for KyberSharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: KyberParams> KyberPublicKey<P> {
    fn checked(bytes: Vec<u8>) -> Result<Self> {
        validate::key(
            bytes.len() == P::PUBLIC_KEY_BYTES,
            "public",
            "unexpected public key length",
        )?;
        Ok(Self {
            bytes,
            _params: PhantomData,
        })
    }
}

impl<P: KyberParams> KyberCiphertext<P> {
    fn checked(bytes: Vec<u8>) -> Result<Self> {
        validate::ciphertext(
            bytes.len() == P::CIPHERTEXT_BYTES,
            P::NAME,
            "unexpected ciphertext length",
        )?;
        Ok(Self {
            bytes,
            _params: PhantomData,
        })
    }
}

impl<P: KyberParams> Serialize for KyberPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::checked(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: KyberParams> Serialize for KyberCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::checked(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: KyberParams> SerializeSecret for KyberSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let inner = CcaSecretKey::<P>::unpack(bytes)?;
        Ok(Self { inner })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.inner.pack()
    }
}

impl SerializeSecret for KyberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let bytes: [u8; KYBER_SS_BYTES] = bytes
            .try_into()
            .map_err(|_| lattica_api::Error::InvalidLength {
                context: "Kyber shared secret",
                expected: KYBER_SS_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.to_vec())
    }
}

/// Kyber KEM, generic over the parameter set.
pub struct KyberKem<P: KyberParams> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberKem<P> {
    /// Decapsulate and report whether the ciphertext authenticated.
    ///
    /// The shared secret is valid on both paths; on `AuthFail` it is the
    /// implicit-rejection value. Most callers want the plain
    /// [`Kem::decapsulate`], which hides the distinction.
    pub fn decapsulate_checked(
        secret_key: &KyberSecretKey<P>,
        ciphertext: &KyberCiphertext<P>,
    ) -> ApiResult<(KyberSharedSecret, DecapsStatus)> {
        let (ss, status) = kem_decaps::<P>(&secret_key.inner, &ciphertext.bytes)?;
        Ok((KyberSharedSecret { bytes: *ss }, status))
    }
}

impl<P: KyberParams> Kem for KyberKem<P> {
    type PublicKey = KyberPublicKey<P>;
    type SecretKey = KyberSecretKey<P>;
    type SharedSecret = KyberSharedSecret;
    type Ciphertext = KyberCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk_bytes, sk) = kem_keygen::<P, R>(rng)?;
        Ok((
            KyberPublicKey {
                bytes: pk_bytes,
                _params: PhantomData,
            },
            KyberSecretKey { inner: sk },
        ))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct_bytes, ss) = kem_encaps::<P, R>(&public_key.bytes, rng)?;
        Ok((
            KyberCiphertext {
                bytes: ct_bytes,
                _params: PhantomData,
            },
            KyberSharedSecret { bytes: *ss },
        ))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let (ss, _status) = Self::decapsulate_checked(secret_key, ciphertext)?;
        Ok(ss)
    }
}
