//! NewHope KEM types and the `api::Kem` implementation.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use core::marker::PhantomData;

use lattica_api::traits::serialize::{Serialize, SerializeSecret};
use lattica_api::{Kem, Result as ApiResult};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen, CcaSecretKey};
use super::params::{NewHopeParams, NEWHOPE_SS_BYTES};
use crate::error::{validate, Result};
use crate::DecapsStatus;

/// NewHope public key (packed b_hat plus the uniform seed).
pub struct NewHopePublicKey<P: NewHopeParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// NewHope CCA secret key.
pub struct NewHopeSecretKey<P: NewHopeParams> {
    inner: CcaSecretKey<P>,
}

/// NewHope ciphertext (full-width u_hat and compressed v).
pub struct NewHopeCiphertext<P: NewHopeParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// 32-byte shared secret, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct NewHopeSharedSecret {
    bytes: [u8; NEWHOPE_SS_BYTES],
}

impl<P: NewHopeParams> Clone for NewHopePublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: NewHopeParams> Clone for NewHopeSecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: NewHopeParams> Clone for NewHopeCiphertext<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: NewHopeParams> Zeroize for NewHopeSecretKey<P> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl<P: NewHopeParams> AsRef<[u8]> for NewHopePublicKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: NewHopeParams> AsRef<[u8]> for NewHopeCiphertext<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: NewHopeParams> AsMut<[u8]> for NewHopeCiphertext<P> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for NewHopeSharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: NewHopeParams> NewHopePublicKey<P> {
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

impl<P: NewHopeParams> NewHopeCiphertext<P> {
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

impl<P: NewHopeParams> Serialize for NewHopePublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::checked(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: NewHopeParams> Serialize for NewHopeCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::checked(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: NewHopeParams> SerializeSecret for NewHopeSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let inner = CcaSecretKey::<P>::unpack(bytes)?;
        Ok(Self { inner })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.inner.pack()
    }
}

impl SerializeSecret for NewHopeSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let bytes: [u8; NEWHOPE_SS_BYTES] =
            bytes
                .try_into()
                .map_err(|_| lattica_api::Error::InvalidLength {
                    context: "NewHope shared secret",
                    expected: NEWHOPE_SS_BYTES,
                    actual: bytes.len(),
                })?;
        Ok(Self { bytes })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.to_vec())
    }
}

/// NewHope KEM, generic over the parameter set.
pub struct NewHopeKem<P: NewHopeParams> {
    _params: PhantomData<P>,
}

impl<P: NewHopeParams> NewHopeKem<P> {
    /// Decapsulate and report whether the ciphertext authenticated.
    ///
    /// See [`crate::DecapsStatus`] for the contract on using the secret
    /// after an `AuthFail`.
    pub fn decapsulate_checked(
        secret_key: &NewHopeSecretKey<P>,
        ciphertext: &NewHopeCiphertext<P>,
    ) -> ApiResult<(NewHopeSharedSecret, DecapsStatus)> {
        let (ss, status) = kem_decaps::<P>(&secret_key.inner, &ciphertext.bytes)?;
        Ok((NewHopeSharedSecret { bytes: *ss }, status))
    }
}

impl<P: NewHopeParams> Kem for NewHopeKem<P> {
    type PublicKey = NewHopePublicKey<P>;
    type SecretKey = NewHopeSecretKey<P>;
    type SharedSecret = NewHopeSharedSecret;
    type Ciphertext = NewHopeCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk_bytes, sk) = kem_keygen::<P, R>(rng)?;
        Ok((
            NewHopePublicKey {
                bytes: pk_bytes,
                _params: PhantomData,
            },
            NewHopeSecretKey { inner: sk },
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
            NewHopeCiphertext {
                bytes: ct_bytes,
                _params: PhantomData,
            },
            NewHopeSharedSecret { bytes: *ss },
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
