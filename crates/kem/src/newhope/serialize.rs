// kem/src/newhope/serialize.rs

//! Byte-level encodings for NewHope keys and ciphertexts.
//!
//! Full-width coefficients are packed 14 bits each, four coefficients
//! into seven little-endian bytes. The ciphertext polynomial v is
//! compressed to 3 bits per coefficient, eight coefficients into three
//! bytes.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use super::cpa_pke::{CpaCiphertext, CpaPublicKey, CpaSecretKey};
use super::params::{NewHopeParams, NEWHOPE_Q, NEWHOPE_SYM_BYTES};
use super::poly::Poly;
use crate::error::{validate, Result};

/// Pack a polynomial at full width, 14 bits per coefficient.
fn pack_poly_into<P: NewHopeParams>(poly: &Poly<P>, out: &mut Vec<u8>) {
    for quad in poly.coeffs.chunks_exact(4) {
        let mut acc = 0u64;
        for (j, &c) in quad.iter().enumerate() {
            acc |= (c as u64) << (14 * j);
        }
        out.extend_from_slice(&acc.to_le_bytes()[..7]);
    }
}

/// Unpack a full-width polynomial from exactly `P::POLY_BYTES` bytes.
fn unpack_poly<P: NewHopeParams>(bytes: &[u8]) -> Result<Poly<P>> {
    validate::serialization(
        bytes.len() == P::POLY_BYTES,
        "unpack_poly",
        "truncated polynomial encoding",
    )?;

    let mut poly = Poly::<P>::zero();
    for (i, group) in bytes.chunks_exact(7).enumerate() {
        let mut word = [0u8; 8];
        word[..7].copy_from_slice(group);
        let acc = u64::from_le_bytes(word);
        for j in 0..4 {
            poly.coeffs[4 * i + j] = ((acc >> (14 * j)) & 0x3FFF) as u32;
        }
    }
    Ok(poly)
}

/// Compress v to 3 bits per coefficient, eight coefficients in three
/// little-endian bytes.
fn compress_poly_into<P: NewHopeParams>(poly: &Poly<P>, out: &mut Vec<u8>) {
    for octet in poly.coeffs.chunks_exact(8) {
        let mut acc = 0u32;
        for (j, &c) in octet.iter().enumerate() {
            let t = ((((c as u64) << 3) + (NEWHOPE_Q as u64 / 2)) / (NEWHOPE_Q as u64)) as u32 & 7;
            acc |= t << (3 * j);
        }
        out.extend_from_slice(&acc.to_le_bytes()[..3]);
    }
}

/// Decompress v: round(q / 8 * t) for each 3-bit value.
fn decompress_poly<P: NewHopeParams>(bytes: &[u8]) -> Result<Poly<P>> {
    validate::serialization(
        bytes.len() == P::COMPRESSED_BYTES,
        "decompress_poly",
        "truncated compressed polynomial",
    )?;

    let mut poly = Poly::<P>::zero();
    for (i, group) in bytes.chunks_exact(3).enumerate() {
        let acc = (group[0] as u32) | ((group[1] as u32) << 8) | ((group[2] as u32) << 16);
        for j in 0..8 {
            let t = (acc >> (3 * j)) & 7;
            poly.coeffs[8 * i + j] = (t * NEWHOPE_Q + 4) >> 3;
        }
    }
    Ok(poly)
}

/// Pack the public key: b_hat at full width, then the uniform seed.
pub(crate) fn pack_pk<P: NewHopeParams>(pk: &CpaPublicKey<P>) -> Vec<u8> {
    let (b_hat, seed) = pk;
    let mut packed = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
    pack_poly_into(b_hat, &mut packed);
    packed.extend_from_slice(seed);
    packed
}

/// Unpack a public key, validating the exact length.
pub(crate) fn unpack_pk<P: NewHopeParams>(bytes: &[u8]) -> Result<CpaPublicKey<P>> {
    validate::key(
        bytes.len() == P::PUBLIC_KEY_BYTES,
        "public",
        "unexpected public key length",
    )?;

    let b_hat = unpack_poly::<P>(&bytes[..P::POLY_BYTES])?;
    let mut seed = [0u8; NEWHOPE_SYM_BYTES];
    seed.copy_from_slice(&bytes[P::POLY_BYTES..]);
    Ok((b_hat, seed))
}

/// Pack the CPA secret key: the NTT-domain secret at full width.
pub(crate) fn pack_sk<P: NewHopeParams>(sk: &CpaSecretKey<P>) -> Vec<u8> {
    let mut packed = Vec::with_capacity(P::POLY_BYTES);
    pack_poly_into(sk, &mut packed);
    packed
}

/// Unpack a CPA secret key, validating the exact length.
pub(crate) fn unpack_sk<P: NewHopeParams>(bytes: &[u8]) -> Result<CpaSecretKey<P>> {
    validate::key(
        bytes.len() == P::POLY_BYTES,
        "secret",
        "unexpected CPA secret key length",
    )?;
    unpack_poly::<P>(bytes)
}

/// Pack a ciphertext: u_hat at full width, v compressed.
pub(crate) fn pack_ciphertext<P: NewHopeParams>(ct: &CpaCiphertext<P>) -> Vec<u8> {
    let (u_hat, v) = ct;
    let mut packed = Vec::with_capacity(P::CIPHERTEXT_BYTES);
    pack_poly_into(u_hat, &mut packed);
    compress_poly_into(v, &mut packed);
    packed
}

/// Unpack a ciphertext, validating the exact length.
pub(crate) fn unpack_ciphertext<P: NewHopeParams>(bytes: &[u8]) -> Result<CpaCiphertext<P>> {
    validate::ciphertext(
        bytes.len() == P::CIPHERTEXT_BYTES,
        P::NAME,
        "unexpected ciphertext length",
    )?;

    let u_hat = unpack_poly::<P>(&bytes[..P::POLY_BYTES])?;
    let v = decompress_poly::<P>(&bytes[P::POLY_BYTES..])?;
    Ok((u_hat, v))
}

#[cfg(test)]
mod tests {
    use super::super::params::{NewHope1024ParamsImpl, NewHope512ParamsImpl};
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn full_width_roundtrip<P: NewHopeParams + core::fmt::Debug + PartialEq>() {
        let mut rng = ChaChaRng::seed_from_u64(29);
        let mut poly = Poly::<P>::zero();
        for c in poly.coeffs.iter_mut() {
            *c = rng.gen_range(0..NEWHOPE_Q);
        }

        let mut packed = Vec::new();
        pack_poly_into(&poly, &mut packed);
        assert_eq!(packed.len(), P::POLY_BYTES);
        assert_eq!(unpack_poly::<P>(&packed).unwrap(), poly);
    }

    #[test]
    fn full_width_poly_roundtrip_512() {
        full_width_roundtrip::<NewHope512ParamsImpl>();
    }

    #[test]
    fn full_width_poly_roundtrip_1024() {
        full_width_roundtrip::<NewHope1024ParamsImpl>();
    }

    #[test]
    fn compressed_poly_is_stable() {
        type P = NewHope512ParamsImpl;
        let mut rng = ChaChaRng::seed_from_u64(31);
        let mut poly = Poly::<P>::zero();
        for c in poly.coeffs.iter_mut() {
            *c = rng.gen_range(0..NEWHOPE_Q);
        }

        let mut packed = Vec::new();
        compress_poly_into(&poly, &mut packed);
        assert_eq!(packed.len(), <P as NewHopeParams>::COMPRESSED_BYTES);

        let decompressed = decompress_poly::<P>(&packed).unwrap();
        let mut repacked = Vec::new();
        compress_poly_into(&decompressed, &mut repacked);
        assert_eq!(packed, repacked);
    }

    #[test]
    fn unpack_rejects_bad_lengths() {
        type P = NewHope512ParamsImpl;
        assert!(unpack_poly::<P>(&[0u8; 10]).is_err());
        assert!(decompress_poly::<P>(&[0u8; 10]).is_err());
        assert!(unpack_pk::<P>(&[0u8; 927]).is_err());
        assert!(unpack_ciphertext::<P>(&[0u8; 1089]).is_err());
    }
}
