// kem/src/kyber/serialize.rs

//! Byte-level encodings for Kyber keys and ciphertexts.
//!
//! Full-width coefficients are packed 12 bits each (two coefficients in
//! three bytes). Ciphertext components are compressed to DU/DV bits and
//! packed LSB-first through a bit accumulator, which reproduces the
//! standard layouts for every d used by the parameter sets.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use super::cpa_pke::{CpaCiphertext, CpaPublicKey, CpaSecretKey};
use super::params::{KyberParams, KYBER_N, KYBER_POLY_BYTES, KYBER_Q, KYBER_SYM_BYTES};
use super::poly::Poly;
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

/// Round a coefficient to d bits: round(2^d / q * x) mod 2^d.
fn compress_coeff(coeff: u32, d: usize) -> u32 {
    ((((coeff as u64) << d) + (KYBER_Q as u64 / 2)) / (KYBER_Q as u64)) as u32 & ((1 << d) - 1)
}

/// Expand a d-bit value back to a coefficient: round(q / 2^d * x).
fn decompress_coeff(val: u32, d: usize) -> u32 {
    (((val as u64) * (KYBER_Q as u64) + (1 << (d - 1))) >> d) as u32
}

/// Pack a polynomial at full width, 12 bits per coefficient.
fn pack_poly_into(poly: &Poly, out: &mut Vec<u8>) {
    for pair in poly.coeffs.chunks_exact(2) {
        out.push((pair[0] & 0xFF) as u8);
        out.push((((pair[0] >> 8) & 0x0F) | ((pair[1] & 0x0F) << 4)) as u8);
        out.push(((pair[1] >> 4) & 0xFF) as u8);
    }
}

/// Unpack a full-width polynomial from exactly `KYBER_POLY_BYTES` bytes.
fn unpack_poly(bytes: &[u8]) -> Result<Poly> {
    validate::serialization(
        bytes.len() == KYBER_POLY_BYTES,
        "unpack_poly",
        "truncated polynomial encoding",
    )?;

    let mut poly = Poly::zero();
    for (i, b) in bytes.chunks_exact(3).enumerate() {
        poly.coeffs[2 * i] = (b[0] as u32) | ((b[1] as u32 & 0x0F) << 8);
        poly.coeffs[2 * i + 1] = ((b[1] as u32) >> 4) | ((b[2] as u32) << 4);
    }
    Ok(poly)
}

/// Compress each coefficient to d bits and pack LSB-first.
fn compress_poly_into(poly: &Poly, d: usize, out: &mut Vec<u8>) {
    let mut acc: u32 = 0;
    let mut bits = 0;
    for &c in poly.coeffs.iter() {
        acc |= compress_coeff(c, d) << bits;
        bits += d;
        while bits >= 8 {
            out.push((acc & 0xFF) as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    // All supported d values divide 8*N, so nothing is left over.
    debug_assert_eq!(bits, 0);
}

/// Inverse of [`compress_poly_into`]: unpack and decompress d-bit values.
fn decompress_poly(data: &[u8], d: usize) -> Result<Poly> {
    validate::serialization(
        data.len() == (KYBER_N * d) / 8,
        "decompress_poly",
        "truncated compressed polynomial",
    )?;

    let mut poly = Poly::zero();
    let mask = (1u32 << d) - 1;
    let mut acc: u32 = 0;
    let mut bits = 0;
    let mut pos = 0;
    for i in 0..KYBER_N {
        while bits < d {
            acc |= (data[pos] as u32) << bits;
            pos += 1;
            bits += 8;
        }
        poly.coeffs[i] = decompress_coeff(acc & mask, d);
        acc >>= d;
        bits -= d;
    }
    Ok(poly)
}

/// Pack the public key: t_hat at full width, then the matrix seed rho.
pub(crate) fn pack_pk<P: KyberParams>(pk: &CpaPublicKey<P>) -> Vec<u8> {
    let (t_hat, rho) = pk;
    let mut packed = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
    for poly in &t_hat.polys {
        pack_poly_into(poly, &mut packed);
    }
    packed.extend_from_slice(rho);
    packed
}

/// Unpack a public key, validating the exact length.
pub(crate) fn unpack_pk<P: KyberParams>(bytes: &[u8]) -> Result<CpaPublicKey<P>> {
    validate::key(
        bytes.len() == P::PUBLIC_KEY_BYTES,
        "public",
        "unexpected public key length",
    )?;

    let mut t_hat = PolyVec::<P>::zero();
    for i in 0..P::K {
        let start = i * KYBER_POLY_BYTES;
        t_hat.polys[i] = unpack_poly(&bytes[start..start + KYBER_POLY_BYTES])?;
    }

    let mut rho = [0u8; KYBER_SYM_BYTES];
    rho.copy_from_slice(&bytes[P::K * KYBER_POLY_BYTES..]);
    Ok((t_hat, rho))
}

/// Pack the CPA secret key: the NTT-domain secret vector at full width.
pub(crate) fn pack_sk<P: KyberParams>(sk: &CpaSecretKey<P>) -> Vec<u8> {
    let mut packed = Vec::with_capacity(P::CPA_SECRET_KEY_BYTES);
    for poly in &sk.polys {
        pack_poly_into(poly, &mut packed);
    }
    packed
}

/// Unpack a CPA secret key, validating the exact length.
pub(crate) fn unpack_sk<P: KyberParams>(bytes: &[u8]) -> Result<CpaSecretKey<P>> {
    validate::key(
        bytes.len() == P::CPA_SECRET_KEY_BYTES,
        "secret",
        "unexpected CPA secret key length",
    )?;

    let mut s_hat = PolyVec::<P>::zero();
    for i in 0..P::K {
        let start = i * KYBER_POLY_BYTES;
        s_hat.polys[i] = unpack_poly(&bytes[start..start + KYBER_POLY_BYTES])?;
    }
    Ok(s_hat)
}

/// Pack a ciphertext: u compressed to DU bits, v compressed to DV bits.
pub(crate) fn pack_ciphertext<P: KyberParams>(ct: &CpaCiphertext<P>) -> Vec<u8> {
    let (u, v) = ct;
    let mut packed = Vec::with_capacity(P::CIPHERTEXT_BYTES);
    for poly in &u.polys {
        compress_poly_into(poly, P::DU, &mut packed);
    }
    compress_poly_into(v, P::DV, &mut packed);
    packed
}

/// Unpack a ciphertext, validating the exact length.
pub(crate) fn unpack_ciphertext<P: KyberParams>(bytes: &[u8]) -> Result<CpaCiphertext<P>> {
    validate::ciphertext(
        bytes.len() == P::CIPHERTEXT_BYTES,
        P::NAME,
        "unexpected ciphertext length",
    )?;

    let poly_u_bytes = (KYBER_N * P::DU) / 8;
    let mut u = PolyVec::<P>::zero();
    for i in 0..P::K {
        let start = i * poly_u_bytes;
        u.polys[i] = decompress_poly(&bytes[start..start + poly_u_bytes], P::DU)?;
    }
    let v = decompress_poly(&bytes[P::CIPHERTEXT_U_BYTES..], P::DV)?;
    Ok((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    #[test]
    fn full_width_poly_roundtrip() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        let mut poly = Poly::zero();
        for c in poly.coeffs.iter_mut() {
            *c = rng.gen_range(0..KYBER_Q);
        }

        let mut packed = Vec::new();
        pack_poly_into(&poly, &mut packed);
        assert_eq!(packed.len(), KYBER_POLY_BYTES);
        assert_eq!(unpack_poly(&packed).unwrap(), poly);
    }

    #[test]
    fn compressed_poly_is_stable() {
        // Compression is lossy but idempotent on already-rounded values.
        let mut rng = ChaChaRng::seed_from_u64(5);
        for d in [4usize, 5, 10, 11] {
            let mut poly = Poly::zero();
            for c in poly.coeffs.iter_mut() {
                *c = rng.gen_range(0..KYBER_Q);
            }

            let mut packed = Vec::new();
            compress_poly_into(&poly, d, &mut packed);
            assert_eq!(packed.len(), (KYBER_N * d) / 8);

            let decompressed = decompress_poly(&packed, d).unwrap();
            let mut repacked = Vec::new();
            compress_poly_into(&decompressed, d, &mut repacked);
            assert_eq!(packed, repacked);
        }
    }

    #[test]
    fn unpack_rejects_bad_lengths() {
        assert!(unpack_poly(&[0u8; KYBER_POLY_BYTES - 1]).is_err());
        assert!(decompress_poly(&[0u8; 1], 4).is_err());
    }
}
