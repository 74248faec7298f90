// kem/src/newhope/poly.rs

//! Polynomial arithmetic in Z_q[x]/(x^n + 1) for NewHope.
//!
//! The negacyclic NTT is built from a cyclic one: coefficients are
//! twisted by powers of gamma (a primitive 2n-th root of unity), then a
//! textbook iterative NTT over omega = gamma^2 runs in place. The
//! inverse untwists and scales by n^-1. NTT-domain products are plain
//! pointwise multiplications.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{vec, vec::Vec};

use core::marker::PhantomData;
use zeroize::Zeroize;

use super::params::{NewHopeParams, NEWHOPE_Q, NEWHOPE_SYM_BYTES};
use crate::hash::shake256_into;

#[inline]
fn add_mod(a: u32, b: u32) -> u32 {
    (a + b) % NEWHOPE_Q
}

#[inline]
fn sub_mod(a: u32, b: u32) -> u32 {
    (a + NEWHOPE_Q - b) % NEWHOPE_Q
}

#[inline]
fn fqmul(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) % NEWHOPE_Q as u64) as u32
}

fn pow_mod(base: u32, mut exp: u32) -> u32 {
    let mut acc = 1u32;
    let mut cur = base % NEWHOPE_Q;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = fqmul(acc, cur);
        }
        cur = fqmul(cur, cur);
        exp >>= 1;
    }
    acc
}

#[inline]
fn inv_mod(a: u32) -> u32 {
    pow_mod(a, NEWHOPE_Q - 2)
}

/// Bit-reversal of an index with the given bit width.
fn bitrev(x: usize, bits: usize) -> usize {
    let mut r = 0usize;
    for i in 0..bits {
        r |= ((x >> i) & 1) << (bits - 1 - i);
    }
    r
}

/// In-place iterative cyclic NTT over the given root of unity.
fn cyclic_ntt(coeffs: &mut [u32], omega: u32) {
    let n = coeffs.len();
    let bits = n.trailing_zeros() as usize;

    for i in 0..n {
        let j = bitrev(i, bits);
        if i < j {
            coeffs.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let w_len = pow_mod(omega, (n / len) as u32);
        let mut start = 0;
        while start < n {
            let mut w = 1u32;
            for j in 0..len / 2 {
                let u = coeffs[start + j];
                let v = fqmul(coeffs[start + j + len / 2], w);
                coeffs[start + j] = add_mod(u, v);
                coeffs[start + j + len / 2] = sub_mod(u, v);
                w = fqmul(w, w_len);
            }
            start += len;
        }
        len <<= 1;
    }
}

/// A single polynomial with N coefficients mod q.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Poly<P: NewHopeParams> {
    pub(crate) coeffs: Vec<u32>,
    _params: PhantomData<P>,
}

impl<P: NewHopeParams> Clone for Poly<P> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: NewHopeParams> Zeroize for Poly<P> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<P: NewHopeParams> Poly<P> {
    pub(crate) fn zero() -> Self {
        Self {
            coeffs: vec![0u32; P::N],
            _params: PhantomData,
        }
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..P::N {
            r.coeffs[i] = add_mod(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    pub(crate) fn sub(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..P::N {
            r.coeffs[i] = sub_mod(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    /// Pointwise product of two NTT-domain polynomials.
    pub(crate) fn mul_pointwise(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..P::N {
            r.coeffs[i] = fqmul(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    /// Forward negacyclic NTT: gamma^i twist, then cyclic NTT.
    pub(crate) fn ntt_inplace(&mut self) {
        let mut g = 1u32;
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, g);
            g = fqmul(g, P::GAMMA);
        }
        cyclic_ntt(&mut self.coeffs, fqmul(P::GAMMA, P::GAMMA));
    }

    /// Inverse negacyclic NTT: cyclic NTT over omega^-1, then the
    /// combined n^-1 * gamma^-i untwist.
    pub(crate) fn inv_ntt_inplace(&mut self) {
        let omega_inv = inv_mod(fqmul(P::GAMMA, P::GAMMA));
        cyclic_ntt(&mut self.coeffs, omega_inv);

        let gamma_inv = inv_mod(P::GAMMA);
        let mut scale = inv_mod(P::N as u32);
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, scale);
            scale = fqmul(scale, gamma_inv);
        }
    }

    /// Uniform rejection sampling from SHAKE128(seed), 14-bit candidates
    /// two bytes at a time.
    pub(crate) fn sample_uniform(seed: &[u8]) -> Self {
        use sha3::digest::XofReader;

        let mut reader = crate::hash::shake128_reader(&[seed]);
        let mut poly = Self::zero();
        let mut buf = [0u8; 2];
        let mut count = 0;
        while count < P::N {
            reader.read(&mut buf);
            let val = ((buf[0] as u32) | ((buf[1] as u32) << 8)) & 0x3FFF;
            if val < NEWHOPE_Q {
                poly.coeffs[count] = val;
                count += 1;
            }
        }
        poly
    }

    /// Centered binomial sampling (psi_8): the difference of the
    /// popcounts of two bytes per coefficient, from SHAKE256(seed || nonce).
    pub(crate) fn sample_noise(seed: &[u8], nonce: u8) -> Self {
        let mut buf = vec![0u8; 2 * P::N];
        shake256_into(&mut buf, &[seed, &[nonce]]);

        let mut poly = Self::zero();
        for i in 0..P::N {
            let a = buf[2 * i].count_ones();
            let b = buf[2 * i + 1].count_ones();
            poly.coeffs[i] = (NEWHOPE_Q + a - b) % NEWHOPE_Q;
        }
        poly
    }

    /// Encode a 32-byte message, replicating each bit into n/256
    /// coefficients scaled to q/2.
    pub(crate) fn from_msg(msg: &[u8; NEWHOPE_SYM_BYTES]) -> Self {
        let reps = P::N / 256;
        let mut poly = Self::zero();
        for i in 0..256 {
            let bit = (msg[i / 8] >> (i % 8)) & 1;
            for j in 0..reps {
                poly.coeffs[i + 256 * j] = bit as u32 * (NEWHOPE_Q / 2);
            }
        }
        poly
    }

    /// Decode a polynomial back to a 32-byte message by summing the
    /// distances of the n/256 replicas from q/2 and thresholding.
    pub(crate) fn to_msg(&self) -> [u8; NEWHOPE_SYM_BYTES] {
        let reps = P::N / 256;
        let mut msg = [0u8; NEWHOPE_SYM_BYTES];
        for i in 0..256 {
            let mut t = 0u32;
            for j in 0..reps {
                let c = self.coeffs[i + 256 * j];
                t += c.abs_diff(NEWHOPE_Q / 2);
            }
            if t < reps as u32 * (NEWHOPE_Q / 4) {
                msg[i / 8] |= 1 << (i % 8);
            }
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::super::params::{NewHope1024ParamsImpl, NewHope512ParamsImpl};
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn random_poly<P: NewHopeParams>(rng: &mut ChaChaRng) -> Poly<P> {
        let mut p = Poly::<P>::zero();
        for c in p.coeffs.iter_mut() {
            *c = rng.gen_range(0..NEWHOPE_Q);
        }
        p
    }

    fn ntt_roundtrip<P: NewHopeParams + core::fmt::Debug + PartialEq>() {
        let mut rng = ChaChaRng::seed_from_u64(17);
        let p = random_poly::<P>(&mut rng);
        let mut q = p.clone();
        q.ntt_inplace();
        assert_ne!(p, q);
        q.inv_ntt_inplace();
        assert_eq!(p, q);
    }

    #[test]
    fn ntt_roundtrip_512() {
        ntt_roundtrip::<NewHope512ParamsImpl>();
    }

    #[test]
    fn ntt_roundtrip_1024() {
        ntt_roundtrip::<NewHope1024ParamsImpl>();
    }

    #[test]
    fn pointwise_mul_matches_schoolbook() {
        type P = NewHope512ParamsImpl;
        let mut rng = ChaChaRng::seed_from_u64(19);
        let a = random_poly::<P>(&mut rng);
        let b = random_poly::<P>(&mut rng);

        // Negacyclic schoolbook product mod x^n + 1.
        let n = <P as NewHopeParams>::N;
        let mut reference = Poly::<P>::zero();
        for i in 0..n {
            for j in 0..n {
                let prod = fqmul(a.coeffs[i], b.coeffs[j]);
                let k = i + j;
                if k < n {
                    reference.coeffs[k] = add_mod(reference.coeffs[k], prod);
                } else {
                    reference.coeffs[k - n] = sub_mod(reference.coeffs[k - n], prod);
                }
            }
        }

        let mut a_hat = a.clone();
        let mut b_hat = b.clone();
        a_hat.ntt_inplace();
        b_hat.ntt_inplace();
        let mut got = a_hat.mul_pointwise(&b_hat);
        got.inv_ntt_inplace();
        assert_eq!(got, reference);
    }

    #[test]
    fn message_roundtrip_survives_small_noise() {
        type P = NewHope1024ParamsImpl;
        let mut rng = ChaChaRng::seed_from_u64(23);
        let mut msg = [0u8; NEWHOPE_SYM_BYTES];
        rng.fill(&mut msg);

        let mut poly = Poly::<P>::from_msg(&msg);
        // Perturb every coefficient by a small amount; the redundancy
        // in the encoding must absorb it.
        for c in poly.coeffs.iter_mut() {
            let delta = rng.gen_range(0..200u32);
            *c = if rng.gen_bool(0.5) {
                add_mod(*c, delta)
            } else {
                sub_mod(*c, delta)
            };
        }
        assert_eq!(poly.to_msg(), msg);
    }

    #[test]
    fn noise_coefficients_bounded() {
        type P = NewHope512ParamsImpl;
        let poly = Poly::<P>::sample_noise(&[0x42u8; 32], 0);
        for &c in poly.coeffs.iter() {
            // psi_8 samples lie in [-8, 8] mod q.
            assert!(c <= 8 || c >= NEWHOPE_Q - 8);
        }
    }

    #[test]
    fn noise_nonce_separates_domains() {
        type P = NewHope512ParamsImpl;
        let seed = [0x77u8; 32];
        assert_ne!(
            Poly::<P>::sample_noise(&seed, 0),
            Poly::<P>::sample_noise(&seed, 1)
        );
    }
}
