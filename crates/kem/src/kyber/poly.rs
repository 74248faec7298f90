// kem/src/kyber/poly.rs

//! Polynomial arithmetic in Z_q[x]/(x^256 + 1) for Kyber.
//!
//! Coefficients are kept fully reduced in `[0, q)` at all times.
//! The NTT is the incomplete 7-level transform: it stops at degree-2
//! residues, so NTT-domain products go through [`Poly::basemul`] rather
//! than a plain pointwise multiply.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec;

use zeroize::Zeroize;

use super::params::{KYBER_N, KYBER_Q, KYBER_SYM_BYTES};
use crate::hash::shake256_into;

/// Primitive 256th root of unity mod q used by the NTT.
const ZETA: u32 = 17;
/// 128^-1 mod q, the scaling factor of the inverse NTT.
const N_INV: u32 = 3303;

/// A single polynomial with N coefficients mod q.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub(crate) struct Poly {
    pub(crate) coeffs: [u32; KYBER_N],
}

#[inline]
fn add_mod(a: u32, b: u32) -> u32 {
    (a + b) % KYBER_Q
}

#[inline]
fn sub_mod(a: u32, b: u32) -> u32 {
    (a + KYBER_Q - b) % KYBER_Q
}

#[inline]
fn fqmul(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) % KYBER_Q as u64) as u32
}

fn pow_mod(base: u32, mut exp: u32) -> u32 {
    let mut acc = 1u32;
    let mut cur = base % KYBER_Q;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = fqmul(acc, cur);
        }
        cur = fqmul(cur, cur);
        exp >>= 1;
    }
    acc
}

/// Bit-reversal of a 7-bit index.
fn bitrev7(x: usize) -> u32 {
    let mut r = 0u32;
    for i in 0..7 {
        r |= (((x >> i) & 1) as u32) << (6 - i);
    }
    r
}

/// k-th NTT twiddle factor, generated on the fly as zeta^bitrev7(k).
fn zeta(k: usize) -> u32 {
    pow_mod(ZETA, bitrev7(k))
}

impl Poly {
    pub(crate) fn zero() -> Self {
        Self {
            coeffs: [0u32; KYBER_N],
        }
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..KYBER_N {
            r.coeffs[i] = add_mod(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    pub(crate) fn sub(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..KYBER_N {
            r.coeffs[i] = sub_mod(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    /// In-place forward NTT (7 levels, lengths 128 down to 2).
    pub(crate) fn ntt_inplace(&mut self) {
        let mut k = 1;
        let mut len = KYBER_N / 2;
        while len >= 2 {
            let mut start = 0;
            while start < KYBER_N {
                let z = zeta(k);
                k += 1;
                for j in start..start + len {
                    let t = fqmul(z, self.coeffs[j + len]);
                    self.coeffs[j + len] = sub_mod(self.coeffs[j], t);
                    self.coeffs[j] = add_mod(self.coeffs[j], t);
                }
                start += 2 * len;
            }
            len >>= 1;
        }
    }

    /// In-place inverse NTT, including the final scaling by 128^-1.
    pub(crate) fn inv_ntt_inplace(&mut self) {
        let mut k = KYBER_N / 2 - 1;
        let mut len = 2;
        while len <= KYBER_N / 2 {
            let mut start = 0;
            while start < KYBER_N {
                let z = zeta(k);
                k = k.wrapping_sub(1);
                for j in start..start + len {
                    let t = self.coeffs[j];
                    self.coeffs[j] = add_mod(t, self.coeffs[j + len]);
                    self.coeffs[j + len] = fqmul(z, sub_mod(self.coeffs[j + len], t));
                }
                start += 2 * len;
            }
            len <<= 1;
        }
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, N_INV);
        }
    }

    /// Multiplication of two NTT-domain polynomials.
    ///
    /// The incomplete NTT leaves degree-2 residues, so coefficients are
    /// multiplied in pairs mod (x^2 - zeta_i) with alternating signs on
    /// the per-pair root.
    pub(crate) fn basemul(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..KYBER_N / 4 {
            let z = zeta(KYBER_N / 4 + i);
            for (off, pair_zeta) in [(4 * i, z), (4 * i + 2, KYBER_Q - z)] {
                let a0 = self.coeffs[off];
                let a1 = self.coeffs[off + 1];
                let b0 = other.coeffs[off];
                let b1 = other.coeffs[off + 1];
                r.coeffs[off] = add_mod(fqmul(a0, b0), fqmul(fqmul(a1, b1), pair_zeta));
                r.coeffs[off + 1] = add_mod(fqmul(a0, b1), fqmul(a1, b0));
            }
        }
        r
    }

    /// Uniform rejection sampling from a SHAKE128 stream, 12 bits at a
    /// time, two candidates per 3 squeezed bytes.
    pub(crate) fn sample_uniform(reader: &mut sha3::Shake128Reader) -> Self {
        use sha3::digest::XofReader;

        let mut poly = Self::zero();
        let mut buf = [0u8; 3];
        let mut count = 0;
        while count < KYBER_N {
            reader.read(&mut buf);
            let d1 = (buf[0] as u32) | ((buf[1] as u32 & 0x0F) << 8);
            let d2 = ((buf[1] as u32) >> 4) | ((buf[2] as u32) << 4);
            if d1 < KYBER_Q {
                poly.coeffs[count] = d1;
                count += 1;
            }
            if d2 < KYBER_Q && count < KYBER_N {
                poly.coeffs[count] = d2;
                count += 1;
            }
        }
        poly
    }

    /// Centered binomial sampling with parameter eta from
    /// SHAKE256(seed || nonce).
    pub(crate) fn sample_cbd(seed: &[u8], nonce: u8, eta: u8) -> Self {
        let mut buf = vec![0u8; (eta as usize * KYBER_N) / 4];
        shake256_into(&mut buf, &[seed, &[nonce]]);

        let mut poly = Self::zero();
        let mut bit_idx = 0;
        for i in 0..KYBER_N {
            let mut a = 0u32;
            let mut b = 0u32;
            for _ in 0..eta {
                a += ((buf[bit_idx / 8] >> (bit_idx % 8)) & 1) as u32;
                bit_idx += 1;
            }
            for _ in 0..eta {
                b += ((buf[bit_idx / 8] >> (bit_idx % 8)) & 1) as u32;
                bit_idx += 1;
            }
            poly.coeffs[i] = (a + KYBER_Q - b) % KYBER_Q;
        }
        poly
    }

    /// Encode a 32-byte message as a polynomial, one bit per coefficient
    /// scaled to round(q/2).
    pub(crate) fn from_msg(msg: &[u8; KYBER_SYM_BYTES]) -> Self {
        let mut poly = Self::zero();
        for i in 0..KYBER_N {
            let bit = (msg[i / 8] >> (i % 8)) & 1;
            poly.coeffs[i] = bit as u32 * KYBER_Q.div_ceil(2);
        }
        poly
    }

    /// Decode a polynomial back to a 32-byte message by rounding each
    /// coefficient to the nearest multiple of q/2.
    pub(crate) fn to_msg(&self) -> [u8; KYBER_SYM_BYTES] {
        let mut msg = [0u8; KYBER_SYM_BYTES];
        for i in 0..KYBER_N {
            let t = ((self.coeffs[i] << 1) + KYBER_Q / 2) / KYBER_Q;
            msg[i / 8] |= ((t & 1) as u8) << (i % 8);
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn random_poly(rng: &mut ChaChaRng) -> Poly {
        let mut p = Poly::zero();
        for c in p.coeffs.iter_mut() {
            *c = rng.gen_range(0..KYBER_Q);
        }
        p
    }

    #[test]
    fn ntt_roundtrip() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        let p = random_poly(&mut rng);
        let mut q = p.clone();
        q.ntt_inplace();
        assert_ne!(p, q);
        q.inv_ntt_inplace();
        assert_eq!(p, q);
    }

    #[test]
    fn basemul_matches_schoolbook() {
        let mut rng = ChaChaRng::seed_from_u64(11);
        let a = random_poly(&mut rng);
        let b = random_poly(&mut rng);

        // Negacyclic schoolbook product mod x^256 + 1.
        let mut reference = Poly::zero();
        for i in 0..KYBER_N {
            for j in 0..KYBER_N {
                let prod = fqmul(a.coeffs[i], b.coeffs[j]);
                let k = i + j;
                if k < KYBER_N {
                    reference.coeffs[k] = add_mod(reference.coeffs[k], prod);
                } else {
                    reference.coeffs[k - KYBER_N] = sub_mod(reference.coeffs[k - KYBER_N], prod);
                }
            }
        }

        let mut a_hat = a.clone();
        let mut b_hat = b.clone();
        a_hat.ntt_inplace();
        b_hat.ntt_inplace();
        let mut got = a_hat.basemul(&b_hat);
        got.inv_ntt_inplace();
        assert_eq!(got, reference);
    }

    #[test]
    fn message_roundtrip() {
        let mut rng = ChaChaRng::seed_from_u64(13);
        let mut msg = [0u8; KYBER_SYM_BYTES];
        rng.fill(&mut msg);
        let poly = Poly::from_msg(&msg);
        assert_eq!(poly.to_msg(), msg);
    }

    #[test]
    fn cbd_coefficients_centered() {
        let seed = [0x5au8; 32];
        for eta in [2u8, 3u8] {
            let poly = Poly::sample_cbd(&seed, 0, eta);
            for &c in poly.coeffs.iter() {
                // Samples lie in [-eta, eta] mod q.
                assert!(c <= eta as u32 || c >= KYBER_Q - eta as u32);
            }
        }
    }

    #[test]
    fn cbd_nonce_separates_domains() {
        let seed = [0x33u8; 32];
        let p0 = Poly::sample_cbd(&seed, 0, 2);
        let p1 = Poly::sample_cbd(&seed, 1, 2);
        assert_ne!(p0, p1);
    }
}
