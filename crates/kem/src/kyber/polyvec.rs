// kem/src/kyber/polyvec.rs

//! Vectors of K polynomials for Kyber.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use core::marker::PhantomData;
use zeroize::Zeroize;

use super::params::KyberParams;
use super::poly::Poly;

/// A vector of K polynomials.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PolyVec<P: KyberParams> {
    pub(crate) polys: Vec<Poly>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        self.polys.zeroize();
    }
}

impl<P: KyberParams> PolyVec<P> {
    /// Zero vector of dimension K.
    pub(crate) fn zero() -> Self {
        Self {
            polys: vec![Poly::zero(); P::K],
            _params: PhantomData,
        }
    }

    /// Forward NTT on every component.
    pub(crate) fn ntt_inplace(&mut self) {
        for p in self.polys.iter_mut() {
            p.ntt_inplace();
        }
    }

    /// Inverse NTT on every component.
    pub(crate) fn inv_ntt_inplace(&mut self) {
        for p in self.polys.iter_mut() {
            p.inv_ntt_inplace();
        }
    }

    /// Inner product of two NTT-domain vectors: sum of the pairwise
    /// basemuls. The result stays in the NTT domain.
    pub(crate) fn pointwise_accum(&self, other: &Self) -> Poly {
        let mut acc = Poly::zero();
        for (p1, p2) in self.polys.iter().zip(other.polys.iter()) {
            acc = acc.add(&p1.basemul(p2));
        }
        acc
    }

    /// Coefficient-wise addition.
    pub(crate) fn add_assign(&mut self, other: &Self) {
        for (p1, p2) in self.polys.iter_mut().zip(other.polys.iter()) {
            *p1 = p1.add(p2);
        }
    }
}
