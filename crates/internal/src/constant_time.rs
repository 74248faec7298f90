//! Constant-time operations to prevent timing attacks
//!
//! Contract: time and memory-access pattern of every function here is
//! independent of the buffer contents. The implementations delegate to
//! `subtle`, which keeps the compiler from reintroducing branches.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time inequality check of two byte slices.
///
/// Returns a `Choice` that is 1 if the slices differ anywhere in their
/// common length, 0 if they are equal. Slices of different lengths are
/// always reported as differing; the length comparison itself is public
/// information (all lengths in this library are parameter-set constants).
pub fn ct_ne<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(1);
    }

    !a.ct_eq(b)
}

/// Constant-time equality check of two byte slices.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    !bool::from(ct_ne(a, b))
}

/// Constant-time conditional assignment.
///
/// Sets `dst` to `src` if `condition` is 1, otherwise leaves `dst`
/// unchanged. Both paths touch every byte of `dst`.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: Choice) {
    assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = u8::conditional_select(d, s, condition);
    }
}

/// Constant-time selection of a value.
///
/// Returns `a` if `condition` is 0, `b` if `condition` is 1.
pub fn ct_select<T>(a: T, b: T, condition: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(&a, &b, condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ne_on_equal_buffers_is_zero() {
        let a = [0u8, 1, 2, 255, 4];
        assert_eq!(ct_ne(a, a).unwrap_u8(), 0);
        assert!(ct_eq(a, a));
        assert_eq!(ct_ne([0u8; 0], [0u8; 0]).unwrap_u8(), 0);
    }

    #[test]
    fn ne_detects_any_single_byte_difference() {
        let a = [0x5au8; 64];
        for i in 0..a.len() {
            for bit in 0..8 {
                let mut b = a;
                b[i] ^= 1 << bit;
                assert_eq!(ct_ne(a, b).unwrap_u8(), 1, "byte {} bit {}", i, bit);
            }
        }
    }

    #[test]
    fn ne_on_length_mismatch() {
        assert_eq!(ct_ne([1u8, 2], [1u8, 2, 3]).unwrap_u8(), 1);
    }

    #[test]
    fn assign_is_gated_by_condition() {
        let src = [0xffu8; 8];

        let mut dst = [0u8; 8];
        ct_assign(&mut dst, &src, Choice::from(0));
        assert_eq!(dst, [0u8; 8]);

        ct_assign(&mut dst, &src, Choice::from(1));
        assert_eq!(dst, src);
    }

    #[test]
    fn select_picks_by_condition() {
        assert_eq!(ct_select(3u8, 7u8, Choice::from(0)), 3);
        assert_eq!(ct_select(3u8, 7u8, Choice::from(1)), 7);
    }
}
