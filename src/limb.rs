//! Limb definitions and single-limb primitives
//!
//! A magnitude is a little-endian sequence of `Limb`s; intermediate
//! products and carries are computed at `DoubleLimb` width.
//!

/// One word of the positional representation
pub type Limb = u32;

/// Twice the limb width, for intermediate products and carries
pub type DoubleLimb = u64;

/// Signed double-width type carrying the running borrow in division,
/// which may legitimately go negative mid-computation
pub(crate) type SignedDoubleLimb = i64;

/// Number of bits in a limb
pub const LIMB_BITS: u32 = Limb::BITS;

/// The positional base `2^LIMB_BITS` of the representation
pub(crate) const BASE: DoubleLimb = 1 << LIMB_BITS;

/// Low-limb mask of a `DoubleLimb`
pub(crate) const LIMB_MASK: DoubleLimb = BASE - 1;

/// Add with carry-in, returning sum and carry-out
#[inline]
pub(crate) fn carrying_add(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
    let (sum, c0) = a.overflowing_add(b);
    let (sum, c1) = sum.overflowing_add(carry as Limb);
    (sum, c0 | c1)
}

/// Subtract with borrow-in, returning difference and borrow-out
#[inline]
pub(crate) fn borrowing_sub(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
    let (diff, b0) = a.overflowing_sub(b);
    let (diff, b1) = diff.overflowing_sub(borrow as Limb);
    (diff, b0 | b1)
}

/// Full product of two limbs as (low, high)
#[inline]
pub(crate) fn widening_mul(a: Limb, b: Limb) -> (Limb, Limb) {
    let product = a as DoubleLimb * b as DoubleLimb;
    (product as Limb, (product >> LIMB_BITS) as Limb)
}

// https://graphics.stanford.edu/~seander/bithacks.html
const DE_BRUIJN_BIT_POSITION: [u32; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30,
    8, 12, 20, 28, 15, 17, 24, 7, 19, 27, 23, 6, 26, 5, 4, 31,
];

/// Position of the highest set bit (`floor(log2(n))`) of a nonzero limb,
/// via de-Bruijn multiplication
#[inline]
pub(crate) fn floor_log2(n: Limb) -> u32 {
    debug_assert_ne!(n, 0);
    let mut n = n;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    DE_BRUIJN_BIT_POSITION[(n.wrapping_mul(0x07C4ACDD) >> 27) as usize]
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_carrying_add() {
        assert_eq!(carrying_add(1, 2, false), (3, false));
        assert_eq!(carrying_add(Limb::MAX, 1, false), (0, true));
        assert_eq!(carrying_add(Limb::MAX, 0, true), (0, true));
        assert_eq!(carrying_add(Limb::MAX, Limb::MAX, true), (Limb::MAX, true));
    }

    #[test]
    fn test_borrowing_sub() {
        assert_eq!(borrowing_sub(3, 2, false), (1, false));
        assert_eq!(borrowing_sub(0, 1, false), (Limb::MAX, true));
        assert_eq!(borrowing_sub(0, 0, true), (Limb::MAX, true));
        assert_eq!(borrowing_sub(5, 3, true), (1, false));
    }

    #[test]
    fn test_widening_mul() {
        assert_eq!(widening_mul(0, Limb::MAX), (0, 0));
        assert_eq!(widening_mul(2, 3), (6, 0));
        assert_eq!(widening_mul(Limb::MAX, Limb::MAX), (1, Limb::MAX - 1));
    }

    #[test]
    fn test_floor_log2() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(4), 2);
        assert_eq!(floor_log2(0x80000000), 31);
        assert_eq!(floor_log2(Limb::MAX), 31);

        for shift in 0..32 {
            assert_eq!(floor_log2(1 << shift), shift);
        }
    }
}
