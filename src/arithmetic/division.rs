//!
//! Division and remainder of limb magnitudes
//!
//! Single-limb divisors take a long-division sweep from the top limb
//! down. Multi-limb divisors use Knuth's Algorithm D (TAOCP vol. 2,
//! §4.3.1): normalize so the divisor's top bit is set, estimate each
//! quotient digit from the top two dividend limbs, correct the estimate
//! at most twice, multiply-and-subtract with a signed double-width
//! borrow, and add the divisor back on the rare overshoot.
//!
//! The quotient-only and remainder-only entry points are separate
//! monomorphizations of one kernel, so the unused side costs nothing.
//!

use crate::arithmetic::{is_single_zero, trimmed_len};
use crate::limb::{floor_log2, DoubleLimb, Limb, SignedDoubleLimb, BASE, LIMB_BITS, LIMB_MASK};
use crate::mem::LimbBuf;

/// Divide `lhs` by `rhs` into `quotient`, returning the used length.
///
/// `quotient` must hold at least `lhs.len()` limbs.
///
/// # Panics
///
/// Panics on division by zero.
pub fn div(quotient: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) -> usize {
    debug_assert!(!is_single_zero(rhs), "division by zero");

    if lhs.len() < rhs.len() {
        quotient[0] = 0;
        return 1;
    }

    if rhs.len() > 1 {
        let (quotient_len, _) = algorithm_d::<false, true>(quotient, lhs, rhs, &mut []);
        quotient_len
    } else {
        divide_by_limb(quotient, lhs, rhs[0]).0
    }
}

/// Compute `lhs mod rhs` into `remainder`, returning the used length.
///
/// `remainder` must hold at least `rhs.len()` limbs.
///
/// # Panics
///
/// Panics on division by zero.
pub fn rem(remainder: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) -> usize {
    debug_assert!(!is_single_zero(rhs), "division by zero");

    if lhs.len() < rhs.len() {
        remainder[..lhs.len()].copy_from_slice(lhs);
        return lhs.len();
    }

    if rhs.len() > 1 {
        let (_, remainder_len) = algorithm_d::<true, false>(&mut [], lhs, rhs, remainder);
        remainder_len
    } else {
        remainder[0] = remainder_by_limb(lhs, rhs[0]);
        1
    }
}

/// Divide the limbs in place by a single nonzero limb, returning the
/// remainder. Sweeps from the top limb down, carrying the partial
/// remainder into the next double-width dividend.
pub(crate) fn div_assign_by_limb(digits: &mut [Limb], divisor: Limb) -> Limb {
    let mut remainder: Limb = 0;
    for digit in digits.iter_mut().rev() {
        let numerator = (remainder as DoubleLimb) << LIMB_BITS | *digit as DoubleLimb;
        *digit = (numerator / divisor as DoubleLimb) as Limb;
        remainder = (numerator % divisor as DoubleLimb) as Limb;
    }
    remainder
}

/// Single-limb division into a caller buffer, returning the quotient
/// length and the remainder
pub(crate) fn divide_by_limb(quotient: &mut [Limb], lhs: &[Limb], divisor: Limb) -> (usize, Limb) {
    let quotient = &mut quotient[..lhs.len()];
    quotient.copy_from_slice(lhs);
    let remainder = div_assign_by_limb(quotient, divisor);
    (trimmed_len(quotient), remainder)
}

/// Single-limb remainder without producing the quotient
pub(crate) fn remainder_by_limb(lhs: &[Limb], divisor: Limb) -> Limb {
    let mut remainder = lhs[lhs.len() - 1] % divisor;
    for &digit in lhs[..lhs.len() - 1].iter().rev() {
        let numerator = (remainder as DoubleLimb) << LIMB_BITS | digit as DoubleLimb;
        remainder = (numerator % divisor as DoubleLimb) as Limb;
    }
    remainder
}

/// Algorithm D over a multi-limb divisor.
///
/// Requires `rhs.len() >= 2`, a nonzero top divisor limb, and
/// `lhs.len() >= rhs.len()`. Returns `(quotient_len, remainder_len)`;
/// the length for an ignored side is 0 and its buffer may be empty.
fn algorithm_d<const IGNORE_QUOTIENT: bool, const IGNORE_REMAINDER: bool>(
    quotient: &mut [Limb],
    lhs: &[Limb],
    rhs: &[Limb],
    remainder: &mut [Limb],
) -> (usize, usize) {
    let lhs_len = lhs.len();
    let rhs_len = rhs.len();
    debug_assert!(rhs_len >= 2);
    debug_assert_ne!(rhs[rhs_len - 1], 0);
    debug_assert!(lhs_len >= rhs_len);

    // Normalize: shift the divisor left until its top bit is set and the
    // dividend by the same amount, with an unconditional extra high limb.
    // The double-width casts keep the edge shift (shift == 0) defined.
    let shift = LIMB_BITS - 1 - floor_log2(rhs[rhs_len - 1]);

    let mut rhs_norm_buf = LimbBuf::zeroed(rhs_len);
    let rhs_norm = rhs_norm_buf.as_mut_slice(rhs_len);
    for i in (1..rhs_len).rev() {
        rhs_norm[i] = (rhs[i] << shift) | ((rhs[i - 1] as DoubleLimb) >> (LIMB_BITS - shift)) as Limb;
    }
    rhs_norm[0] = rhs[0] << shift;
    debug_assert_ne!(rhs_norm[rhs_len - 1] >> (LIMB_BITS - 1), 0);

    let mut lhs_norm_buf = LimbBuf::zeroed(lhs_len + 1);
    let lhs_norm = lhs_norm_buf.as_mut_slice(lhs_len + 1);
    lhs_norm[lhs_len] = ((lhs[lhs_len - 1] as DoubleLimb) >> (LIMB_BITS - shift)) as Limb;
    for i in (1..lhs_len).rev() {
        lhs_norm[i] = (lhs[i] << shift) | ((lhs[i - 1] as DoubleLimb) >> (LIMB_BITS - shift)) as Limb;
    }
    lhs_norm[0] = lhs[0] << shift;

    for j in (0..=lhs_len - rhs_len).rev() {
        // Estimate the quotient digit from the top two dividend limbs;
        // normalization bounds the error at 2.
        let numerator = (lhs_norm[j + rhs_len] as DoubleLimb) * BASE
            + lhs_norm[j + rhs_len - 1] as DoubleLimb;
        let mut q_digit = numerator / rhs_norm[rhs_len - 1] as DoubleLimb;
        let mut r_digit = numerator % rhs_norm[rhs_len - 1] as DoubleLimb;

        // Three-limb refinement; once r_digit reaches the base, further
        // rounds cannot tighten the bound.
        while q_digit >= BASE
            || (q_digit as Limb as DoubleLimb) * rhs_norm[rhs_len - 2] as DoubleLimb
                > BASE * r_digit + lhs_norm[j + rhs_len - 2] as DoubleLimb
        {
            q_digit -= 1;
            r_digit += rhs_norm[rhs_len - 1] as DoubleLimb;
            if r_digit >= BASE {
                break;
            }
        }

        // Multiply and subtract; the running borrow is signed and may
        // legitimately go negative until the final correction.
        let mut borrow: SignedDoubleLimb = 0;
        let mut t: SignedDoubleLimb = 0;
        for i in 0..rhs_len {
            let product = (q_digit as Limb as DoubleLimb) * rhs_norm[i] as DoubleLimb;
            t = lhs_norm[i + j] as SignedDoubleLimb
                - borrow
                - (product & LIMB_MASK) as SignedDoubleLimb;
            lhs_norm[i + j] = t as Limb;
            borrow = (product >> LIMB_BITS) as SignedDoubleLimb - (t >> LIMB_BITS);
        }
        t = lhs_norm[j + rhs_len] as SignedDoubleLimb - borrow;
        lhs_norm[j + rhs_len] = t as Limb;

        if !IGNORE_QUOTIENT {
            quotient[j] = q_digit as Limb;
        }

        // The estimate overshot by one: add a divisor copy back.
        if t < 0 {
            if !IGNORE_QUOTIENT {
                quotient[j] = (q_digit as Limb).wrapping_sub(1);
            }
            let mut carry: DoubleLimb = 0;
            for i in 0..rhs_len {
                let sum = lhs_norm[i + j] as DoubleLimb + rhs_norm[i] as DoubleLimb + carry;
                lhs_norm[i + j] = sum as Limb;
                carry = sum >> LIMB_BITS;
            }
            lhs_norm[j + rhs_len] = lhs_norm[j + rhs_len].wrapping_add(carry as Limb);
        }
    }

    let remainder_len = if IGNORE_REMAINDER {
        0
    } else {
        // Denormalize what is left of the dividend window.
        for i in 0..rhs_len - 1 {
            remainder[i] = (lhs_norm[i] >> shift)
                | ((lhs_norm[i + 1] as DoubleLimb) << (LIMB_BITS - shift)) as Limb;
        }
        remainder[rhs_len - 1] = lhs_norm[rhs_len - 1] >> shift;
        trimmed_len(&remainder[..rhs_len])
    };

    let quotient_len = if IGNORE_QUOTIENT {
        0
    } else {
        trimmed_len(&quotient[..lhs_len - rhs_len + 1])
    };

    (quotient_len, remainder_len)
}
