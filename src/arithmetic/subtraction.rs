//!
//! Subtraction of limb magnitudes
//!

use crate::arithmetic::trimmed_len;
use crate::limb::{borrowing_sub, Limb};

/// Subtract `rhs` from `lhs` into `result`, returning the used length.
///
/// Requires `lhs >= rhs`; a violation is a caller error and leaves the
/// borrow unresolved (asserted in debug builds). `result` must hold at
/// least `lhs.len()` limbs. The result is trimmed to normal form, which
/// may be shorter than `lhs` after cancellation.
pub fn sub(result: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) -> usize {
    debug_assert!(lhs.len() >= rhs.len());
    debug_assert!(result.len() >= lhs.len());

    let mut borrow = false;
    for i in 0..rhs.len() {
        let (digit, b) = borrowing_sub(lhs[i], rhs[i], borrow);
        result[i] = digit;
        borrow = b;
    }
    for i in rhs.len()..lhs.len() {
        let (digit, b) = borrowing_sub(lhs[i], 0, borrow);
        result[i] = digit;
        borrow = b;
    }
    debug_assert!(!borrow, "subtraction underflow: lhs < rhs");

    trimmed_len(&result[..lhs.len()])
}

/// Subtract `rhs` from the first `acc_len` limbs of `acc` in place,
/// returning the new length.
///
/// Same contract as [`sub`] with `acc` as both minuend and output.
pub fn sub_assign_slices(acc: &mut [Limb], acc_len: usize, rhs: &[Limb]) -> usize {
    debug_assert!(acc_len >= rhs.len());

    let mut borrow = false;
    for i in 0..rhs.len() {
        let (digit, b) = borrowing_sub(acc[i], rhs[i], borrow);
        acc[i] = digit;
        borrow = b;
    }
    for i in rhs.len()..acc_len {
        if !borrow {
            break;
        }
        let (digit, b) = borrowing_sub(acc[i], 0, borrow);
        acc[i] = digit;
        borrow = b;
    }
    debug_assert!(!borrow, "subtraction underflow: acc < rhs");

    trimmed_len(&acc[..acc_len])
}
