//!
//! Addition of limb magnitudes
//!

use crate::limb::{carrying_add, Limb};

/// Add two magnitudes into `result`, returning the used length.
///
/// `result` must hold at least `max(lhs.len(), rhs.len()) + 1` limbs.
pub fn add(result: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) -> usize {
    // lhs is the longer of the operands
    let (lhs, rhs) = if lhs.len() >= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };
    debug_assert!(result.len() > lhs.len());

    let mut carry = false;
    for i in 0..rhs.len() {
        let (digit, c) = carrying_add(lhs[i], rhs[i], carry);
        result[i] = digit;
        carry = c;
    }
    for i in rhs.len()..lhs.len() {
        let (digit, c) = carrying_add(lhs[i], 0, carry);
        result[i] = digit;
        carry = c;
    }
    if carry {
        result[lhs.len()] = 1;
        lhs.len() + 1
    } else {
        lhs.len()
    }
}

/// Add `rhs` into the first `acc_len` limbs of `acc` in place, returning
/// the new length.
///
/// Cells of `acc` past `acc_len` are treated as writable scratch; the
/// buffer must be able to absorb a final carry limb if one occurs.
pub fn add_assign_slices(acc: &mut [Limb], acc_len: usize, rhs: &[Limb]) -> usize {
    let common = acc_len.min(rhs.len());

    let mut carry = false;
    for i in 0..common {
        let (digit, c) = carrying_add(acc[i], rhs[i], carry);
        acc[i] = digit;
        carry = c;
    }
    for i in common..acc_len {
        if !carry {
            break;
        }
        let (digit, c) = carrying_add(acc[i], 0, carry);
        acc[i] = digit;
        carry = c;
    }
    for i in common..rhs.len() {
        let (digit, c) = carrying_add(rhs[i], 0, carry);
        acc[i] = digit;
        carry = c;
    }

    let mut len = acc_len.max(rhs.len());
    if carry {
        acc[len] = 1;
        len += 1;
    }
    len
}
