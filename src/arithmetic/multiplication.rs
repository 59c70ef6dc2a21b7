//!
//! Multiplication of limb magnitudes
//!
//! A dispatcher picks between three strategies: a widening product for
//! single-limb operands, schoolbook long multiplication, and recursive
//! Karatsuba splitting once both operands exceed `KARATSUBA_THRESHOLD`
//! limbs. Karatsuba scratch is allocated once at the top level and a
//! shrinking prefix is consumed at each recursion depth.
//!

use crate::arithmetic::{add, add_assign_slices, is_single_zero, sub_assign_slices, trimmed_len};
use crate::limb::{widening_mul, DoubleLimb, Limb, LIMB_BITS};
use crate::mem::{LimbBuf, SHARED_ZERO};
use crate::KARATSUBA_THRESHOLD;

/// Multiply two magnitudes into `result`, returning the used length.
///
/// `result` must hold at least `lhs.len() + rhs.len()` limbs.
pub fn mul(result: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) -> usize {
    debug_assert!(result.len() >= lhs.len() + rhs.len());

    if lhs.len() > KARATSUBA_THRESHOLD && rhs.len() > KARATSUBA_THRESHOLD {
        let scratch_len = 2 * (lhs.len() + rhs.len());
        let mut scratch = LimbBuf::zeroed(scratch_len);
        mul_with_scratch(result, lhs, rhs, scratch.as_mut_slice(scratch_len))
    } else {
        mul_with_scratch(result, lhs, rhs, &mut [])
    }
}

/// Dispatch on operand lengths; `scratch` is only consumed on the
/// Karatsuba path.
pub(crate) fn mul_with_scratch(
    result: &mut [Limb],
    lhs: &[Limb],
    rhs: &[Limb],
    scratch: &mut [Limb],
) -> usize {
    if is_single_zero(lhs) || is_single_zero(rhs) {
        result[0] = 0;
        return 1;
    }
    if lhs.len() == 1 && rhs.len() == 1 {
        let (low, high) = widening_mul(lhs[0], rhs[0]);
        result[0] = low;
        return if high == 0 {
            1
        } else {
            result[1] = high;
            2
        };
    }

    if lhs.len() > KARATSUBA_THRESHOLD && rhs.len() > KARATSUBA_THRESHOLD {
        karatsuba(result, lhs, rhs, scratch)
    } else {
        long_multiplication(result, lhs, rhs)
    }
}

/// Schoolbook multiplication, quadratic in the operand lengths
pub(crate) fn long_multiplication(result: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) -> usize {
    let size = lhs.len() + rhs.len();

    for cell in result[..size].iter_mut() {
        *cell = 0;
    }

    for (i, &l) in lhs.iter().enumerate() {
        let mut carry: Limb = 0;
        for (j, &r) in rhs.iter().enumerate() {
            let product = result[i + j] as DoubleLimb
                + carry as DoubleLimb
                + l as DoubleLimb * r as DoubleLimb;
            carry = (product >> LIMB_BITS) as Limb;
            result[i + j] = product as Limb;
        }
        result[i + rhs.len()] = carry;
    }

    if result[size - 1] == 0 {
        size - 1
    } else {
        size
    }
}

/// Karatsuba split-multiply.
///
/// Splits both operands at `m2 = max(lhs.len(), rhs.len()) / 2` and
/// combines three half-size products:
///
/// ```text
/// z0 = low1·low2          (into result[0..])
/// z2 = high1·high2        (into result[2·m2..])
/// z1 = (low1+high1)·(low2+high2) − z2 − z0   (in scratch)
/// result = z0 + z1·B^m2 + z2·B^(2·m2)
/// ```
///
/// The half sums are staged in the low cells of `result` and consumed by
/// the recursive `z1` multiplication before `z0` and `z2` overwrite
/// those cells; that ordering must not change.
pub(crate) fn karatsuba(
    result: &mut [Limb],
    lhs: &[Limb],
    rhs: &[Limb],
    scratch: &mut [Limb],
) -> usize {
    let m = lhs.len().max(rhs.len());
    let m2 = m / 2;

    // Low halves are sliced out of the operands and may need trimming;
    // a missing high half is a single shared zero limb.
    let low1 = &lhs[..trimmed_len(&lhs[..m2.min(lhs.len())])];
    let low2 = &rhs[..trimmed_len(&rhs[..m2.min(rhs.len())])];
    let high1: &[Limb] = if lhs.len() > m2 { &lhs[m2..] } else { &SHARED_ZERO };
    let high2: &[Limb] = if rhs.len() > m2 { &rhs[m2..] } else { &SHARED_ZERO };

    let (s1_buf, s2_buf) = result.split_at_mut(m2 + 2);
    let s1_len = add(s1_buf, low1, high1);
    debug_assert!(s1_len <= m2 + 2);
    let s2_len = add(s2_buf, low2, high2);
    debug_assert!(m2 + 2 + s2_len <= lhs.len() + rhs.len());

    let (z1_buf, deeper) = scratch.split_at_mut(s1_len + s2_len);
    let mut z1_len = mul_with_scratch(
        z1_buf,
        &result[..s1_len],
        &result[m2 + 2..m2 + 2 + s2_len],
        deeper,
    );

    // The sums are dead now; z0 and z2 land in disjoint regions of result.
    let (z0_buf, z2_buf) = result.split_at_mut(2 * m2);
    let z0_len = mul_with_scratch(z0_buf, low1, low2, deeper);
    debug_assert!(z0_len <= 2 * m2);
    let z2_len = mul_with_scratch(z2_buf, high1, high2, deeper);

    z1_len = sub_assign_slices(z1_buf, z1_len, &z2_buf[..z2_len]);
    z1_len = sub_assign_slices(z1_buf, z1_len, &z0_buf[..z0_len]);

    let mut result_len = z0_len;
    if !is_single_zero(&z2_buf[..z2_len]) {
        result_len = 2 * m2 + z2_len;
        // the gap between z0 and z2 holds stale sum cells
        for cell in z0_buf[z0_len..].iter_mut() {
            *cell = 0;
        }
    }
    debug_assert!(result_len <= lhs.len() + rhs.len());

    if !is_single_zero(&z1_buf[..z1_len]) {
        if result_len < m2 {
            for cell in result[result_len..m2].iter_mut() {
                *cell = 0;
            }
            result_len = m2;
        }
        result_len = add_assign_slices(&mut result[m2..], result_len - m2, &z1_buf[..z1_len]) + m2;
    }

    result_len
}


#[cfg(test)]
mod test_mul {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($a:literal),*] * [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let a: &[Limb] = &[$($a),*];
                let b: &[Limb] = &[$($b),*];
                let expected: &[Limb] = &[$($c),*];
                let mut result = [0 as Limb; 16];

                let n = mul(&mut result, a, b);
                assert_eq!(&result[..n], expected);

                // multiplication commutes
                let n = mul(&mut result, b, a);
                assert_eq!(&result[..n], expected);
            }
        };
    }

    impl_case!(case_0_0: [0] * [0] == [0]);
    impl_case!(case_zero_annihilates: [0] * [1, 2, 3] == [0]);
    impl_case!(case_1_1: [1] * [1] == [1]);
    impl_case!(case_single_no_overflow: [2] * [3] == [6]);
    impl_case!(case_single_overflow: [0x10000] * [0x10000] == [0, 1]);
    impl_case!(case_max_max: [0xffffffff] * [0xffffffff] == [1, 0xfffffffe]);
    impl_case!(case_shift_by_limb: [0, 1] * [0, 1] == [0, 0, 1]);
    impl_case!(case_3x2: [0x1, 0x1, 0x1] * [0xffffffff, 0xffffffff]
        == [0xffffffff, 0xfffffffe, 0xffffffff, 0x0, 0x1]);
    impl_case!(case_trims_top: [2, 1] * [2] == [4, 2]);

    fn random_digits(rng: &mut oorandom::Rand32, len: usize) -> Vec<Limb> {
        let mut digits: Vec<Limb> = (0..len).map(|_| rng.rand_u32()).collect();
        if *digits.last().unwrap() == 0 {
            *digits.last_mut().unwrap() = 1;
        }
        digits
    }

    /// Force the Karatsuba path and compare against schoolbook on the
    /// same inputs, across the threshold crossover lengths.
    #[test]
    fn test_karatsuba_matches_long_multiplication_at_crossover() {
        let mut rng = oorandom::Rand32::new(0x6B61_7261);

        for &len in [
            KARATSUBA_THRESHOLD,
            KARATSUBA_THRESHOLD + 1,
            KARATSUBA_THRESHOLD + 2,
        ]
        .iter()
        {
            let a = random_digits(&mut rng, len);
            let b = random_digits(&mut rng, len);

            let mut expected = vec![0 as Limb; 2 * len];
            let expected_len = long_multiplication(&mut expected, &a, &b);

            let mut result = vec![0 as Limb; 2 * len];
            let mut scratch = vec![0 as Limb; 4 * len];
            let result_len = karatsuba(&mut result, &a, &b, &mut scratch);

            assert_eq!(&result[..result_len], &expected[..expected_len]);
        }
    }

    #[test]
    fn test_karatsuba_matches_long_multiplication_200_limbs() {
        let mut rng = oorandom::Rand32::new(0xC0FF_EE00);

        let a = random_digits(&mut rng, 200);
        let b = random_digits(&mut rng, 200);

        let mut expected = vec![0 as Limb; 400];
        let expected_len = long_multiplication(&mut expected, &a, &b);

        // the dispatcher picks karatsuba for 200-limb operands
        let mut result = vec![0 as Limb; 400];
        let result_len = mul(&mut result, &a, &b);

        assert_eq!(result_len, expected_len);
        assert_eq!(&result[..result_len], &expected[..expected_len]);
    }

    #[test]
    fn test_karatsuba_uneven_lengths() {
        let mut rng = oorandom::Rand32::new(0x12EE_7A5E);

        let a = random_digits(&mut rng, KARATSUBA_THRESHOLD + 1);
        let b = random_digits(&mut rng, 3 * KARATSUBA_THRESHOLD);

        let total = a.len() + b.len();
        let mut expected = vec![0 as Limb; total];
        let expected_len = long_multiplication(&mut expected, &a, &b);

        let mut result = vec![0 as Limb; total];
        let result_len = mul(&mut result, &a, &b);

        assert_eq!(&result[..result_len], &expected[..expected_len]);
    }

    #[test]
    fn test_karatsuba_zero_low_half() {
        // one operand shorter than the split point, the other with an
        // all-zero low half, so z0 and z2 both collapse
        let mut a = vec![0 as Limb; 3 * KARATSUBA_THRESHOLD];
        for cell in a.iter_mut().skip(2 * KARATSUBA_THRESHOLD) {
            *cell = 0xdecafbad;
        }
        let mut b = vec![0 as Limb; KARATSUBA_THRESHOLD + 1];
        *b.last_mut().unwrap() = 7;

        let total = a.len() + b.len();
        let mut expected = vec![0 as Limb; total];
        let expected_len = long_multiplication(&mut expected, &a, &b);

        let mut result = vec![0 as Limb; total];
        let result_len = mul(&mut result, &a, &b);

        assert_eq!(&result[..result_len], &expected[..expected_len]);
    }
}
