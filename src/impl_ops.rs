//! Implement math operations: Add, Sub, etc
//!
//! The sign of each result follows the classic rules: same-sign addition
//! keeps the operands' sign, mixed-sign addition takes the sign of the
//! larger magnitude, multiplication and division XOR the signs, and the
//! remainder takes the dividend's sign. Division truncates toward zero.
//!
//! All val/ref operand combinations forward to the ref-ref
//! implementation; results always go into freshly allocated storage
//! sized by the kernel capacity rules.

use crate::arithmetic;
use crate::mem::LimbBuf;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::iter::Sum;
use crate::stdlib::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use crate::BigInt;

use num_traits::Zero;

impl BigInt {
    /// Quotient and remainder in a single call.
    ///
    /// The quotient truncates toward zero and the remainder takes the
    /// sign of `self`, so `self == q * rhs + r` always holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-100).div_rem(&BigInt::from(7));
    /// assert_eq!(q, BigInt::from(-14));
    /// assert_eq!(r, BigInt::from(-2));
    /// ```
    pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
        (self / rhs, self % rhs)
    }
}

/// Signed addition of `lhs` and `±rhs`; subtraction passes the flipped
/// rhs sign.
fn add_signed(lhs: &BigInt, rhs: &BigInt, rhs_negative: bool) -> BigInt {
    if lhs.negative == rhs_negative {
        let capacity = lhs.len.max(rhs.len) + 1;
        let mut buf = LimbBuf::zeroed(capacity);
        let len = arithmetic::add(buf.as_mut_slice(capacity), lhs.magnitude(), rhs.magnitude());
        BigInt::from_parts(buf, len, lhs.negative)
    } else {
        match arithmetic::compare(lhs.magnitude(), rhs.magnitude()) {
            Ordering::Less => {
                let capacity = rhs.len;
                let mut buf = LimbBuf::zeroed(capacity);
                let len =
                    arithmetic::sub(buf.as_mut_slice(capacity), rhs.magnitude(), lhs.magnitude());
                BigInt::from_parts(buf, len, rhs_negative)
            }
            Ordering::Greater => {
                let capacity = lhs.len;
                let mut buf = LimbBuf::zeroed(capacity);
                let len =
                    arithmetic::sub(buf.as_mut_slice(capacity), lhs.magnitude(), rhs.magnitude());
                BigInt::from_parts(buf, len, lhs.negative)
            }
            // equal magnitudes of opposite sign cancel to zero
            Ordering::Equal => BigInt::zero(),
        }
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add_signed(self, rhs, rhs.negative)
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        add_signed(self, rhs, !rhs.negative)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let capacity = self.len + rhs.len;
        let mut buf = LimbBuf::zeroed(capacity);
        let len = arithmetic::mul(buf.as_mut_slice(capacity), self.magnitude(), rhs.magnitude());
        BigInt::from_parts(buf, len, self.negative != rhs.negative)
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics on division by zero.
    fn div(self, rhs: &BigInt) -> BigInt {
        let capacity = self.len;
        let mut buf = LimbBuf::zeroed(capacity);
        let len = arithmetic::div(buf.as_mut_slice(capacity), self.magnitude(), rhs.magnitude());
        BigInt::from_parts(buf, len, self.negative != rhs.negative)
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics on division by zero.
    fn rem(self, rhs: &BigInt) -> BigInt {
        let capacity = rhs.len;
        let mut buf = LimbBuf::zeroed(capacity);
        let len = arithmetic::rem(buf.as_mut_slice(capacity), self.magnitude(), rhs.magnitude());
        BigInt::from_parts(buf, len, self.negative)
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);
forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);
forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);
forward_all_binop_to_ref_ref!(impl Div for BigInt, div);
forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl<'a> AddAssign<&'a BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl<'a> DivAssign<&'a BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

impl<'a> RemAssign<&'a BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

forward_val_assignop!(impl AddAssign for BigInt, add_assign);
forward_val_assignop!(impl SubAssign for BigInt, sub_assign);
forward_val_assignop!(impl MulAssign for BigInt, mul_assign);
forward_val_assignop!(impl DivAssign for BigInt, div_assign);
forward_val_assignop!(impl RemAssign for BigInt, rem_assign);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.clone().neg()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}
