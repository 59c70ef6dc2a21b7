//! Code for num_traits

use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::limb::LIMB_BITS;
use crate::parsing;
use crate::BigInt;
use crate::ParseBigIntError;

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.len == 1 && self.magnitude()[0] == 0
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from(1u32)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a BigInt from an ASCII string.
    ///
    /// Only radix 10 and radix 16 are supported.
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        match radix {
            10 => parsing::parse_base10(s),
            16 => parsing::parse_base16(s),
            _ => Err(ParseBigIntError::UnsupportedRadix(radix)),
        }
    }
}

impl Signed for BigInt {
    fn abs(&self) -> BigInt {
        let mut result = self.clone();
        result.negative = false;
        result
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else if self.negative {
            -BigInt::one()
        } else {
            BigInt::one()
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl BigInt {
    /// The magnitude as a u128 when it fits
    fn magnitude_u128(&self) -> Option<u128> {
        let digits = self.magnitude();
        if digits.len() > 4 {
            return None;
        }
        let mut value: u128 = 0;
        for (i, &digit) in digits.iter().enumerate() {
            value |= (digit as u128) << (i as u32 * LIMB_BITS);
        }
        Some(value)
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| {
            if i64::MIN as i128 <= n && n <= i64::MAX as i128 {
                Some(n as i64)
            } else {
                None
            }
        })
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.negative {
            if magnitude <= 1u128 << 127 {
                Some((magnitude as i128).wrapping_neg())
            } else {
                None
            }
        } else if magnitude <= i128::MAX as u128 {
            Some(magnitude as i128)
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| {
            if n <= u64::MAX as u128 {
                Some(n as u64)
            } else {
                None
            }
        })
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        self.magnitude_u128()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}
