//! Code for implementing From<primitive> for BigInt

use crate::limb::{Limb, LIMB_BITS};
use crate::mem::LimbBuf;
use crate::BigInt;

/// Build a value from a u128 magnitude and an explicit sign
fn from_u128_magnitude(n: u128, negative: bool) -> BigInt {
    if n == 0 {
        return BigInt::default();
    }

    let mut limbs = [0 as Limb; 4];
    let mut len = 0;
    let mut n = n;
    while n > 0 {
        limbs[len] = n as Limb;
        n >>= LIMB_BITS;
        len += 1;
    }
    BigInt::from_parts(LimbBuf::copied_from(&limbs[..len]), len, negative)
}

macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                from_u128_magnitude(n as u128, false)
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                from_u128_magnitude(n.unsigned_abs() as u128, n < 0)
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);
impl_from_int_primitive!(isize);


#[cfg(test)]
mod test {
    use super::*;
    use num_traits::{Signed, Zero};
    use paste::paste;

    macro_rules! impl_case {
        ( $( $ttype:ident ),+ : $input:literal == $expected:literal) => {
            $( paste! {
                #[test]
                fn [< case_ $input _ $ttype:lower >]() {
                    let value = BigInt::from($input as $ttype);
                    assert_eq!(value.to_string(), $expected);
                    assert_eq!(BigInt::from(&($input as $ttype)), value);
                }
            } )*
        };
    }

    impl_case!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize : 0 == "0");
    impl_case!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize : 1 == "1");
    impl_case!(u8, i16, i64 : 127 == "127");
    impl_case!(u32, u64, i64 : 4294967295u32 == "4294967295");
    impl_case!(u64, u128 : 18446744073709551615u64 == "18446744073709551615");

    #[test]
    fn test_from_zero_allocates_nothing() {
        let zero = BigInt::from(0u64);
        assert!(zero.is_zero());
        assert_eq!(zero.magnitude(), &[0]);
    }

    #[test]
    fn test_from_negative() {
        let value = BigInt::from(-123456789012345678i64);
        assert!(value.is_negative());
        assert_eq!(value.to_string(), "-123456789012345678");
    }

    #[test]
    fn test_from_i64_min() {
        let value = BigInt::from(i64::MIN);
        assert_eq!(value.to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_from_i128_min() {
        let value = BigInt::from(i128::MIN);
        assert_eq!(value.to_string(), "-170141183460469231731687303715884105728");
    }

    #[test]
    fn test_from_u128_max() {
        let value = BigInt::from(u128::MAX);
        assert_eq!(value.magnitude(), &[u32::MAX; 4]);
    }
}
