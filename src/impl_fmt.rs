//! Implementation of std::fmt traits
//!

use crate::radix;
use crate::stdlib::fmt;
use crate::stdlib::str;
use crate::stdlib::Vec;
use crate::BigInt;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // a limb is at most ten decimal characters
        let mut digits = Vec::new();
        digits.resize(self.len * 10, 0u8);
        let count = radix::to_base10(&mut digits, self.magnitude());
        digits.truncate(count);
        if digits.is_empty() {
            digits.push(b'0');
        }

        let repr = str::from_utf8(&digits).expect("rendered digits are ASCII");
        f.pad_integral(!self.negative, "", repr)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = Vec::new();
        digits.resize(self.len * radix::BASE16_DIGITS_PER_LIMB, 0u8);
        let count = radix::to_base16(&mut digits, self.magnitude());
        digits.truncate(count);

        let repr = str::from_utf8(&digits).expect("rendered digits are ASCII");
        f.pad_integral(!self.negative, "0x", repr)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = Vec::new();
        digits.resize(self.len * radix::BASE16_DIGITS_PER_LIMB, 0u8);
        let count = radix::to_base16(&mut digits, self.magnitude());
        digits.truncate(count);
        digits.make_ascii_uppercase();

        let repr = str::from_utf8(&digits).expect("rendered digits are ASCII");
        f.pad_integral(!self.negative, "0x", repr)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "BigInt(\"{}\")", self)
        } else {
            write!(
                f,
                "BigInt(sign={}, limbs={:?})",
                if self.negative { '-' } else { '+' },
                self.magnitude(),
            )
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::str::FromStr;
    use crate::stdlib::string::ToString;

    mod fmt_display {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let value = BigInt::from_str($input).unwrap();
                    assert_eq!(format!("{}", value), $expected);
                }
            };
        }

        impl_case!(case_zero: "0" => "0");
        impl_case!(case_neg_zero: "-0" => "0");
        impl_case!(case_42: "42" => "42");
        impl_case!(case_n42: "-42" => "-42");
        impl_case!(case_leading_zeros_dropped: "00099" => "99");
        impl_case!(case_multi_limb: "18446744073709551616" => "18446744073709551616");
        impl_case!(case_n_multi_limb: "-340282366920938463463374607431768211455"
            => "-340282366920938463463374607431768211455");

        #[test]
        fn test_width_and_sign() {
            let value = BigInt::from(42u32);
            assert_eq!(format!("{:8}", value), "      42");
            assert_eq!(format!("{:+}", value), "+42");
            assert_eq!(format!("{:08}", BigInt::from(-42)), "-0000042");
        }
    }

    mod fmt_hex {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => $lower:literal, $upper:literal) => {
                #[test]
                fn $name() {
                    let value = BigInt::from_str_radix($input, 16).unwrap();
                    assert_eq!(format!("{:x}", value), $lower);
                    assert_eq!(format!("{:X}", value), $upper);
                }
            };
        }

        use num_traits::Num;

        impl_case!(case_zero: "0" => "0", "0");
        impl_case!(case_beef: "BeEf" => "beef", "BEEF");
        impl_case!(case_negative: "-ff00000001" => "-ff00000001", "-FF00000001");
        impl_case!(case_limb_boundary: "ffffffffffffffff" =>
            "ffffffffffffffff", "FFFFFFFFFFFFFFFF");

        #[test]
        fn test_alternate_prefix() {
            let value = BigInt::from(255u32);
            assert_eq!(format!("{:#x}", value), "0xff");
            assert_eq!(format!("{:#X}", value), "0xFF");
        }
    }

    #[test]
    fn test_debug() {
        let value = BigInt::from_str("-4294967296").unwrap();
        assert_eq!(format!("{:?}", value), "BigInt(sign=-, limbs=[0, 1])");
        assert_eq!(format!("{:#?}", value), "BigInt(\"-4294967296\")");
    }

    #[test]
    fn test_to_string() {
        let value = BigInt::from_str("123456789987654321").unwrap();
        assert_eq!(value.to_string(), "123456789987654321");
    }

    #[test]
    fn test_to_str_radix() {
        let value = BigInt::from_str("-255").unwrap();
        assert_eq!(value.to_str_radix(10), "-255");
        assert_eq!(value.to_str_radix(16), "-ff");
        assert_eq!(BigInt::default().to_str_radix(10), "0");
        assert_eq!(BigInt::default().to_str_radix(16), "0");
    }
}
