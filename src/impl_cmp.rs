//! Implementation of comparison operations
//!
//! Values are ordered numerically: sign first, then magnitude, with the
//! magnitude comparison reversed between two negatives. The normal-form
//! representation is unique, so equality is plain slice equality plus
//! the sign flag.

use crate::arithmetic;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::hash::{Hash, Hasher};
use crate::BigInt;

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, rhs: &BigInt) -> bool {
        self.negative == rhs.negative && self.magnitude() == rhs.magnitude()
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Complete ordering implementation for BigInt
    ///
    /// # Example
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// let a = bigint::BigInt::from_str("-1").unwrap();
    /// let b = bigint::BigInt::from_str("1").unwrap();
    /// assert!(a < b);
    /// assert!(b > a);
    /// let c = bigint::BigInt::from_str("10").unwrap();
    /// assert!(c > b);
    /// ```
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => arithmetic::compare(self.magnitude(), other.magnitude()),
            (true, true) => arithmetic::compare(other.magnitude(), self.magnitude()),
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.magnitude().hash(state);
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::str::FromStr;

    mod ord {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal < $b:literal) => {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();

                    assert!(&a < &b);
                    assert!(&b > &a);
                    assert_ne!(a, b);
                }
            };
        }

        impl_test!(case_diff_signs: "-1" < "1");
        impl_test!(case_n1_0: "-1" < "0");
        impl_test!(case_0_1: "0" < "1");
        impl_test!(case_12_123: "12" < "123");
        impl_test!(case_longer_magnitude: "4294967295" < "4294967296");
        impl_test!(case_negatives_reverse: "-4294967296" < "-4294967295");
        impl_test!(case_big_negative: "-121932631112635269" < "-121932631112635268");
        impl_test!(case_1_2p128: "1" < "340282366920938463463374607431768211455");
    }

    mod eq {
        use super::*;

        macro_rules! impl_test {
            ($name:ident: $a:literal = $b:literal) => {
                #[test]
                fn $name() {
                    let a: BigInt = $a.parse().unwrap();
                    let b: BigInt = $b.parse().unwrap();

                    assert_eq!(&a, &b);
                    assert_eq!(a, b);
                }
            };
        }

        impl_test!(case_zero: "0" = "-0");
        impl_test!(case_1: "1" = "1");
        impl_test!(case_leading_zeros: "0001" = "1");
        impl_test!(case_n1: "-1" = "-1");
        impl_test!(case_big: "18446744073709551616" = "18446744073709551616");
    }

    #[test]
    fn test_hash_matches_eq() {
        use crate::stdlib::hash::{Hash, Hasher};

        fn hash_of(value: &BigInt) -> u64 {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = BigInt::from_str("987654321987654321").unwrap();
        let b = BigInt::from_str("987654321987654321").unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = BigInt::from_str("-987654321987654321").unwrap();
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn test_sort() {
        let mut values: Vec<BigInt> = ["4", "-4", "0", "18446744073709551616", "-1"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        values.sort();

        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, ["-4", "-1", "0", "4", "18446744073709551616"]);
    }
}
