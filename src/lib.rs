// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An arbitrary-precision signed integer
//!
//! `BigInt` stores a magnitude as a little-endian sequence of 32-bit
//! limbs together with a sign flag. The four standard operations are
//! implemented on raw limb slices in the [`arithmetic`] module:
//! carry-propagating addition and subtraction, Karatsuba-switched
//! multiplication, and Knuth Algorithm D long division. Decimal and
//! hexadecimal conversions live in [`radix`].
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers.
//!
//! # Example
//!
//! ```
//! use bigint::BigInt;
//! use std::str::FromStr;
//!
//! let a = BigInt::from_str("123456789123456789123456789").unwrap();
//! let b = BigInt::from_str("-987654321").unwrap();
//!
//! println!("a * b = {}", &a * &b);
//! assert_eq!((&a * &b) / b, a);
//! ```
//!
//! Storage for every magnitude is acquired through a process-wide
//! allocator hook, configurable once at startup with [`set_allocator`];
//! the default is the Rust global allocator.
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(unused_imports)]


extern crate num_integer;
pub extern crate num_traits;

#[cfg(test)]
extern crate paste;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::{self, Ordering};
use self::stdlib::convert::TryFrom;
use self::stdlib::default::Default;
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use self::stdlib::iter::Sum;
use self::stdlib::str::FromStr;
use self::stdlib::string::{String, ToString};
use self::stdlib::fmt;
use self::stdlib::Vec;

pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};


// const KARATSUBA_THRESHOLD: usize = ${RUST_BIGINT_KARATSUBA_THRESHOLD} or 30;
include!(concat!(env!("OUT_DIR"), "/karatsuba_threshold.rs"));

#[macro_use]
mod macros;

// limb type and single-limb primitives
pub mod limb;

// allocator hook and owned limb storage
mod mem;
pub use mem::{set_allocator, AllocFn, DeallocFn};

// "low level" magnitude routines
pub mod arithmetic;

// magnitude <-> text kernels
pub mod radix;

// construct BigInts from strings
mod parsing;

// From<T> impls
mod impl_convert;
mod impl_trait_from_str;

// Add, Sub, etc...
mod impl_ops;

// PartialEq, Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Implementations of std::fmt traits and stringification routines
mod impl_fmt;

// Implementations for deserializations and serializations
#[cfg(feature = "serde")]
pub mod impl_serde;

use limb::Limb;
use mem::LimbBuf;


/// An arbitrary-precision signed integer.
///
/// The magnitude is held in normal form: either a single limb, or a
/// sequence whose top limb is nonzero. Zero is unique and non-negative.
/// The default value aliases a shared static zero limb and owns no
/// allocation at all.
pub struct BigInt {
    digits: LimbBuf,
    len: usize,
    negative: bool,
}

impl BigInt {
    /// Assemble a value from owned storage, enforcing the sign invariant
    pub(crate) fn from_parts(digits: LimbBuf, len: usize, negative: bool) -> BigInt {
        debug_assert!(len >= 1);
        debug_assert!(len == 1 || digits.as_slice(len)[len - 1] != 0);

        let negative = negative && !(len == 1 && digits.as_slice(1)[0] == 0);
        BigInt {
            digits: digits,
            len: len,
            negative: negative,
        }
    }

    /// Construct a non-negative value from a little-endian limb slice.
    ///
    /// Extra trailing zero limbs are trimmed away; an empty slice is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let n = BigInt::from_limbs(&[0, 1]);
    /// assert_eq!(n.to_string(), "4294967296");
    /// ```
    pub fn from_limbs(digits: &[Limb]) -> BigInt {
        if digits.is_empty() {
            return BigInt::default();
        }
        let len = arithmetic::trimmed_len(digits);
        BigInt::from_parts(LimbBuf::copied_from(&digits[..len]), len, false)
    }

    /// The magnitude as a little-endian limb slice in normal form
    pub fn magnitude(&self) -> &[Limb] {
        self.digits.as_slice(self.len)
    }

    /// Creates and initializes a `BigInt`.
    ///
    /// Decodes using `str::from_utf8` and forwards to
    /// `BigInt::from_str_radix`. Only bases 10 and 16 are supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigint::{BigInt, Zero};
    ///
    /// assert_eq!(BigInt::parse_bytes(b"0", 10).unwrap(), BigInt::zero());
    /// assert_eq!(BigInt::parse_bytes(b"ff", 16).unwrap(), BigInt::from(255));
    /// ```
    #[inline]
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigInt> {
        stdlib::str::from_utf8(buf)
                    .ok()
                    .and_then(|s| BigInt::from_str_radix(s, radix).ok())
    }

    /// Render as decimal ASCII into `out`, a leading `-` included for
    /// negative values.
    ///
    /// Returns the number of characters the value requires, even when
    /// `out` is too short; the output is then silently truncated. Note
    /// that zero renders as no characters at this layer.
    pub fn to_base10(&self, out: &mut [u8]) -> usize {
        if self.negative {
            if !out.is_empty() {
                out[0] = b'-';
            }
            let start = out.len().min(1);
            radix::to_base10(&mut out[start..], self.magnitude()) + 1
        } else {
            radix::to_base10(out, self.magnitude())
        }
    }

    /// Render as lowercase hex ASCII into `out`, a leading `-` included
    /// for negative values.
    ///
    /// Returns the number of characters the value requires, even when
    /// `out` is too short; the output is then silently truncated.
    pub fn to_base16(&self, out: &mut [u8]) -> usize {
        if self.negative {
            if !out.is_empty() {
                out[0] = b'-';
            }
            let start = out.len().min(1);
            radix::to_base16(&mut out[start..], self.magnitude()) + 1
        } else {
            radix::to_base16(out, self.magnitude())
        }
    }

    /// The value as a string in the given radix (10 or 16 only).
    ///
    /// # Panics
    ///
    /// Panics on any other radix.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits_per_limb = match radix {
            // a limb is at most ten decimal characters
            10 => 10,
            16 => radix::BASE16_DIGITS_PER_LIMB,
            _ => panic!("radix must be 10 or 16"),
        };

        let mut buf = Vec::new();
        buf.resize(self.len * digits_per_limb + 1, 0u8);
        let len = match radix {
            10 => self.to_base10(&mut buf),
            _ => self.to_base16(&mut buf),
        };
        debug_assert!(len <= buf.len());
        buf.truncate(len);
        if buf.is_empty() {
            buf.push(b'0');
        }
        String::from_utf8(buf).expect("rendered digits are ASCII")
    }
}

impl Default for BigInt {
    /// The canonical zero; allocates nothing
    #[inline]
    fn default() -> BigInt {
        BigInt {
            digits: LimbBuf::shared_zero(),
            len: 1,
            negative: false,
        }
    }
}

impl Clone for BigInt {
    /// Copies into freshly allocated exact-size storage
    fn clone(&self) -> BigInt {
        BigInt {
            digits: LimbBuf::copied_from(self.magnitude()),
            len: self.len,
            negative: self.negative,
        }
    }
}


#[derive(Debug, PartialEq, Clone)]
pub enum ParseBigIntError {
    Empty,
    InvalidDigit,
    UnsupportedRadix(u32),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            Empty => "Failed to parse empty string".fmt(f),
            InvalidDigit => "Invalid digit found in string".fmt(f),
            UnsupportedRadix(radix) => write!(f, "Unsupported radix {}", radix),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigIntError {
    fn description(&self) -> &str {
        "failed to parse bigint"
    }
}
