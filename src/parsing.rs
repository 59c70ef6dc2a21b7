//! Routines for parsing strings into BigInts

use crate::{BigInt, ParseBigIntError};
use crate::mem::LimbBuf;
use crate::radix;

use num_integer::Integer;

/// Parse `[-]?[0-9]+` into a BigInt
pub(crate) fn parse_base10(text: &str) -> Result<BigInt, ParseBigIntError> {
    let (negative, digits) = split_sign(text)?;

    let capacity = Integer::div_ceil(&digits.len(), &radix::BASE10_CHUNK_DIGITS);
    let mut buf = LimbBuf::zeroed(capacity);
    let len = radix::from_base10(buf.as_mut_slice(capacity), digits.as_bytes())
        .ok_or(ParseBigIntError::InvalidDigit)?;

    Ok(BigInt::from_parts(buf, len, negative))
}

/// Parse `[-]?[0-9a-fA-F]+` into a BigInt
pub(crate) fn parse_base16(text: &str) -> Result<BigInt, ParseBigIntError> {
    let (negative, digits) = split_sign(text)?;

    let capacity = Integer::div_ceil(&digits.len(), &radix::BASE16_DIGITS_PER_LIMB);
    let mut buf = LimbBuf::zeroed(capacity);
    let len = radix::from_base16(buf.as_mut_slice(capacity), digits.as_bytes())
        .ok_or(ParseBigIntError::InvalidDigit)?;

    Ok(BigInt::from_parts(buf, len, negative))
}

/// Strip an optional leading `-`; no leading `+` and no whitespace are
/// tolerated, and nothing may remain empty.
fn split_sign(text: &str) -> Result<(bool, &str), ParseBigIntError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if digits.is_empty() {
        return Err(ParseBigIntError::Empty);
    }
    Ok((negative, digits))
}
