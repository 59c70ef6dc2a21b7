use crate::stdlib::str::FromStr;
use crate::{BigInt, ParseBigIntError};

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        // implemented in parsing.rs
        crate::parsing::parse_base10(s)
    }
}
