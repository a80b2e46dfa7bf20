//! Decimal text conversion in blocks of nine digits.

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::fmt::{self, Debug, Display};
use crate::lib::str::FromStr;
use crate::lib::{String, Vec};
use crate::math::{small, Limb, POW10, POW10_BLOCK, POW10_BLOCK_DIGITS};

/// Parse `-?[0-9]+` into a big integer.
///
/// The whole input is validated before any arithmetic happens.
pub(crate) fn parse(bytes: &[u8]) -> Result<BigInt> {
    let (negative, digits) = match bytes.split_first() {
        None => return Err(Error::syntax(ErrorCode::EmptyString, 0)),
        Some((b'-', rest)) => (true, rest),
        Some(_) => (false, bytes),
    };
    if digits.is_empty() {
        return Err(Error::syntax(ErrorCode::MissingDigits, bytes.len()));
    }
    let start = bytes.len() - digits.len();
    if let Some(pos) = digits.iter().position(|c| !c.is_ascii_digit()) {
        return Err(Error::syntax(ErrorCode::InvalidDigit, start + pos));
    }

    // Every nine digits add a little under 30 bits.
    let mut magnitude: Vec<Limb> = Vec::with_capacity(digits.len() / POW10_BLOCK_DIGITS + 1);
    for block in digits.chunks(POW10_BLOCK_DIGITS) {
        let value = block
            .iter()
            .fold(0, |acc: Limb, &c| acc * 10 + (c - b'0') as Limb);
        small::imul(&mut magnitude, POW10[block.len()]);
        small::iadd(&mut magnitude, value);
    }
    Ok(BigInt::from_magnitude(magnitude, negative))
}

/// Render the digits of a magnitude, without sign.
fn magnitude_to_decimal(mut magnitude: Vec<Limb>) -> String {
    if magnitude.is_empty() {
        return String::from("0");
    }

    let mut groups: Vec<Limb> = Vec::new();
    while !magnitude.is_empty() {
        groups.push(small::idiv(&mut magnitude, POW10_BLOCK));
    }

    let mut out = String::with_capacity(groups.len() * POW10_BLOCK_DIGITS);
    let mut buffer = itoa::Buffer::new();
    let mut iter = groups.iter().rev();
    if let Some(&top) = iter.next() {
        out.push_str(buffer.format(top));
    }
    for &group in iter {
        let text = buffer.format(group);
        for _ in text.len()..POW10_BLOCK_DIGITS {
            out.push('0');
        }
        out.push_str(text);
    }
    out
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses `-?[0-9]+`. Leading zeros are accepted; whitespace, a leading
    /// `+` and any other character are not.
    fn from_str(s: &str) -> Result<BigInt> {
        parse(s.as_bytes())
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_to_decimal(self.magnitude().into_owned());
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn parse_block_boundary_test() {
        // Exactly one, two and three blocks.
        assert_eq!(parse(b"999999999").unwrap(), BigInt::from(999_999_999));
        assert_eq!(
            parse(b"999999999999999999").unwrap(),
            BigInt::from(999_999_999_999_999_999u64)
        );
        assert_eq!(
            parse(b"1000000000000000000").unwrap(),
            BigInt::from(1_000_000_000_000_000_000u64)
        );
        assert_eq!(parse(b"-4294967296").unwrap(), BigInt::from(-4294967296i64));
    }

    #[test]
    fn parse_error_test() {
        let err = parse(b"").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::EmptyString);

        let err = parse(b"-").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::MissingDigits);
        assert_eq!(err.index(), 1);

        let err = parse(b"+5").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit);
        assert_eq!(err.index(), 0);

        let err = parse(b"--5").unwrap_err();
        assert_eq!(err.index(), 1);

        let err = parse(b"12 3").unwrap_err();
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn print_padding_test() {
        assert_eq!(magnitude_to_decimal(Vec::new()), "0");
        assert_eq!(magnitude_to_decimal(alloc::vec![POW10_BLOCK]), "1000000000");
        // 10^18 + 7
        assert_eq!(
            magnitude_to_decimal(alloc::vec![0xA7640007, 0x0DE0B6B3]),
            "1000000000000000007"
        );
    }

    #[test]
    fn format_flags_test() {
        let x = BigInt::from(-42);
        assert_eq!(x.to_string(), "-42");
        assert_eq!(format!("{:>6}", x), "   -42");
        assert_eq!(format!("{:06}", x), "-00042");
        assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
        assert_eq!(format!("{:?}", x), "BigInt(-42)");
        assert_eq!(format!("{}", BigInt::zero()), "0");
    }
}
