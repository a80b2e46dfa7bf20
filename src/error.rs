//! When parsing or dividing a big integer goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use alloc::boxed::Box;
use core::result;

/// This type represents all possible errors that can occur when constructing
/// a [`BigInt`](crate::BigInt) from text or dividing one.
pub struct Error {
    /// This `Box` keeps the size of `Error` to a single pointer, so that
    /// `Result<BigInt>` stays small.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `big_integer::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the parsed text at which the error was
    /// detected.
    ///
    /// Errors that are not tied to a position in some text, such as division
    /// by zero or an empty input, report index 0.
    pub fn index(&self) -> usize {
        self.err.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::InvalidFormat` - text that is not a decimal integer
    /// - `Category::DivideByZero` - division or remainder by zero
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::EmptyString | ErrorCode::MissingDigits | ErrorCode::InvalidDigit => {
                Category::InvalidFormat
            }
            ErrorCode::DivideByZero => Category::DivideByZero,
        }
    }

    /// Returns true if this error was caused by text that is not a valid
    /// decimal integer.
    pub fn is_invalid_format(&self) -> bool {
        self.classify() == Category::InvalidFormat
    }

    /// Returns true if this error was caused by a zero divisor.
    pub fn is_divide_by_zero(&self) -> bool {
        self.classify() == Category::DivideByZero
    }
}

/// Categorizes the cause of a `big_integer::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The input text was empty, was a lone sign, or contained a character
    /// other than an ASCII digit after the optional leading `-`.
    InvalidFormat,

    /// A division or remainder was attempted with a zero divisor.
    DivideByZero,
}

struct ErrorImpl {
    code: ErrorCode,
    index: usize,
}

/// This type describes all possible errors that can occur when parsing or
/// dividing big integers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// The input text was empty.
    EmptyString,

    /// The input text was a `-` sign without any digits.
    MissingDigits,

    /// The input text contained a character that is not an ASCII digit.
    InvalidDigit,

    /// Attempted to divide by zero.
    DivideByZero,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, index: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, index }),
        }
    }

    #[cold]
    pub(crate) fn divide_by_zero() -> Self {
        Error::syntax(ErrorCode::DivideByZero, 0)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyString => f.write_str("cannot parse integer from empty string"),
            ErrorCode::MissingDigits => f.write_str("sign without digits"),
            ErrorCode::InvalidDigit => f.write_str("invalid digit found in string"),
            ErrorCode::DivideByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::InvalidDigit => write!(f, "{} at index {}", self.code, self.index),
            _ => Display::fmt(&self.code, f),
        }
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, index: {})", self.err.code, self.err.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn classify_test() {
        let err = Error::syntax(ErrorCode::InvalidDigit, 3);
        assert_eq!(err.classify(), Category::InvalidFormat);
        assert!(err.is_invalid_format());
        assert!(!err.is_divide_by_zero());
        assert_eq!(err.index(), 3);

        let err = Error::divide_by_zero();
        assert_eq!(err.classify(), Category::DivideByZero);
        assert_eq!(*err.code(), ErrorCode::DivideByZero);
    }

    #[test]
    fn display_test() {
        let err = Error::syntax(ErrorCode::InvalidDigit, 4);
        assert_eq!(err.to_string(), "invalid digit found in string at index 4");
        assert_eq!(format!("{:?}", err), "Error(InvalidDigit, index: 4)");

        let err = Error::syntax(ErrorCode::MissingDigits, 0);
        assert_eq!(err.to_string(), "sign without digits");
    }
}
