//! # big_integer
//!
//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] stores its value as a little-endian sequence of 32-bit limbs
//! holding the two's-complement encoding of the number, implicitly extended
//! beyond the last stored limb by all-zero bits (non-negative values) or
//! all-one bits (negative values). This makes the bitwise operators and the
//! arithmetic shifts behave exactly like they do on the primitive signed
//! integers, for any magnitude.
//!
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "1000000000000000000000000000".parse()?;
//! assert_eq!(&a / 3, "333333333333333333333333333".parse::<BigInt>()?);
//!
//! let b = BigInt::from(-1234);
//! assert_eq!(b >> 3, -155);
//! # Ok::<(), big_integer::Error>(())
//! ```
//!
//! # Operators
//!
//! All of `+ - * / % & | ^ << >> ! -` and their compound-assignment forms are
//! implemented for owned and borrowed operands as well as for an `i64` on
//! either side; shifts take a `usize` bit count. Like the primitive integers, `/` and `%` panic
//! when the divisor is zero. The fallible forms [`BigInt::div_rem`],
//! [`BigInt::try_div`] and [`BigInt::try_rem`] report an [`Error`] instead.
//!
//! ```
//! use big_integer::BigInt;
//!
//! let a = BigInt::from(23);
//! assert_eq!(&a / -5, -4);
//! assert_eq!(&a % -5, 3);
//!
//! let err = a.try_div(&BigInt::from(0)).unwrap_err();
//! assert!(err.is_divide_by_zero());
//! ```
//!
//! # Decimal conversion
//!
//! [`BigInt`] implements [`FromStr`](core::str::FromStr) and
//! [`Display`](core::fmt::Display). Text is accepted in the form `-?[0-9]+`;
//! leading zeros are allowed, whitespace and a leading `+` are not.
//!
//! ```
//! use big_integer::BigInt;
//!
//! let n: BigInt = "-000120".parse()?;
//! assert_eq!(n.to_string(), "-120");
//! assert!("+5".parse::<BigInt>().is_err());
//! # Ok::<(), big_integer::Error>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`].
//! - `alloc`: builds without the standard library.
//! - `serde`: implements `Serialize` and `Deserialize` for [`BigInt`] using
//!   the decimal string form.

#![doc(html_root_url = "https://docs.rs/big_integer/0.1.0")]
// Ignored clippy lints
#![allow(
    // the carry loops read better with explicit indices
    clippy::needless_range_loop,
    // limb arithmetic truncates on purpose
    clippy::cast_possible_truncation,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_lossless,
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "big_integer requires that either `std` (default) or `alloc` feature is enabled"
}

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    pub(crate) use core::{cmp, fmt, iter, mem, ops, ptr, str};

    pub(crate) use alloc::string::String;
    pub(crate) use alloc::vec::Vec;
}

#[doc(inline)]
pub use crate::bigint::BigInt;
#[doc(inline)]
pub use crate::error::{Error, Result};

pub mod error;

mod bigint;
mod decimal;
mod division;
mod math;
mod ops;
#[cfg(feature = "serde")]
mod serde;
