//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Everything in here works on magnitudes, plain unsigned limb buffers
//! without a sign. The two's-complement view is layered on top in
//! `bigint.rs`.

use crate::lib::{cmp, mem, Vec};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  numbers instead. The width is fixed rather than picked per target so
//  that the decimal block size below and the bit layout seen by the
//  bitwise operators are the same everywhere.
pub(crate) type Limb = u32;

// Double-width type for intermediate products and two-limb dividends.
pub(crate) type Wide = u64;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Largest power of 10 that fits a limb.
pub(crate) const POW10_BLOCK: Limb = 1_000_000_000;

/// Number of decimal digits in `POW10_BLOCK`.
pub(crate) const POW10_BLOCK_DIGITS: usize = 9;

/// Precalculated values of 10**i for i in range [0, POW10_BLOCK_DIGITS].
pub(crate) const POW10: [Limb; POW10_BLOCK_DIGITS + 1] = [
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
];

// SPLIT
// -----

/// Split u128 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u128(x: u128) -> [Limb; 4] {
    [x as Limb, (x >> 32) as Limb, (x >> 64) as Limb, (x >> 96) as Limb]
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
use super::*;

// ADDITION

/// Add two small integers and return the resulting value and if overflow happens.
#[inline]
pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_add(y)
}

/// AddAssign two small integers and return if overflow happens.
#[inline]
pub fn iadd(x: &mut Limb, y: Limb) -> bool {
    let t = add(*x, y);
    *x = t.0;
    t.1
}

// SUBTRACTION

/// Subtract two small integers and return the resulting value and if overflow happens.
#[inline]
pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_sub(y)
}

/// SubAssign two small integers and return if overflow happens.
#[inline]
pub fn isub(x: &mut Limb, y: Limb) -> bool {
    let t = sub(*x, y);
    *x = t.0;
    t.1
}

// MULTIPLICATION

/// Multiply two small integers and add two more (and return the overflow contribution).
///
/// Returns the (low, high) components.
#[inline]
pub fn mul_add(x: Limb, y: Limb, z: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow, since the following is always true:
    // `(2^32 - 1) * (2^32 - 1) + 2 * (2^32 - 1) == 2^64 - 1`
    let w: Wide = x as Wide * y as Wide + z as Wide + carry as Wide;
    (w as Limb, (w >> LIMB_BITS) as Limb)
}

/// Multiply two small integers (with carry) (and return the overflow contribution).
#[inline]
pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
    let t = mul_add(*x, y, 0, carry);
    *x = t.0;
    t.1
}

// DIVISION

/// Divide the two-limb value `hi:lo` by `y`.
///
/// Requires `hi < y` so the quotient fits a limb. Returns (quotient, remainder).
#[inline]
pub fn div(hi: Limb, lo: Limb, y: Limb) -> (Limb, Limb) {
    debug_assert!(hi < y);
    let w: Wide = ((hi as Wide) << LIMB_BITS) | lo as Wide;
    ((w / y as Wide) as Limb, (w % y as Wide) as Limb)
}

}   // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
use super::*;

// ADDITION

/// AddAssign small integer to bigint.
#[inline]
pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
    let mut carry = y;
    for xi in x.iter_mut() {
        if carry == 0 {
            return;
        }
        carry = scalar::iadd(xi, carry) as Limb;
    }

    // If we overflowed the buffer entirely, need to add the carry to the end
    // of the buffer.
    if carry != 0 {
        x.push(carry);
    }
}

// MULTIPLICATION

/// MulAssign small integer to bigint.
#[inline]
pub fn imul(x: &mut Vec<Limb>, y: Limb) {
    // Multiply iteratively over all elements, adding the carry each time.
    let mut carry: Limb = 0;
    for xi in x.iter_mut() {
        carry = scalar::imul(xi, y, carry);
    }

    // Overflow of value, add to end.
    if carry != 0 {
        x.push(carry);
    }
    normalize(x);
}

// DIVISION

/// DivAssign small integer to bigint, returning the remainder.
///
/// Walks from the most significant limb down, carrying the running
/// remainder into the next limb as the high half of a two-limb dividend.
#[inline]
pub fn idiv(x: &mut Vec<Limb>, y: Limb) -> Limb {
    debug_assert!(y != 0);
    let mut rem: Limb = 0;
    for xi in x.iter_mut().rev() {
        let (q, r) = scalar::div(rem, *xi, y);
        *xi = q;
        rem = r;
    }
    normalize(x);
    rem
}

// BIT LENGTH

/// Calculate the bit-length of the big-integer.
#[inline]
pub fn bit_length(x: &[Limb]) -> usize {
    match x.last() {
        None => 0,
        Some(&hi) => LIMB_BITS * x.len() - hi.leading_zeros() as usize,
    }
}

// NORMALIZE

/// Normalize the container by popping any leading zeros.
#[inline]
pub fn normalize(x: &mut Vec<Limb>) {
    while let Some(&0) = x.last() {
        x.pop();
    }
}

}   // small

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
use super::*;

// RELATIVE OPERATORS

/// Compare `x` to `y`, in little-endian order.
///
/// Both buffers must be normalized.
#[inline]
pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
    x.len().cmp(&y.len()).then_with(|| x.iter().rev().cmp(y.iter().rev()))
}

// MULTIPLICATION

/// Grade-school multiplication algorithm.
///
/// Every limb of `x` is multiplied against all of `y` and accumulated into
/// a single buffer sized for the full product, so the work is `O(n*m)`
/// with no intermediate allocation.
pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z: Vec<Limb> = alloc::vec![0; x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry: Limb = 0;
        for (k, &yk) in y.iter().enumerate() {
            let (lo, hi) = scalar::mul_add(xi, yk, z[i + k], carry);
            z[i + k] = lo;
            carry = hi;
        }
        z[i + y.len()] = carry;
    }

    small::normalize(&mut z);
    z
}

}   // large

// TESTS
// -----
