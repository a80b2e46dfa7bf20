//! The `BigInt` value type and its two's-complement limb store.

use crate::lib::cmp::{self, Ordering};
use crate::lib::iter::{Product, Sum};
use crate::lib::Vec;
use crate::math::{large, scalar, small, split_u128, Limb, LIMB_BITS};
use alloc::borrow::Cow;

/// An integer of unbounded magnitude.
///
/// The value is kept as little-endian 32-bit limbs in two's complement,
/// sign-extended past the last stored limb by the *complement word*: all
/// zeros for non-negative values and all ones for negative ones. A `BigInt`
/// therefore behaves under `& | ^ ! << >>` the way `i32` or `i128` would,
/// only without a fixed width.
///
/// ```
/// use big_integer::BigInt;
///
/// let x = BigInt::from(-6);
/// assert_eq!(!&x, 5);
/// assert_eq!(&x & 0xff, 0xfa);
/// assert_eq!(x.to_string(), "-6");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Limbs in little-endian order. Never ends in the complement word,
    /// except that `-1` keeps a single all-ones limb.
    pub(crate) data: Vec<Limb>,
    /// Sign of the value, which also selects the complement word.
    pub(crate) negative: bool,
}

#[inline]
fn complement_of(negative: bool) -> Limb {
    if negative {
        Limb::MAX
    } else {
        0
    }
}

impl BigInt {
    /// The value `0`.
    #[inline]
    pub const fn zero() -> BigInt {
        BigInt {
            data: Vec::new(),
            negative: false,
        }
    }

    /// The value `1`.
    #[inline]
    pub fn one() -> BigInt {
        BigInt {
            data: alloc::vec![1],
            negative: false,
        }
    }

    /// The limb that every stored limb is sign-extended with.
    #[inline]
    pub(crate) fn complement(&self) -> Limb {
        complement_of(self.negative)
    }

    /// Limb `i`, reading past the stored limbs as the complement word.
    #[inline]
    pub(crate) fn limb(&self, i: usize) -> Limb {
        match self.data.get(i) {
            Some(&x) => x,
            None => self.complement(),
        }
    }

    /// Drop trailing limbs that only repeat the complement word.
    pub(crate) fn normalize(&mut self) {
        let complement = self.complement();
        while self.data.last() == Some(&complement) {
            self.data.pop();
        }
        if self.negative && self.data.is_empty() {
            self.data.push(complement);
        }
    }

    /// Build a value from an unsigned magnitude and a sign.
    pub(crate) fn from_magnitude(magnitude: Vec<Limb>, negative: bool) -> BigInt {
        let mut value = BigInt {
            data: magnitude,
            negative: false,
        };
        value.normalize();
        if negative {
            value.negate_in_place();
        }
        value
    }

    /// The absolute value as unsigned limbs, without trailing zeros.
    pub(crate) fn magnitude(&self) -> Cow<'_, [Limb]> {
        if self.negative {
            let mut abs = self.clone();
            abs.negate_in_place();
            Cow::Owned(abs.data)
        } else {
            Cow::Borrowed(&self.data)
        }
    }

    pub(crate) fn from_u128(magnitude: u128, negative: bool) -> BigInt {
        let mut data = split_u128(magnitude).to_vec();
        small::normalize(&mut data);
        BigInt::from_magnitude(data, negative)
    }

    // ARITHMETIC

    /// Add `f(rhs) + carry` into `self`, limb by limb.
    ///
    /// Limbs missing from either side read as that side's complement word.
    /// One extra limb, the sum of both complement words and the final carry,
    /// is pushed at the top; its high bit is the sign of the result.
    pub(crate) fn add_with<F>(&mut self, rhs: &[Limb], rhs_negative: bool, carry: Limb, f: F)
    where
        F: Fn(Limb) -> Limb,
    {
        let complement = self.complement();
        let rhs_complement = complement_of(rhs_negative);
        let len = cmp::max(self.data.len(), rhs.len());
        self.data.resize(len, complement);

        let mut carry = carry;
        for (i, xi) in self.data.iter_mut().enumerate() {
            let yi = f(match rhs.get(i) {
                Some(&y) => y,
                None => rhs_complement,
            });
            let mut c = scalar::iadd(xi, yi);
            c |= scalar::iadd(xi, carry);
            carry = c as Limb;
        }

        let top = complement
            .wrapping_add(f(rhs_complement))
            .wrapping_add(carry);
        self.data.push(top);
        self.negative = top >> (LIMB_BITS - 1) != 0;
        self.normalize();
    }

    pub(crate) fn add_assign_ref(&mut self, rhs: &BigInt) {
        self.add_with(&rhs.data, rhs.negative, 0, |x| x);
    }

    pub(crate) fn sub_assign_ref(&mut self, rhs: &BigInt) {
        self.add_with(&rhs.data, rhs.negative, 1, |x| !x);
    }

    pub(crate) fn mul_assign_ref(&mut self, rhs: &BigInt) {
        let negative = self.negative ^ rhs.negative;
        let product = large::mul(&self.magnitude(), &rhs.magnitude());
        *self = BigInt::from_magnitude(product, negative);
    }

    /// Replace the value with its bitwise complement, `-x - 1`.
    pub(crate) fn not_in_place(&mut self) {
        for xi in &mut self.data {
            *xi = !*xi;
        }
        self.negative = !self.negative;
        self.normalize();
    }

    pub(crate) fn negate_in_place(&mut self) {
        self.not_in_place();
        self.add_with(&[], false, 1, |x| x);
    }

    /// Add one to the value in place.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// let mut x = BigInt::from(u64::MAX);
    /// x.inc().inc();
    /// assert_eq!(x, BigInt::from(u64::MAX as u128 + 2));
    /// ```
    pub fn inc(&mut self) -> &mut Self {
        self.add_with(&[], false, 1, |x| x);
        self
    }

    /// Subtract one from the value in place.
    pub fn dec(&mut self) -> &mut Self {
        self.add_with(&[], true, 0, |x| x);
        self
    }

    /// Add one to the value in place and return the value it had before.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// Subtract one from the value in place and return the value it had
    /// before.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }

    // BITWISE

    /// Combine `self` and `rhs` limb by limb with `f`, reading limbs past
    /// either end as that side's complement word.
    pub(crate) fn bitwise<F>(&mut self, rhs: &BigInt, f: F)
    where
        F: Fn(Limb, Limb) -> Limb,
    {
        let complement = self.complement();
        let len = cmp::max(self.data.len(), rhs.data.len());
        self.data.resize(len, complement);
        for (i, xi) in self.data.iter_mut().enumerate() {
            *xi = f(*xi, rhs.limb(i));
        }
        self.negative = f(complement, rhs.complement()) != 0;
        self.normalize();
    }

    pub(crate) fn shl_in_place(&mut self, n: usize) {
        if n == 0 || self.data.is_empty() {
            return;
        }
        let offset = n / LIMB_BITS;
        let rem = n % LIMB_BITS;
        let complement = self.complement();

        let mut data: Vec<Limb> = Vec::with_capacity(self.data.len() + offset + 1);
        data.resize(offset, 0);
        if rem == 0 {
            data.extend_from_slice(&self.data);
        } else {
            let rshift = LIMB_BITS - rem;
            let mut prev: Limb = 0;
            for &xi in &self.data {
                data.push((xi << rem) | (prev >> rshift));
                prev = xi;
            }
            data.push((complement << rem) | (prev >> rshift));
        }
        self.data = data;
        self.normalize();
    }

    pub(crate) fn shr_in_place(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let offset = n / LIMB_BITS;
        if offset >= self.data.len() {
            // Every stored bit is shifted out; only the sign remains.
            self.data.clear();
            self.normalize();
            return;
        }
        let rem = n % LIMB_BITS;
        let complement = self.complement();

        let src = &self.data[offset..];
        let data: Vec<Limb> = if rem == 0 {
            src.to_vec()
        } else {
            let lshift = LIMB_BITS - rem;
            src.iter()
                .enumerate()
                .map(|(i, &xi)| {
                    let next = match src.get(i + 1) {
                        Some(&y) => y,
                        None => complement,
                    };
                    (xi >> rem) | (next << lshift)
                })
                .collect()
        };
        self.data = data;
        self.normalize();
    }

    // QUERIES

    /// Returns true if the value is `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the value is less than `0`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is greater than `0`.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.data.is_empty()
    }

    pub(crate) fn is_one(&self) -> bool {
        !self.negative && self.data == [1]
    }

    pub(crate) fn is_minus_one(&self) -> bool {
        self.negative && self.data == [Limb::MAX]
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> BigInt {
        if self.negative {
            BigInt::from(-1)
        } else if self.data.is_empty() {
            BigInt::zero()
        } else {
            BigInt::one()
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        if self.negative {
            -self
        } else {
            self.clone()
        }
    }

    /// Number of bits needed to represent the absolute value, `0` for zero.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// assert_eq!(BigInt::from(255).bits(), 8);
    /// assert_eq!(BigInt::from(-256).bits(), 9);
    /// ```
    pub fn bits(&self) -> usize {
        small::bit_length(&self.magnitude())
    }

    // CONVERSIONS

    /// If the value fits an `i128`, returns it. Returns `None` otherwise.
    pub fn to_i128(&self) -> Option<i128> {
        if self.data.len() > 4 {
            return None;
        }
        let mut bits = 0u128;
        for (i, &xi) in self.data.iter().enumerate() {
            bits |= (xi as u128) << (LIMB_BITS * i);
        }
        if self.negative && self.data.len() < 4 {
            bits |= u128::MAX << (LIMB_BITS * self.data.len());
        }
        let value = bits as i128;
        if (value < 0) == self.negative {
            Some(value)
        } else {
            None
        }
    }

    /// If the value fits a `u128`, returns it. Returns `None` otherwise.
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative || self.data.len() > 4 {
            return None;
        }
        let mut bits = 0u128;
        for (i, &xi) in self.data.iter().enumerate() {
            bits |= (xi as u128) << (LIMB_BITS * i);
        }
        Some(bits)
    }

    /// If the value fits an `i64`, returns it. Returns `None` otherwise.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// assert_eq!(BigInt::from(-7).to_i64(), Some(-7));
    /// assert_eq!(BigInt::from(u64::MAX).to_i64(), None);
    /// ```
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    /// If the value fits a `u64`, returns it. Returns `None` otherwise.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_u128(n.unsigned_abs() as u128, n < 0)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_u128(n as u128, false)
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => large::compare(&self.data, &other.data),
            // With equal lengths the limbs order the same as their unsigned
            // values; more limbs means further below zero.
            (true, true) => other
                .data
                .len()
                .cmp(&self.data.len())
                .then_with(|| self.data.iter().rev().cmp(other.data.iter().rev())),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |mut acc, x| {
            acc.add_assign_ref(&x);
            acc
        })
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |mut acc, x| {
            acc.add_assign_ref(x);
            acc
        })
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |mut acc, x| {
            acc.mul_assign_ref(&x);
            acc
        })
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |mut acc, x| {
            acc.mul_assign_ref(x);
            acc
        })
    }
}
