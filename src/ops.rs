//! Operator overloading for `BigInt`.
//!
//! Every binary operator is available for owned and borrowed operands in any
//! combination, and with an `i64` on either side. Compound assignment works
//! in place on the left operand.
//!
//! ```
//! use big_integer::BigInt;
//!
//! let mut x = BigInt::from(1) << 100;
//! x -= 1;
//! x |= BigInt::from(1) << 200;
//! assert!(x > BigInt::from(u128::MAX));
//! assert_eq!(&x >> 200, 1);
//! assert_eq!(&x & 0xf, 0xf);
//! assert_eq!(-&x / (BigInt::from(1) << 199), -2);
//! ```

use crate::bigint::BigInt;
use crate::lib::cmp::Ordering;
use crate::lib::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

#[cold]
#[inline(never)]
fn divide_by_zero() -> ! {
    panic!("attempt to divide by zero")
}

impl BigInt {
    fn bitand_assign_ref(&mut self, rhs: &BigInt) {
        self.bitwise(rhs, |x, y| x & y);
    }

    fn bitor_assign_ref(&mut self, rhs: &BigInt) {
        self.bitwise(rhs, |x, y| x | y);
    }

    fn bitxor_assign_ref(&mut self, rhs: &BigInt) {
        self.bitwise(rhs, |x, y| x ^ y);
    }

    fn div_assign_ref(&mut self, rhs: &BigInt) {
        match self.div_rem(rhs) {
            Ok((q, _)) => *self = q,
            Err(_) => divide_by_zero(),
        }
    }

    fn rem_assign_ref(&mut self, rhs: &BigInt) {
        match self.div_rem(rhs) {
            Ok((_, r)) => *self = r,
            Err(_) => divide_by_zero(),
        }
    }
}

/* ------------------------------------------------------------ */

macro_rules! binop {
    ($($Op:ident $op:ident, $OpAssign:ident $op_assign:ident => $inplace:ident;)*) => {
        $(
            impl<'a> $OpAssign<&'a BigInt> for BigInt {
                #[inline]
                fn $op_assign(&mut self, rhs: &'a BigInt) {
                    self.$inplace(rhs);
                }
            }

            impl $OpAssign<BigInt> for BigInt {
                #[inline]
                fn $op_assign(&mut self, rhs: BigInt) {
                    self.$inplace(&rhs);
                }
            }

            impl $OpAssign<i64> for BigInt {
                #[inline]
                fn $op_assign(&mut self, rhs: i64) {
                    self.$inplace(&BigInt::from(rhs));
                }
            }

            impl<'a> $Op<&'a BigInt> for BigInt {
                type Output = BigInt;
                #[inline]
                fn $op(mut self, rhs: &'a BigInt) -> BigInt {
                    self.$inplace(rhs);
                    self
                }
            }

            impl $Op<BigInt> for BigInt {
                type Output = BigInt;
                #[inline]
                fn $op(mut self, rhs: BigInt) -> BigInt {
                    self.$inplace(&rhs);
                    self
                }
            }

            impl<'a, 'b> $Op<&'b BigInt> for &'a BigInt {
                type Output = BigInt;
                #[inline]
                fn $op(self, rhs: &'b BigInt) -> BigInt {
                    let mut lhs = self.clone();
                    lhs.$inplace(rhs);
                    lhs
                }
            }

            impl<'a> $Op<BigInt> for &'a BigInt {
                type Output = BigInt;
                #[inline]
                fn $op(self, rhs: BigInt) -> BigInt {
                    let mut lhs = self.clone();
                    lhs.$inplace(&rhs);
                    lhs
                }
            }

            impl $Op<i64> for BigInt {
                type Output = BigInt;
                #[inline]
                fn $op(mut self, rhs: i64) -> BigInt {
                    self.$inplace(&BigInt::from(rhs));
                    self
                }
            }

            impl<'a> $Op<i64> for &'a BigInt {
                type Output = BigInt;
                #[inline]
                fn $op(self, rhs: i64) -> BigInt {
                    let mut lhs = self.clone();
                    lhs.$inplace(&BigInt::from(rhs));
                    lhs
                }
            }

            impl $Op<BigInt> for i64 {
                type Output = BigInt;
                #[inline]
                fn $op(self, rhs: BigInt) -> BigInt {
                    let mut lhs = BigInt::from(self);
                    lhs.$inplace(&rhs);
                    lhs
                }
            }

            impl<'a> $Op<&'a BigInt> for i64 {
                type Output = BigInt;
                #[inline]
                fn $op(self, rhs: &'a BigInt) -> BigInt {
                    let mut lhs = BigInt::from(self);
                    lhs.$inplace(rhs);
                    lhs
                }
            }
        )*
    };
}

binop! {
    Add add, AddAssign add_assign => add_assign_ref;
    Sub sub, SubAssign sub_assign => sub_assign_ref;
    Mul mul, MulAssign mul_assign => mul_assign_ref;
    Div div, DivAssign div_assign => div_assign_ref;
    Rem rem, RemAssign rem_assign => rem_assign_ref;
    BitAnd bitand, BitAndAssign bitand_assign => bitand_assign_ref;
    BitOr bitor, BitOrAssign bitor_assign => bitor_assign_ref;
    BitXor bitxor, BitXorAssign bitxor_assign => bitxor_assign_ref;
}

/* ------------------------------------------------------------ */

/// Left shift, filling the vacated low bits with zeros.
impl Shl<usize> for BigInt {
    type Output = BigInt;
    #[inline]
    fn shl(mut self, rhs: usize) -> BigInt {
        self.shl_in_place(rhs);
        self
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;
    #[inline]
    fn shl(self, rhs: usize) -> BigInt {
        let mut lhs = self.clone();
        lhs.shl_in_place(rhs);
        lhs
    }
}

impl ShlAssign<usize> for BigInt {
    #[inline]
    fn shl_assign(&mut self, rhs: usize) {
        self.shl_in_place(rhs);
    }
}

/// Arithmetic right shift, rounding toward negative infinity like `>>` on
/// the primitive signed integers.
///
/// ```
/// use big_integer::BigInt;
///
/// assert_eq!(BigInt::from(-1234) >> 3, -155);
/// assert_eq!(BigInt::from(-1) >> 1000, -1);
/// ```
impl Shr<usize> for BigInt {
    type Output = BigInt;
    #[inline]
    fn shr(mut self, rhs: usize) -> BigInt {
        self.shr_in_place(rhs);
        self
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;
    #[inline]
    fn shr(self, rhs: usize) -> BigInt {
        let mut lhs = self.clone();
        lhs.shr_in_place(rhs);
        lhs
    }
}

impl ShrAssign<usize> for BigInt {
    #[inline]
    fn shr_assign(&mut self, rhs: usize) {
        self.shr_in_place(rhs);
    }
}

/* ------------------------------------------------------------ */

impl Neg for BigInt {
    type Output = BigInt;
    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate_in_place();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;
    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

/// Bitwise complement, equal to `-x - 1`.
impl Not for BigInt {
    type Output = BigInt;
    #[inline]
    fn not(mut self) -> BigInt {
        self.not_in_place();
        self
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;
    #[inline]
    fn not(self) -> BigInt {
        !self.clone()
    }
}

/* ------------------------------------------------------------ */

macro_rules! partialeq_numeric {
    ($([$($ty:ty)*], $conversion:ident, $base:ty)*) => {
        $($(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    self.$conversion().map_or(false, |i| i == (*other as $base))
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    other.$conversion().map_or(false, |i| i == (*self as $base))
                }
            }

            impl PartialOrd<$ty> for BigInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(match self.$conversion() {
                        Some(i) => i.cmp(&(*other as $base)),
                        None if self.is_negative() => Ordering::Less,
                        None => Ordering::Greater,
                    })
                }
            }

            impl PartialOrd<BigInt> for $ty {
                fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    [i8 i16 i32 i64 i128 isize], to_i128, i128
    [u8 u16 u32 u64 u128 usize], to_u128, u128
}
