//! Truncating division and remainder.
//!
//! Multi-limb divisors go through Knuth's Algorithm D (TAOCP vol. 2,
//! 4.3.1) on the magnitudes of both operands; the signs are applied at the
//! end so that the quotient rounds toward zero and the remainder takes the
//! sign of the dividend, as `/` and `%` do on the primitive integers.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::lib::cmp::Ordering;
use crate::lib::{ptr, Vec};
use crate::math::{large, scalar, small, Limb, Wide, LIMB_BITS};

impl BigInt {
    /// Divides `self` by `divisor`, returning the quotient and the remainder.
    ///
    /// The quotient is truncated toward zero and the remainder has the sign
    /// of `self`, so `q * divisor + r == self` always holds.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2))?;
    /// assert_eq!(q, -3);
    /// assert_eq!(r, -1);
    /// # Ok::<(), big_integer::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`Category::DivideByZero`](crate::error::Category) when
    /// `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero());
        }
        if ptr::eq(self, divisor) {
            return Ok((BigInt::one(), BigInt::zero()));
        }
        if divisor.is_one() {
            return Ok((self.clone(), BigInt::zero()));
        }
        if divisor.is_minus_one() {
            return Ok((-self, BigInt::zero()));
        }

        let u = self.magnitude();
        let v = divisor.magnitude();
        if large::compare(&u, &v) == Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }

        let (q, r) = if v.len() == 1 {
            let mut q = u.into_owned();
            let r = small::idiv(&mut q, v[0]);
            let mut r = alloc::vec![r];
            small::normalize(&mut r);
            (q, r)
        } else {
            knuth_divide(&u, &v)
        };

        Ok((
            BigInt::from_magnitude(q, self.negative ^ divisor.negative),
            BigInt::from_magnitude(r, self.negative),
        ))
    }

    /// Returns the quotient of `self / divisor`, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Fails when `divisor` is zero.
    pub fn try_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Returns the remainder of `self / divisor`, which has the sign of
    /// `self`.
    ///
    /// # Errors
    ///
    /// Fails when `divisor` is zero.
    pub fn try_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Replaces `self` with `self / divisor` and returns it for chaining.
    ///
    /// On error `self` is left unchanged.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// let mut x = BigInt::from(1000);
    /// x.try_div_assign(&BigInt::from(7))?.try_rem_assign(&BigInt::from(10))?;
    /// assert_eq!(x, 2);
    /// assert!(x.try_div_assign(&BigInt::zero()).is_err());
    /// assert_eq!(x, 2);
    /// # Ok::<(), big_integer::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when `divisor` is zero.
    pub fn try_div_assign(&mut self, divisor: &BigInt) -> Result<&mut Self> {
        let (q, _) = self.div_rem(divisor)?;
        *self = q;
        Ok(self)
    }

    /// Replaces `self` with `self % divisor` and returns it for chaining.
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Fails when `divisor` is zero.
    pub fn try_rem_assign(&mut self, divisor: &BigInt) -> Result<&mut Self> {
        let (_, r) = self.div_rem(divisor)?;
        *self = r;
        Ok(self)
    }
}

const BASE: Wide = 1 << LIMB_BITS;

/// Divide magnitude `u` by magnitude `v`, returning (quotient, remainder).
///
/// Requires `v` to have at least two limbs and `u >= v`.
fn knuth_divide(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let n = v.len();
    debug_assert!(n >= 2 && u.len() >= n);
    let m = u.len() - n;

    // D1. Scale so the top limb of the divisor is at least BASE / 2.
    let d = (BASE / (v[n - 1] as Wide + 1)) as Limb;
    let mut v = v.to_vec();
    small::imul(&mut v, d);
    debug_assert_eq!(v.len(), n);
    debug_assert!(v[n - 1] >= 1 << (LIMB_BITS - 1));
    let mut u = u.to_vec();
    small::imul(&mut u, d);
    u.resize(m + n + 1, 0);

    log::trace!(
        "knuth divide: {} limbs by {} limbs, scale factor {}",
        m + n,
        n,
        d
    );

    let vtop = v[n - 1] as Wide;
    let vnext = v[n - 2] as Wide;
    let mut q: Vec<Limb> = alloc::vec![0; m + 1];
    for j in (0..=m).rev() {
        // D3. Estimate the quotient limb from the top two limbs of the window.
        let num = ((u[j + n] as Wide) << LIMB_BITS) | u[j + n - 1] as Wide;
        let mut qhat = num / vtop;
        let mut rhat = num % vtop;
        while qhat >= BASE || qhat * vnext > ((rhat << LIMB_BITS) | u[j + n - 2] as Wide) {
            qhat -= 1;
            rhat += vtop;
            if rhat >= BASE {
                break;
            }
        }
        debug_assert!(qhat < BASE);

        // D4. Multiply and subtract.
        let mut borrow = false;
        let mut carry: Limb = 0;
        for i in 0..n {
            let (lo, hi) = scalar::mul_add(qhat as Limb, v[i], 0, carry);
            carry = hi;
            let mut b = scalar::isub(&mut u[j + i], lo);
            if borrow {
                b |= scalar::isub(&mut u[j + i], 1);
            }
            borrow = b;
        }
        let mut b = scalar::isub(&mut u[j + n], carry);
        if borrow {
            b |= scalar::isub(&mut u[j + n], 1);
        }

        // D5-D6. The estimate was one too large: add the divisor back.
        if b {
            log::trace!("knuth divide: add back at quotient limb {}", j);
            qhat -= 1;
            let mut carry = false;
            for i in 0..n {
                let mut c = scalar::iadd(&mut u[j + i], v[i]);
                if carry {
                    c |= scalar::iadd(&mut u[j + i], 1);
                }
                carry = c;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Limb);
        }
        q[j] = qhat as Limb;
    }

    // D8. Unscale the remainder.
    u.truncate(n);
    small::normalize(&mut u);
    let rem = small::idiv(&mut u, d);
    debug_assert_eq!(rem, 0);
    small::normalize(&mut q);
    (q, u)
}
