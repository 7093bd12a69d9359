use core::cmp::{self, Ordering};

use cowint_internals::*;

use crate::BigInt;

/// # Summation
impl BigInt {
    /// Add-assigns `rhs` with its sign replaced by `rhs_negative`. Both
    /// addition and subtraction go through here.
    fn signed_add_assign(&mut self, rhs: &Self, rhs_negative: bool) {
        if rhs.is_zero() {
            return
        }
        if self.negative == rhs_negative {
            // one extra digit so that the carry always fits
            let len = cmp::max(self.len(), rhs.len()) + 1;
            self.digits.resize(len, 0);
            let carry = add_digits_assign(self.digits.make_mut(), rhs.digits());
            debug_assert!(!carry);
        } else {
            match self.cmp_magnitude(rhs) {
                Ordering::Less => {
                    let mut diff = rhs.digits.clone();
                    let borrow = sub_digits_assign(diff.make_mut(), self.digits());
                    debug_assert!(!borrow);
                    self.digits = diff;
                    self.negative = rhs_negative;
                }
                _ => {
                    let borrow = sub_digits_assign(self.digits.make_mut(), rhs.digits());
                    debug_assert!(!borrow);
                }
            }
        }
        self.normalize();
    }

    /// Add-assigns `rhs` to `self`
    pub fn add_assign(&mut self, rhs: &Self) {
        self.signed_add_assign(rhs, rhs.negative);
    }

    /// Subtract-assigns `rhs` from `self`
    pub fn sub_assign(&mut self, rhs: &Self) {
        // the sign of a zero `rhs` is irrelevant because it returns early
        self.signed_add_assign(rhs, !rhs.negative);
    }

    /// Assigns `rhs - self` to `self`
    pub fn rsb_assign(&mut self, rhs: &Self) {
        self.neg_assign();
        self.add_assign(rhs);
    }

    /// Negate-assigns `self`. Zero stays non-negative.
    pub fn neg_assign(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Increment-assigns `self`
    pub fn inc_assign(&mut self) {
        self.add_assign(&Self::one());
    }

    /// Decrement-assigns `self`
    pub fn dec_assign(&mut self) {
        self.sub_assign(&Self::one());
    }

    /// Increment-assigns `self` and returns the value it had before
    pub fn post_inc(&mut self) -> Self {
        let prev = self.clone();
        self.inc_assign();
        prev
    }

    /// Decrement-assigns `self` and returns the value it had before
    pub fn post_dec(&mut self) -> Self {
        let prev = self.clone();
        self.dec_assign();
        prev
    }

    /// Adds `rhs` to the magnitude of `self`. This does not normalize.
    pub(crate) fn short_uadd_assign(&mut self, rhs: Digit) {
        if add_digits_assign(self.digits.make_mut(), &[rhs]) {
            self.digits.push(1);
        }
    }
}
