use cowint_internals::*;

use crate::{BigInt, DigitStorage};

/// # Multiplication
impl BigInt {
    /// Multiply-assigns `self` by `rhs`
    pub fn mul_assign(&mut self, rhs: &Self) {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero();
            return
        }
        let mut product = DigitStorage::new(self.len() + rhs.len(), 0);
        let oflow = mul_add_assign(product.make_mut(), self.digits(), rhs.digits());
        debug_assert!(!oflow);
        self.digits = product;
        self.negative ^= rhs.negative;
        self.normalize();
    }

    /// Multiplies the magnitude of `self` by `rhs`. This does not normalize.
    pub(crate) fn short_umul_assign(&mut self, rhs: Digit) {
        let carry = short_mul_assign(self.digits.make_mut(), rhs);
        if carry != 0 {
            self.digits.push(carry);
        }
    }
}
