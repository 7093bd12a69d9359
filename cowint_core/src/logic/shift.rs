use core::iter;

use cowint_internals::*;

use crate::{BigInt, DigitStorage};

/// # Shifts
///
/// Shifts act on the mathematical value: a left shift by `s` multiplies by
/// `2^s`, and a right shift by `s` divides by `2^s` rounding toward negative
/// infinity, like the arithmetic right shift of the primitive signed integers.
impl BigInt {
    /// Shift-left-assigns `self` by `s` bits
    pub fn shl_bits_assign(&mut self, s: usize) {
        if self.is_zero() {
            return
        }
        let (digits, bits) = (s / BITS, s % BITS);
        if bits != 0 {
            self.short_umul_assign(1 << bits);
        }
        if digits != 0 {
            self.digits = iter::repeat(0)
                .take(digits)
                .chain(self.digits.iter().copied())
                .collect();
        }
    }

    /// Shift-right-assigns `self` by `s` bits, rounding toward negative
    /// infinity
    pub fn shr_bits_assign(&mut self, s: usize) {
        let (digits, bits) = (s / BITS, s % BITS);
        // if any set bit is shifted out of a negative value
        let mut truncated = false;
        if digits >= self.len() {
            truncated = !self.is_zero();
            self.digits = DigitStorage::new(1, 0);
        } else if digits != 0 {
            truncated = self.digits.iter().take(digits).any(|x| *x != 0);
            self.digits = self.digits.iter().skip(digits).copied().collect();
        }
        if bits != 0 {
            truncated |= self.short_udivide_assign(1 << bits) != 0;
        }
        if self.negative && truncated {
            self.short_uadd_assign(1);
        }
        self.normalize();
    }

    /// Shift-left-assigns `self` by `s` bits. A negative `s` shifts right.
    pub fn shl_assign(&mut self, s: isize) {
        if s < 0 {
            self.shr_bits_assign(s.unsigned_abs());
        } else {
            self.shl_bits_assign(s as usize);
        }
    }

    /// Shift-right-assigns `self` by `s` bits, rounding toward negative
    /// infinity. A negative `s` shifts left.
    pub fn shr_assign(&mut self, s: isize) {
        if s < 0 {
            self.shl_bits_assign(s.unsigned_abs());
        } else {
            self.shr_bits_assign(s as usize);
        }
    }
}
