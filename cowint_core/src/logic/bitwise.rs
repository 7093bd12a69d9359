use core::cmp;

use cowint_internals::*;

use crate::{BigInt, DigitStorage};

/// A digit-wise bitwise operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    /// Applies the operator to a pair of digits
    #[inline]
    pub const fn apply(self, x: Digit, y: Digit) -> Digit {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

/// # Bitwise
///
/// Bitwise operations act on the infinitely sign extended two's complement
/// representation of the values, the same way they act on primitive signed
/// integers.
impl BigInt {
    /// Returns the two's complement bit pattern of `self` at `len` digits.
    /// `len` must be at least `self.len()`.
    fn twos_complement_pattern(&self, len: usize) -> DigitStorage {
        let mut pattern = self.digits.clone();
        pattern.resize(len, 0);
        if self.negative {
            // nonzero magnitudes have no carry out
            twos_complement_assign(pattern.make_mut());
        }
        pattern
    }

    /// Assigns `op(self, rhs)` to `self`
    pub fn bitwise_assign(&mut self, rhs: &Self, op: BitOp) {
        let len = cmp::max(self.len(), rhs.len());
        let mut res = self.twos_complement_pattern(len);
        let rhs_pattern = rhs.twos_complement_pattern(len);
        for (x, y) in res.make_mut().iter_mut().zip(rhs_pattern.iter()) {
            *x = op.apply(*x, *y);
        }
        // the sign bits extend infinitely far up, so the operator applied to
        // them decides the sign of the result
        let negative = op.apply(self.negative as Digit, rhs.negative as Digit) != 0;
        if negative && twos_complement_assign(res.make_mut()) {
            res.push(1);
        }
        self.digits = res;
        self.negative = negative;
        self.normalize();
    }

    pub fn and_assign(&mut self, rhs: &Self) {
        self.bitwise_assign(rhs, BitOp::And);
    }

    pub fn or_assign(&mut self, rhs: &Self) {
        self.bitwise_assign(rhs, BitOp::Or);
    }

    pub fn xor_assign(&mut self, rhs: &Self) {
        self.bitwise_assign(rhs, BitOp::Xor);
    }

    /// Not-assigns `self`, which is `-self - 1` for two's complement
    pub fn not_assign(&mut self) {
        self.neg_assign();
        self.dec_assign();
    }
}
