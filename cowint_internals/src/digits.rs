//! Raw magnitude routines. Every function here works on plain digit slices
//! stored least significant digit first and knows nothing about signs or
//! storage. Digits read past the end of a shorter operand count as zero.

use core::cmp::Ordering;

use const_fn::const_fn;

use crate::{dd_division, widen_add, widen_mul_add, widen_sub, Digit};

/// Returns digit `i` of `x`, or zero if `i` is past the end of `x`
#[inline]
pub const fn digit_or_zero(x: &[Digit], i: usize) -> Digit {
    if i < x.len() {
        x[i]
    } else {
        0
    }
}

/// Compares the magnitudes `lhs` and `rhs`. Differing lengths decide the
/// comparison outright, so both inputs must either be canonical or have equal
/// lengths. Equal lengths are compared lexicographically from the most
/// significant digit downwards.
pub const fn cmp_digits(lhs: &[Digit], rhs: &[Digit]) -> Ordering {
    if lhs.len() != rhs.len() {
        return if lhs.len() < rhs.len() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
    const_for!(i in {0..lhs.len()}.rev() {
        if lhs[i] != rhs[i] {
            return if lhs[i] < rhs[i] {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    });
    Ordering::Equal
}

/// Add-assigns `rhs` to `dst` and returns the carry out of the most
/// significant digit. `rhs` must not be longer than `dst`.
#[const_fn(cfg(feature = "const_support"))]
pub const fn add_digits_assign(dst: &mut [Digit], rhs: &[Digit]) -> bool {
    debug_assert!(rhs.len() <= dst.len());
    let mut carry = 0;
    const_for!(i in {0..rhs.len()} {
        let tmp = widen_add(dst[i], rhs[i], carry);
        dst[i] = tmp.0;
        carry = tmp.1;
    });
    let mut carry = carry != 0;
    carry_through!(dst, rhs.len(), carry, x, { x.overflowing_add(1) })
}

/// Subtract-assigns `rhs` from `dst` and returns the borrow out of the most
/// significant digit. `rhs` must not be longer than `dst`. If `dst` is a
/// window into a larger magnitude, only the window is touched.
#[const_fn(cfg(feature = "const_support"))]
pub const fn sub_digits_assign(dst: &mut [Digit], rhs: &[Digit]) -> bool {
    debug_assert!(rhs.len() <= dst.len());
    let mut borrow = false;
    const_for!(i in {0..rhs.len()} {
        let tmp = widen_sub(dst[i], rhs[i], borrow);
        dst[i] = tmp.0;
        borrow = tmp.1;
    });
    carry_through!(dst, rhs.len(), borrow, x, { x.overflowing_sub(1) })
}

/// Multiply-assigns `dst` by `rhs` and returns the digit carried out
#[const_fn(cfg(feature = "const_support"))]
pub const fn short_mul_assign(dst: &mut [Digit], rhs: Digit) -> Digit {
    let mut carry = 0;
    const_for!(i in {0..dst.len()} {
        let tmp = widen_mul_add(dst[i], rhs, carry);
        dst[i] = tmp.0;
        carry = tmp.1;
    });
    carry
}

/// Multiplies `lhs` by `rhs` with the schoolbook algorithm and add-assigns the
/// product to `dst`. Returns if a carry went past the end of `dst`, which
/// cannot happen if `dst` starts zeroed and has at least
/// `lhs.len() + rhs.len()` digits.
#[const_fn(cfg(feature = "const_support"))]
pub const fn mul_add_assign(dst: &mut [Digit], lhs: &[Digit], rhs: &[Digit]) -> bool {
    debug_assert!(lhs.len() + rhs.len() <= dst.len());
    let mut oflow = false;
    const_for!(lhs_i in {0..lhs.len()} {
        // carry from the short multiplication
        let mut carry0 = 0;
        // carry from accumulating into `dst`
        let mut carry1 = 0;
        const_for!(rhs_i in {0..rhs.len()} {
            let tmp0 = widen_mul_add(lhs[lhs_i], rhs[rhs_i], carry0);
            carry0 = tmp0.1;
            let tmp1 = widen_add(dst[lhs_i + rhs_i], tmp0.0, carry1);
            carry1 = tmp1.1;
            dst[lhs_i + rhs_i] = tmp1.0;
        });
        let top = lhs_i + rhs.len();
        let tmp = widen_add(dst[top], carry0, carry1);
        dst[top] = tmp.0;
        let mut carry = tmp.1 != 0;
        if carry_through!(dst, top + 1, carry, x, { x.overflowing_add(1) }) {
            oflow = true;
        }
    });
    oflow
}

/// Short-divides `dst` by `div` in place, scanning from the most significant
/// digit down with a double width running remainder, and returns the final
/// remainder.
///
/// # Panics
///
/// If `div == 0`
#[const_fn(cfg(feature = "const_support"))]
pub const fn short_divide_assign(dst: &mut [Digit], div: Digit) -> Digit {
    let mut rem = 0;
    const_for!(i in {0..dst.len()}.rev() {
        let tmp = dd_division((dst[i], rem), div);
        dst[i] = tmp.0;
        rem = tmp.1;
    });
    rem
}

/// Inverts every bit of `dst`
#[const_fn(cfg(feature = "const_support"))]
pub const fn not_digits_assign(dst: &mut [Digit]) {
    const_for!(i in {0..dst.len()} {
        dst[i] = !dst[i];
    });
}

/// Replaces `dst` with its two's complement at its current length (invert,
/// then add one). Returns the carry out, which is only set if `dst` was zero.
#[const_fn(cfg(feature = "const_support"))]
pub const fn twos_complement_assign(dst: &mut [Digit]) -> bool {
    not_digits_assign(dst);
    let mut carry = true;
    carry_through!(dst, 0, carry, x, { x.overflowing_add(1) })
}
