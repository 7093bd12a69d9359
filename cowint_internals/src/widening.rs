use crate::{DDigit, Digit, BITS, MAX};

/// Computes x + y + z and returns the widened result as a tuple. The first
/// element is the least significant part, the second is the carry which is
/// always 0, 1, or 2.
#[inline]
pub const fn widen_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let tmp = (x as DDigit) + (y as DDigit) + (z as DDigit);
    (tmp as Digit, (tmp >> BITS) as Digit)
}

/// Computes x - y - borrow in double width arithmetic and returns the
/// difference along with the outgoing borrow
#[inline]
pub const fn widen_sub(x: Digit, y: Digit, borrow: bool) -> (Digit, bool) {
    let tmp = (x as DDigit)
        .wrapping_sub(y as DDigit)
        .wrapping_sub(borrow as DDigit);
    // any bit set above the digit means the subtraction wrapped
    (tmp as Digit, (tmp >> BITS) != 0)
}

/// Computes (x * y) + z. This cannot overflow, because it returns the value
/// widened into a tuple, where the first element is the least significant part
/// of the integer and the second is the most significant.
#[inline]
pub const fn widen_mul_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let tmp = (x as DDigit) * (y as DDigit) + (z as DDigit);
    (tmp as Digit, (tmp >> BITS) as Digit)
}

/// Divides the double digit `(lo, hi)` by `div` and returns the quotient and
/// remainder. The caller must make sure that `hi < div`, which is what a
/// short division running remainder always satisfies, so that the quotient
/// fits in one digit.
///
/// # Panics
///
/// If `div == 0`, this function will panic.
#[inline]
pub const fn dd_division(duo: (Digit, Digit), div: Digit) -> (Digit, Digit) {
    debug_assert!(duo.1 < div);
    let duo = (duo.0 as DDigit) | ((duo.1 as DDigit) << BITS);
    let div = div as DDigit;
    ((duo / div) as Digit, (duo % div) as Digit)
}

/// Estimates one quotient digit of a long division. `duo` holds the three most
/// significant digits of the working remainder (most significant first) and
/// `div` the two most significant digits of the divisor (most significant
/// first). The division is done in 128 bit arithmetic so that the 96 bit by 64
/// bit quotient cannot overflow, and the result is clamped to `MAX`.
///
/// If the divisor's most significant digit is nonzero and the remainder window
/// is less than `div * 2^32`, the estimate is never too small and at most one
/// too large.
#[inline]
pub const fn trial_digit(duo: [Digit; 3], div: [Digit; 2]) -> Digit {
    let x = ((duo[0] as u128) << (2 * BITS)) | ((duo[1] as u128) << BITS) | (duo[2] as u128);
    let y = ((div[0] as u128) << BITS) | (div[1] as u128);
    let quo = x / y;
    if quo > (MAX as u128) {
        MAX
    } else {
        quo as Digit
    }
}
