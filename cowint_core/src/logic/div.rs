use core::cmp::Ordering;

use cowint_internals::*;

use crate::{data::normalize_digits, BigInt, DigitStorage};

/// Long division of the canonical magnitudes `duo` and `div`, where `div` has
/// at least two digits and `duo` is not less than `div`. Returns the quotient
/// and remainder magnitudes, not yet canonical.
fn long_divide(duo: &[Digit], div: &[Digit]) -> (DigitStorage, DigitStorage) {
    let n = div.len();
    debug_assert!((n >= 2) && (duo.len() >= n) && (div[n - 1] != 0));
    // the extra zero digit makes the top `n + 1` digits of the working
    // remainder a valid window for the first step
    let mut rem = DigitStorage::from_slice(duo);
    rem.push(0);
    let div_top = [div[n - 1], div[n - 2]];
    let steps = rem.len() - n;
    let mut quo = DigitStorage::new(0, 0);
    let mut candidate = DigitStorage::new(n + 1, 0);
    for _ in 0..steps {
        let len = rem.len();
        let mut trial = trial_digit(
            [rem.digit(len - 1), rem.digit(len - 2), rem.digit(len - 3)],
            div_top,
        );
        let cand = candidate.make_mut();
        cand[..n].copy_from_slice(div);
        cand[n] = short_mul_assign(&mut cand[..n], trial);
        let window = &mut rem.make_mut()[(len - n - 1)..];
        if cmp_digits(window, cand) == Ordering::Less {
            // the trial digit is never more than one too large
            trial -= 1;
            sub_digits_assign(cand, div);
        }
        let borrow = sub_digits_assign(window, cand);
        debug_assert!(!borrow);
        quo.push(trial);
        let top = rem.pop();
        debug_assert_eq!(top, Some(0));
    }
    // the quotient digits were produced most significant first
    quo.reverse();
    (quo, rem)
}

/// Divides the canonical magnitude `duo` by the nonzero canonical magnitude
/// `div`, returning canonical quotient and remainder magnitudes
fn divide_digits(duo: &DigitStorage, div: &DigitStorage) -> (DigitStorage, DigitStorage) {
    if cmp_digits(duo.as_slice(), div.as_slice()) == Ordering::Less {
        return (DigitStorage::new(1, 0), duo.clone())
    }
    let (mut quo, mut rem) = if div.len() == 1 {
        let mut quo = duo.clone();
        let rem = short_divide_assign(quo.make_mut(), div[0]);
        (quo, DigitStorage::new(1, rem))
    } else {
        long_divide(duo.as_slice(), div.as_slice())
    };
    normalize_digits(&mut quo);
    normalize_digits(&mut rem);
    (quo, rem)
}

/// # Division
///
/// Division truncates toward zero. The remainder has the sign of the dividend
/// (or is zero), so that `(duo / div) * div + (duo % div) == duo`.
impl BigInt {
    /// Returns the quotient and remainder of `self` divided by `div`.
    ///
    /// # Errors
    ///
    /// Returns `IntError::DivideByZero` if `div` is zero
    pub fn div_rem(&self, div: &Self) -> Result<(Self, Self), IntError> {
        if div.is_zero() {
            return Err(IntError::DivideByZero)
        }
        let (quo, rem) = divide_digits(&self.digits, &div.digits);
        Ok((
            Self::from_storage(self.negative != div.negative, quo),
            Self::from_storage(self.negative, rem),
        ))
    }

    /// Quotient-assigns `self` by `div`. `self` is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `IntError::DivideByZero` if `div` is zero
    pub fn quo_assign(&mut self, div: &Self) -> Result<(), IntError> {
        let (quo, _) = self.div_rem(div)?;
        *self = quo;
        Ok(())
    }

    /// Remainder-assigns `self` by `div`. `self` is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `IntError::DivideByZero` if `div` is zero
    pub fn rem_assign(&mut self, div: &Self) -> Result<(), IntError> {
        let (_, rem) = self.div_rem(div)?;
        *self = rem;
        Ok(())
    }

    /// Divides the magnitude of `self` by `div` and returns the remainder.
    /// This does not normalize, and `div` must be nonzero.
    pub(crate) fn short_udivide_assign(&mut self, div: Digit) -> Digit {
        short_divide_assign(self.digits.make_mut(), div)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(duo: &[Digit], div: &[Digit]) {
        let duo = DigitStorage::from_slice(duo);
        let div = DigitStorage::from_slice(div);
        let (quo, rem) = divide_digits(&duo, &div);
        assert_eq!(cmp_digits(rem.as_slice(), div.as_slice()), Ordering::Less);
        // `quo * div + rem == duo`
        let mut acc = DigitStorage::new(quo.len() + div.len() + 1, 0);
        mul_add_assign(acc.make_mut(), quo.as_slice(), div.as_slice());
        add_digits_assign(acc.make_mut(), rem.as_slice());
        normalize_digits(&mut acc);
        assert_eq!(acc, duo);
    }

    #[test]
    fn trial_correction() {
        // the first trial digit of `2^96 / (2^64 + 2^32 - 1)` is one too large
        let duo = [0, 0, 0, 1];
        let div = [MAX, 0, 1];
        let (quo, rem) = divide_digits(
            &DigitStorage::from_slice(&duo),
            &DigitStorage::from_slice(&div),
        );
        assert_eq!(quo.as_slice(), &[MAX]);
        assert_eq!(rem.as_slice(), &[MAX, 1]);
        check(&duo, &div);
        check(&[1, 2, 3, 4, 5, 6, 7], &[MAX, MAX, 1]);
        check(&[MAX, MAX, MAX, MAX, MAX], &[1, 0, 1]);
        check(&[0, 0, 0, 0, 0, 0x8000_0000], &[MAX, 0x7fff_ffff]);
    }

    #[test]
    fn short_and_trivial() {
        check(&[5], &[7]);
        check(&[7], &[5]);
        check(&[MAX, MAX, MAX], &[10]);
        check(&[3, 4], &[3, 4]);
        check(&[0], &[1]);
    }
}
