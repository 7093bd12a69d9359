use core::hash::{Hash, Hasher};

use cowint_internals::*;

use crate::DigitStorage;

/// Truncates the most significant zero digits of `digits`, leaving at least
/// one digit
pub(crate) fn normalize_digits(digits: &mut DigitStorage) {
    let mut len = digits.len();
    while len > 1 && digits[len - 1] == 0 {
        len -= 1;
    }
    if len == 0 {
        digits.push(0);
    } else {
        digits.truncate(len);
    }
}

/// An arbitrary precision signed integer in sign-magnitude form.
///
/// The magnitude lives in a [DigitStorage] with the least significant
/// [Digit] first. Small magnitudes are stored inline and larger ones in a
/// reference counted buffer, so `clone` is always cheap and mutating a clone
/// never affects the value it was cloned from.
///
/// Every public operation leaves a `BigInt` in canonical form: the magnitude
/// has no most significant zero digits (but always at least one digit), and
/// zero is never negative.
///
/// ```
/// use cowint::BigInt;
///
/// let x: BigInt = "-123456789012345678901234567890".parse().unwrap();
/// let y = BigInt::from(987654321u32);
/// let (quo, rem) = x.div_rem(&y).unwrap();
/// assert_eq!(quo.to_string(), "-124999998873437499901");
/// assert_eq!(rem.to_string(), "-574845669");
/// assert_eq!(&quo * &y + &rem, x);
/// ```
#[derive(Clone)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) digits: DigitStorage,
}

/// # Basic functions
impl BigInt {
    /// Creates a `BigInt` from a sign and a storage that may not be canonical
    pub(crate) fn from_storage(negative: bool, digits: DigitStorage) -> Self {
        let mut res = Self { negative, digits };
        res.normalize();
        res
    }

    /// Restores the canonical form after a mutation of the magnitude
    pub(crate) fn normalize(&mut self) {
        normalize_digits(&mut self.digits);
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Returns a zero `BigInt`
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: DigitStorage::new(1, 0),
        }
    }

    /// Returns a `BigInt` with value one
    pub fn one() -> Self {
        Self {
            negative: false,
            digits: DigitStorage::new(1, 1),
        }
    }

    /// Creates a `BigInt` from a sign and a least significant first magnitude.
    /// The magnitude may have most significant zero digits or be empty, the
    /// result is canonicalized.
    pub fn from_parts(negative: bool, digits: &[Digit]) -> Self {
        Self::from_storage(negative, DigitStorage::from_slice(digits))
    }

    /// Returns the magnitude, least significant digit first
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        self.digits.as_slice()
    }

    /// Returns the underlying storage of the magnitude
    #[inline]
    pub fn storage(&self) -> &DigitStorage {
        &self.digits
    }

    /// Returns the number of digits in the canonical magnitude, which is
    /// always at least one
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        (self.digits.len() == 1) && (self.digits[0] == 0)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns -1, 0, or 1 depending on the sign of `self`
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Returns the absolute value of `self`
    pub fn abs(&self) -> Self {
        let mut res = self.clone();
        res.negative = false;
        res
    }

    pub fn abs_assign(&mut self) {
        self.negative = false;
    }

    /// Panics if `self` is not in canonical form
    #[doc(hidden)]
    #[track_caller]
    pub fn assert_invariants(&self) {
        assert!(!self.digits.is_empty(), "empty magnitude");
        if self.digits.len() > 1 {
            assert!(
                self.digits.last() != Some(0),
                "most significant digit is zero: {:?}",
                self.digits
            );
        }
        if self.is_zero() {
            assert!(!self.negative, "negative zero");
        }
        assert_eq!(self.digits.is_inline(), self.digits.len() <= crate::INLINE_DIGITS);
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.digits.hash(state);
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.digits);
        self.digits.truncate(1);
        self.negative = false;
    }
}
