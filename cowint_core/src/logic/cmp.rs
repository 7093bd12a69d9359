use core::cmp::Ordering;

use cowint_internals::*;

use crate::BigInt;

/// # Comparison
impl BigInt {
    /// Compares the magnitudes of `self` and `rhs`, ignoring their signs
    pub fn cmp_magnitude(&self, rhs: &Self) -> Ordering {
        cmp_digits(self.digits(), rhs.digits())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, rhs: &Self) -> bool {
        (self.is_zero() && rhs.is_zero())
            || ((self.negative == rhs.negative) && (self.digits == rhs.digits))
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for BigInt {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self.negative, rhs.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(rhs),
            // the larger magnitude is the smaller negative number
            (true, true) => rhs.cmp_magnitude(self),
        }
    }
}
