use cowint_internals::*;

use crate::{BigInt, DigitStorage};

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(x: $ty) -> Self {
                    Self::from_u128_magnitude(false, x as u128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(x: $ty) -> Self {
                    // `unsigned_abs` cannot overflow on the most negative value
                    Self::from_u128_magnitude(x < 0, x.unsigned_abs() as u128)
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 u128 usize);
from_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! to_primitive {
    ($($fn:ident $ty:ident $from:ident);*;) => {
        $(
            #[doc = concat!("Returns `self` as a `", stringify!($ty), "`, or `None` if it does not fit")]
            pub fn $fn(&self) -> Option<$ty> {
                $ty::try_from(self.$from()?).ok()
            }
        )*
    };
}

/// # Casting
impl BigInt {
    fn from_u128_magnitude(negative: bool, mut x: u128) -> Self {
        let mut digits = DigitStorage::new(0, 0);
        loop {
            digits.push(x as Digit);
            x >>= BITS;
            if x == 0 {
                break
            }
        }
        Self::from_storage(negative, digits)
    }

    /// Returns the magnitude of `self` if it fits in a `u128`
    fn u128_magnitude(&self) -> Option<u128> {
        if self.len() * BITS > 128 {
            return None
        }
        let mut res = 0u128;
        for x in self.digits.iter().rev() {
            res = (res << BITS) | (*x as u128);
        }
        Some(res)
    }

    /// Returns `self` as a `u128`, or `None` if it is negative or too large
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative {
            None
        } else {
            self.u128_magnitude()
        }
    }

    /// Returns `self` as an `i128`, or `None` if it does not fit
    pub fn to_i128(&self) -> Option<i128> {
        let mag = self.u128_magnitude()?;
        if self.negative {
            if mag <= i128::MIN.unsigned_abs() {
                // wraps exactly on `i128::MIN`
                Some((mag as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(mag).ok()
        }
    }

    to_primitive!(
        to_u64 u64 to_u128;
        to_usize usize to_u128;
        to_i64 i64 to_i128;
        to_isize isize to_i128;
    );
}
