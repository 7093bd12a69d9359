use alloc::{string::String, vec::Vec};
use core::{fmt, str, str::FromStr};

use cowint_internals::*;

use crate::BigInt;

/// # Strings
impl BigInt {
    /// Parses a decimal integer from `src`, with an optional leading `-` or
    /// `+`. There must be at least one decimal digit and nothing else.
    ///
    /// # Errors
    ///
    /// Returns `IntError::InvalidFormat` if `src` is empty, is only a sign, or
    /// has a character that is not an ASCII decimal digit
    pub fn from_dec_bytes(src: &[u8]) -> Result<Self, IntError> {
        let (negative, src) = match src.first() {
            Some(b'-') => (true, &src[1..]),
            Some(b'+') => (false, &src[1..]),
            _ => (false, src),
        };
        if src.is_empty() {
            return Err(IntError::InvalidFormat)
        }
        let mut res = Self::zero();
        for c in src {
            if !c.is_ascii_digit() {
                return Err(IntError::InvalidFormat)
            }
            res.short_umul_assign(10);
            res.short_uadd_assign(Digit::from(c - b'0'));
        }
        res.negative = negative;
        res.normalize();
        Ok(res)
    }

    /// Parses a decimal integer from `s`. See [BigInt::from_dec_bytes].
    ///
    /// # Errors
    ///
    /// Returns `IntError::InvalidFormat` on a malformed string
    pub fn from_dec_str(s: &str) -> Result<Self, IntError> {
        Self::from_dec_bytes(s.as_bytes())
    }

    /// Returns the ASCII digits of the magnitude in `radix`, most significant
    /// first
    fn to_radix_bytes(&self, radix: Digit, upper: bool) -> Vec<u8> {
        debug_assert!((2..=16).contains(&radix));
        if self.is_zero() {
            return alloc::vec![b'0']
        }
        let table: &[u8; 16] = if upper {
            b"0123456789ABCDEF"
        } else {
            b"0123456789abcdef"
        };
        let mut tmp = self.abs();
        let mut buf = Vec::new();
        while !tmp.is_zero() {
            let rem = tmp.short_udivide_assign(radix);
            tmp.normalize();
            buf.push(table[rem as usize]);
        }
        buf.reverse();
        buf
    }

    /// Returns the decimal representation of `self`, with a leading `-` if
    /// it is negative
    pub fn to_dec_string(&self) -> String {
        let mut s = String::new();
        if self.negative {
            s.push('-');
        }
        for c in self.to_radix_bytes(10, false) {
            s.push(char::from(c));
        }
        s
    }
}

impl FromStr for BigInt {
    type Err = IntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dec_str(s)
    }
}

macro_rules! impl_fmt {
    ($($ty:ident $radix:expr, $upper:expr, $prefix:expr);*;) => {
        $(
            /// Formats the sign and magnitude, with the alternate `#` flag
            /// adding a radix prefix
            impl fmt::$ty for BigInt {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let buf = self.to_radix_bytes($radix, $upper);
                    let s = str::from_utf8(&buf).map_err(|_| fmt::Error)?;
                    f.pad_integral(!self.negative, $prefix, s)
                }
            }
        )*
    };
}

impl_fmt!(
    Display 10, false, "";
    LowerHex 16, false, "0x";
    UpperHex 16, true, "0x";
    Octal 8, false, "0o";
    Binary 2, false, "0b";
);

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
