//! This crate contains common developer utilities for crates within the
//! `cowint` system, such as the `Digit` type, widening arithmetic, and the raw
//! magnitude routines that operate on plain digit slices. Most users should
//! never have to interact with this directly, everything needed is reexported
//! through `cowint`.
//!
//! There is a hidden reexport of this crate for `cowint_core` and `cowint`.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;
mod digits;
mod error;
mod widening;

pub use digits::{
    add_digits_assign, cmp_digits, digit_or_zero, mul_add_assign, not_digits_assign,
    short_divide_assign, short_mul_assign, sub_digits_assign, twos_complement_assign,
};
pub use error::IntError;
pub use widening::{dd_division, trial_digit, widen_add, widen_mul_add, widen_sub};

/// The basic element of a magnitude. Magnitudes are stored least significant
/// digit first in base `2^32`.
pub type Digit = u32;

/// Double width `Digit` used for carry and borrow chains
pub type DDigit = u64;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Maximum value of a `Digit`
pub const MAX: Digit = Digit::MAX;

/// Subset of `cowint::prelude` that does not depend on `cowint_core`
pub mod prelude {
    pub use crate::{Digit, IntError};
}
