//! Copy-on-write arbitrary precision integers
//!
//! This is the core library of the `cowint` system of crates. It is `no-std`
//! but needs `alloc`. This crate supplies the `DigitStorage` small buffer
//! optimized, reference counted digit container and the `BigInt` signed
//! arbitrary precision integer built on top of it.
//!
//! Fallible functions return `Result<_, IntError>` and leave their receiver
//! untouched on failure. The only panicking exceptions are the `core::ops`
//! division and remainder impls, which panic on a zero divisor the same way
//! Rust's primitive integers do.

#![no_std]
// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

extern crate alloc;

#[doc(hidden)]
pub use cowint_internals;
pub use cowint_internals::{Digit, IntError};

pub(crate) mod data;
pub use data::{BigInt, DigitStorage, INLINE_DIGITS};

mod logic;
pub use logic::BitOp;

pub mod prelude {
    pub use crate::{BigInt, Digit, DigitStorage, IntError};
}
