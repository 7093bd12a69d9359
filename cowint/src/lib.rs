//! This crate compiles all the interfaces of `cowint_core`.
//!
//! ```
//! use cowint::prelude::*;
//!
//! let x = BigInt::from(u64::MAX);
//! let mut y = &x * &x;
//! assert_eq!(y.to_string(), "340282366920938463426481119284349108225");
//! y -= &BigInt::one();
//! y >>= 64;
//! assert_eq!(y, BigInt::from(u64::MAX - 1));
//! assert_eq!(y.div_rem(&BigInt::zero()), Err(IntError::DivideByZero));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use cowint_core::{prelude::*, BitOp, INLINE_DIGITS};

pub mod prelude {
    pub use crate::*;
}
