mod bigint;
#[cfg(feature = "serde_support")]
mod serde;
mod storage;

pub use bigint::BigInt;
pub(crate) use bigint::normalize_digits;
pub use storage::{DigitStorage, INLINE_DIGITS};
