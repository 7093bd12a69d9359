mod bitwise;
mod casting;
mod cmp;
mod div;
mod mul;
#[cfg(feature = "rand_support")]
mod rand;
mod shift;
mod std_ops;
mod strings;
mod sum;

pub use bitwise::BitOp;
