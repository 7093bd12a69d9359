use cowint::BigInt;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod identities;
mod reference;

pub use identities::identities;
pub use reference::{reference, reference_division};

/// Checks for equality and that invariants are being kept
#[track_caller]
pub fn eq(lhs: &BigInt, rhs: &BigInt) {
    lhs.assert_invariants();
    rhs.assert_invariants();
    if lhs != rhs {
        panic!("lhs and rhs are not equal when they should be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Returns a random value of up to `max_digits` digits. Zero and all-ones
/// digits are common, so that carries and borrows run far and the trial
/// digits of long division get corrected often.
pub fn fuzz_int(rng: &mut Xoshiro128StarStar, max_digits: usize) -> BigInt {
    let len = (rng.next_u32() as usize % max_digits) + 1;
    let mut digits = Vec::with_capacity(len);
    for _ in 0..len {
        digits.push(match rng.next_u32() % 4 {
            0 => 0,
            1 => u32::MAX,
            _ => rng.next_u32(),
        });
    }
    BigInt::from_parts((rng.next_u32() & 1) != 0, &digits)
}
