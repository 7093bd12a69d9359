use core::cmp;

use crate::{BigInt, DigitStorage};

/// `rand_support` functions
impl BigInt {
    // this is tested by `testcrate/tests/rand.rs`

    /// Returns a random `BigInt` with a magnitude of up to `digits` random
    /// digits and a random sign, drawn from a `rand_core::RngCore` random
    /// number generator. `digits == 0` is treated as 1.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use cowint::BigInt;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = BigInt::rand_using(&mut rng, 4);
    /// assert!(x.len() <= 4);
    /// ```
    pub fn rand_using<R>(rng: &mut R, digits: usize) -> Self
    where
        R: rand_core::RngCore,
    {
        let mut storage = DigitStorage::new(cmp::max(digits, 1), 0);
        for x in storage.make_mut() {
            *x = rng.next_u32();
        }
        let negative = (rng.next_u32() & 1) != 0;
        Self::from_storage(negative, storage)
    }
}
