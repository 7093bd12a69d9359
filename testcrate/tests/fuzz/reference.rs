use cowint::BigInt;
use num_bigint::{BigInt as RefInt, Sign};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, fuzz_int};

fn to_ref(x: &BigInt) -> RefInt {
    let sign = if x.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    RefInt::from_slice(sign, x.digits())
}

fn from_ref(x: &RefInt) -> BigInt {
    let (sign, digits) = x.to_u32_digits();
    BigInt::from_parts(sign == Sign::Minus, &digits)
}

#[track_caller]
fn check_division(duo: &BigInt, div: &BigInt) {
    let (quo, rem) = duo.div_rem(div).unwrap();
    let (ref_duo, ref_div) = (to_ref(duo), to_ref(div));
    eq(&quo, &from_ref(&(&ref_duo / &ref_div)));
    eq(&rem, &from_ref(&(&ref_duo % &ref_div)));
}

/// Compares against `num-bigint` on random operands
pub fn reference(iters: u32, seed: u64, max_digits: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let x0 = fuzz_int(&mut rng, max_digits);
        let x1 = fuzz_int(&mut rng, max_digits);
        let s = (rng.next_u32() % 100) as usize;
        let (r0, r1) = (to_ref(&x0), to_ref(&x1));
        eq(&from_ref(&r0), &x0);

        eq(&(&x0 + &x1), &from_ref(&(&r0 + &r1)));
        eq(&(&x0 - &x1), &from_ref(&(&r0 - &r1)));
        eq(&(&x0 * &x1), &from_ref(&(&r0 * &r1)));
        if !x1.is_zero() {
            check_division(&x0, &x1);
        }
        eq(&(&x0 & &x1), &from_ref(&(&r0 & &r1)));
        eq(&(&x0 | &x1), &from_ref(&(&r0 | &r1)));
        eq(&(&x0 ^ &x1), &from_ref(&(&r0 ^ &r1)));
        eq(&!&x0, &from_ref(&!&r0));
        eq(&(&x0 << s), &from_ref(&(&r0 << s)));
        eq(&(&x0 >> s), &from_ref(&(&r0 >> s)));
        assert_eq!(x0.cmp(&x1), r0.cmp(&r1));

        assert_eq!(x0.to_string(), r0.to_string());
        assert_eq!(format!("{x0:x}"), format!("{r0:x}"));
        assert_eq!(format!("{x0:#X}"), format!("{r0:#X}"));
        assert_eq!(format!("{x0:o}"), format!("{r0:o}"));
        assert_eq!(format!("{x0:b}"), format!("{r0:b}"));
        eq(&r0.to_string().parse().unwrap(), &x0);
        assert_eq!(x0.to_i128(), i128::try_from(&r0).ok());
        assert_eq!(x0.to_u64(), u64::try_from(&r0).ok());
    }
}

/// Compares long division against `num-bigint` for divisors whose most
/// significant digit is small and whose lower digits are large. The trial
/// digit estimated from the top two digits of such divisors is one too large
/// in a large fraction of steps.
pub fn reference_division(iters: u32, seed: u64, max_digits: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let div_len = (rng.next_u32() as usize % (max_digits - 1)) + 2;
        let mut div = vec![u32::MAX; div_len];
        div[div_len - 1] = (rng.next_u32() % 4) + 1;
        for x in div.iter_mut().take(div_len - 2) {
            if (rng.next_u32() & 1) != 0 {
                *x = u32::MAX - (rng.next_u32() % 16);
            }
        }
        let div = BigInt::from_parts((rng.next_u32() & 1) != 0, &div);
        let duo_len = div_len + (rng.next_u32() as usize % max_digits);
        let mut duo = vec![0; duo_len];
        for x in duo.iter_mut() {
            *x = match rng.next_u32() % 3 {
                0 => 0,
                1 => u32::MAX,
                _ => rng.next_u32(),
            };
        }
        let duo = BigInt::from_parts((rng.next_u32() & 1) != 0, &duo);
        check_division(&duo, &div);
        // near multiples land on both sides of a remainder of zero
        let product = &div * &BigInt::from(rng.next_u64());
        check_division(&product, &div);
        check_division(&(&product - &BigInt::one()), &div);
        check_division(&(&product + &BigInt::one()), &div);
    }
}
