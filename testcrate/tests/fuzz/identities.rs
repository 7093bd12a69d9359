use core::cmp::Ordering;

use cowint::BigInt;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, fuzz_int};

/// This inner function has all inputs as `&BigInt`, which eliminates the
/// chance of accidentally overwriting them and causing false positives.
fn identities_inner(x0: &BigInt, x1: &BigInt, x2: &BigInt, s: usize) {
    let zero = BigInt::zero();
    let one = BigInt::one();

    // additive inverses
    eq(&(&(x0 + x1) - x1), x0);
    eq(&(x0 - &(x0 - x1)), x1);
    eq(&(x0 + &(-x0)), &zero);
    eq(&-&-x0, x0);

    // commutativity, associativity, and distributivity
    eq(&(x0 + x1), &(x1 + x0));
    eq(&(x0 * x1), &(x1 * x0));
    eq(&(&(x0 + x1) + x2), &(x0 + &(x1 + x2)));
    eq(&(&(x0 * x1) * x2), &(x0 * &(x1 * x2)));
    eq(&(x0 * &(x1 + x2)), &(&(x0 * x1) + &(x0 * x2)));
    eq(&(x0 * &zero), &zero);
    eq(&(x0 * &one), x0);
    eq(&(x0 * &-&one), &-x0);

    // truncating division
    if !x1.is_zero() {
        let (quo, rem) = x0.div_rem(x1).unwrap();
        eq(&(&(&quo * x1) + &rem), x0);
        assert!(rem.is_zero() || (rem.is_negative() == x0.is_negative()));
        assert_eq!(rem.cmp_magnitude(x1), Ordering::Less);
        eq(&(x0 / x1), &quo);
        eq(&(x0 % x1), &rem);
        let (neg_quo, neg_rem) = (-x0).div_rem(x1).unwrap();
        eq(&neg_quo, &-&quo);
        eq(&neg_rem, &-&rem);
        let mut tmp = x0.clone();
        tmp.quo_assign(x1).unwrap();
        eq(&tmp, &quo);
        tmp.clone_from(x0);
        tmp.rem_assign(x1).unwrap();
        eq(&tmp, &rem);
    }
    // an exact product divides back
    if !x0.is_zero() {
        let (quo, rem) = (x0 * x1).div_rem(x0).unwrap();
        eq(&quo, x1);
        eq(&rem, &zero);
    }

    // two's complement bitwise
    eq(&!x0, &(&-x0 - &one));
    eq(&!&!x0, x0);
    eq(&(&(x0 & x1) | &(x0 ^ x1)), &(x0 | x1));
    eq(&!&(x0 & x1), &(&!x0 | &!x1));
    eq(&!&(x0 | x1), &(&!x0 & &!x1));
    eq(&(&(x0 ^ x1) ^ x1), x0);
    eq(&(x0 & x0), x0);
    eq(&(x0 | &zero), x0);
    eq(&(x0 ^ x0), &zero);
    eq(&(x0 & &-&one), x0);
    // `x + y == (x ^ y) + 2 * (x & y)`
    eq(&(x0 + x1), &(&(x0 ^ x1) + &(&(x0 & x1) << 1u32)));

    // shifts
    let pow = &one << s;
    eq(&(x0 << s), &(x0 * &pow));
    let (mut floor, rem) = x0.div_rem(&pow).unwrap();
    if rem.is_negative() {
        floor.dec_assign();
    }
    eq(&(x0 >> s), &floor);
    eq(&(&(x0 << s) >> s), x0);
    eq(&(x0 << -(s as isize)), &(x0 >> s));
    eq(&(x0 >> -(s as i32)), &(x0 << s));

    // ordering agrees with subtraction
    assert_eq!(x0.cmp(x1), (x0 - x1).signum().cmp(&0));
    assert_eq!(x0.cmp(x1), (-x1).cmp(&-x0));
    assert_eq!(x0 == x1, x0.cmp(x1) == Ordering::Equal);

    // strings
    eq(&x0.to_string().parse::<BigInt>().unwrap(), x0);
    assert_eq!(x0.to_dec_string(), format!("{x0}"));
    assert_eq!(format!("{x0:?}"), format!("{x0}"));

    // increments and decrements
    let mut tmp = x0.clone();
    eq(&tmp.post_inc(), x0);
    eq(&tmp, &(x0 + &one));
    eq(&tmp.post_dec(), &(x0 + &one));
    eq(&tmp, x0);
    tmp.dec_assign();
    tmp.inc_assign();
    eq(&tmp, x0);

    // clones never observe mutations
    let mut tmp = x0.clone();
    tmp += x1;
    tmp *= x2;
    tmp <<= 33u32;
    tmp.not_assign();
    eq(&tmp, &!&(&(&(x0 + x1) * x2) << 33u32));
}

pub fn identities(iters: u32, seed: u64, max_digits: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let x0 = fuzz_int(&mut rng, max_digits);
        let x1 = fuzz_int(&mut rng, max_digits);
        let x2 = fuzz_int(&mut rng, max_digits);
        let s = (rng.next_u32() % 200) as usize;
        let copies = (x0.clone(), x1.clone(), x2.clone());
        identities_inner(&x0, &x1, &x2, s);
        // the inputs themselves are never disturbed
        assert_eq!((x0, x1, x2), copies);
    }
}
