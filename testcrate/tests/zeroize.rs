use cowint::prelude::*;
use zeroize::Zeroize;

#[test]
fn zeroize() {
    let mut x = BigInt::from(-5);
    x.zeroize();
    assert!(x.is_zero() && !x.is_negative());
    x.assert_invariants();

    let mut x = BigInt::from_parts(true, &[1, 2, 3, 4, 5, 6]);
    x.zeroize();
    x.assert_invariants();
    assert_eq!(x, BigInt::zero());

    // a buffer that is still shared is released instead of wiped
    let y = BigInt::from_parts(false, &[1, 2, 3, 4, 5, 6]);
    let mut z = y.clone();
    z.zeroize();
    assert!(z.is_zero());
    assert_eq!(y.digits(), &[1, 2, 3, 4, 5, 6]);

    let mut s = DigitStorage::from_slice(&[7, 8, 9, 10]);
    s.zeroize();
    assert_eq!(s, DigitStorage::new(4, 0));
}
