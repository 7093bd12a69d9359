use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::BigInt;

#[track_caller]
fn quo_assign_or_panic(x: &mut BigInt, rhs: &BigInt) {
    if let Err(e) = x.quo_assign(rhs) {
        panic!("{}", e)
    }
}

#[track_caller]
fn rem_assign_or_panic(x: &mut BigInt, rhs: &BigInt) {
    if let Err(e) = x.rem_assign(rhs) {
        panic!("{}", e)
    }
}

/// Every operator is implemented for all combinations of owned and borrowed
/// operands, along with the `*Assign` form taking an owned or borrowed `rhs`
macro_rules! impl_binop {
    ($($Op:ident $op:ident $OpAssign:ident $op_assign:ident $f:path);*;) => {
        $(
            impl<'a> $OpAssign<&'a BigInt> for BigInt {
                #[track_caller]
                fn $op_assign(&mut self, rhs: &'a BigInt) {
                    $f(self, rhs);
                }
            }

            impl $OpAssign<BigInt> for BigInt {
                #[track_caller]
                fn $op_assign(&mut self, rhs: BigInt) {
                    $f(self, &rhs);
                }
            }

            impl<'a> $Op<&'a BigInt> for BigInt {
                type Output = BigInt;

                #[track_caller]
                fn $op(mut self, rhs: &'a BigInt) -> BigInt {
                    $f(&mut self, rhs);
                    self
                }
            }

            impl $Op<BigInt> for BigInt {
                type Output = BigInt;

                #[track_caller]
                fn $op(mut self, rhs: BigInt) -> BigInt {
                    $f(&mut self, &rhs);
                    self
                }
            }

            impl<'a> $Op<&'a BigInt> for &BigInt {
                type Output = BigInt;

                #[track_caller]
                fn $op(self, rhs: &'a BigInt) -> BigInt {
                    let mut res = self.clone();
                    $f(&mut res, rhs);
                    res
                }
            }

            impl $Op<BigInt> for &BigInt {
                type Output = BigInt;

                #[track_caller]
                fn $op(self, rhs: BigInt) -> BigInt {
                    let mut res = self.clone();
                    $f(&mut res, &rhs);
                    res
                }
            }
        )*
    };
}

impl_binop!(
    Add add AddAssign add_assign BigInt::add_assign;
    Sub sub SubAssign sub_assign BigInt::sub_assign;
    Mul mul MulAssign mul_assign BigInt::mul_assign;
    Div div DivAssign div_assign quo_assign_or_panic;
    Rem rem RemAssign rem_assign rem_assign_or_panic;
    BitAnd bitand BitAndAssign bitand_assign BigInt::and_assign;
    BitOr bitor BitOrAssign bitor_assign BigInt::or_assign;
    BitXor bitxor BitXorAssign bitxor_assign BigInt::xor_assign;
);

macro_rules! impl_unop {
    ($($Op:ident $op:ident $f:path);*;) => {
        $(
            impl $Op for BigInt {
                type Output = BigInt;

                fn $op(mut self) -> BigInt {
                    $f(&mut self);
                    self
                }
            }

            impl $Op for &BigInt {
                type Output = BigInt;

                fn $op(self) -> BigInt {
                    let mut res = self.clone();
                    $f(&mut res);
                    res
                }
            }
        )*
    };
}

impl_unop!(
    Neg neg BigInt::neg_assign;
    Not not BigInt::not_assign;
);

/// Shifts by a signed amount shift the other way when the amount is negative
macro_rules! impl_shift {
    ($($ty:ident)*; $to:ident, $shl:path, $shr:path) => {
        $(
            impl ShlAssign<$ty> for BigInt {
                fn shl_assign(&mut self, s: $ty) {
                    $shl(self, s as $to);
                }
            }

            impl ShrAssign<$ty> for BigInt {
                fn shr_assign(&mut self, s: $ty) {
                    $shr(self, s as $to);
                }
            }

            impl Shl<$ty> for BigInt {
                type Output = BigInt;

                fn shl(mut self, s: $ty) -> BigInt {
                    $shl(&mut self, s as $to);
                    self
                }
            }

            impl Shl<$ty> for &BigInt {
                type Output = BigInt;

                fn shl(self, s: $ty) -> BigInt {
                    let mut res = self.clone();
                    $shl(&mut res, s as $to);
                    res
                }
            }

            impl Shr<$ty> for BigInt {
                type Output = BigInt;

                fn shr(mut self, s: $ty) -> BigInt {
                    $shr(&mut self, s as $to);
                    self
                }
            }

            impl Shr<$ty> for &BigInt {
                type Output = BigInt;

                fn shr(self, s: $ty) -> BigInt {
                    let mut res = self.clone();
                    $shr(&mut res, s as $to);
                    res
                }
            }
        )*
    };
}

impl_shift!(i32 isize; isize, BigInt::shl_assign, BigInt::shr_assign);
impl_shift!(u32 usize; usize, BigInt::shl_bits_assign, BigInt::shr_bits_assign);
