mod fuzz;

const N: u32 = if cfg!(miri) {
    32
} else if cfg!(debug_assertions) {
    1_000
} else {
    100_000
};

macro_rules! test_fuzz {
    ($($name:ident, $f:ident, $n:expr, $seed:expr, $max_digits:expr);*;) => {
        $(
            #[test]
            fn $name() {
                fuzz::$f($n, $seed, $max_digits);
            }
        )*
    };
}

// digit counts straddle the inline threshold and go well beyond it
test_fuzz!(
    identities1, identities, N, 0, 1;
    identities2, identities, N, 1, 2;
    identities3, identities, N, 2, 3;
    identities8, identities, N, 3, 8;
    identities24, identities, N / 4, 4, 24;
    reference2, reference, N, 5, 2;
    reference5, reference, N, 6, 5;
    reference16, reference, N / 4, 7, 16;
    reference_division3, reference_division, N, 8, 3;
    reference_division12, reference_division, N, 9, 12;
    reference_division40, reference_division, N / 8, 10, 40;
);
