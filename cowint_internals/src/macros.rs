//! Macros for export

/// A basic for loop for const contexts
#[macro_export]
macro_rules! const_for {
    ($i:ident in $range:block $b:block) => {
        let mut $i: usize = $range.start.wrapping_sub(1);
        loop {
            // the increment must happen before `$b` so that `continue`s still cause it
            $i = $i.wrapping_add(1);
            if $i >= $range.end {
                break
            }
            $b;
        }
    };
    ($i:ident in $range:block.rev() $b:block) => {
        let mut $i: usize = $range.end;
        loop {
            if $i <= $range.start {
                break
            }
            $i = $i.wrapping_sub(1);
            $b;
        }
    };
}

/// Runs `$f` with `$carry` threaded through every digit of `$dst` starting at
/// `$start`, stopping early once the carry is consumed. Evaluates to the
/// carry left over after the most significant digit.
#[macro_export]
macro_rules! carry_through {
    ($dst:ident, $start:expr, $carry:ident, $x:ident, $f:block) => {{
        $crate::const_for!(i in {$start..$dst.len()} {
            if !$carry {
                break
            }
            let $x = $dst[i];
            let (tmp, next): ($crate::Digit, bool) = $f;
            $dst[i] = tmp;
            $carry = next;
        });
        $carry
    }};
}
