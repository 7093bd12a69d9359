use core::fmt;

/// The error type of every fallible `cowint` operation. Both variants abort
/// only the operation that returned them, the receiving value is left exactly
/// as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntError {
    /// The input is empty, is only a sign, or contains a character that is not
    /// `0..=9` outside of one optional leading `+` or `-`
    InvalidFormat,
    /// The magnitude of a divisor is zero
    DivideByZero,
}

impl fmt::Display for IntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntError::InvalidFormat => f.write_str("invalid decimal integer literal"),
            IntError::DivideByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntError {}
