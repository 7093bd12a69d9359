use alloc::{rc::Rc, vec, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::FromIterator,
    mem,
    ops::{Index, IndexMut},
    slice,
};

use cowint_internals::*;

/// The number of digits a `DigitStorage` keeps inline. This is however many
/// digits fit in the space that the handle to a shared buffer would otherwise
/// take, which is 2 on 64 bit platforms, but never less than 1.
pub const INLINE_DIGITS: usize = {
    let n = mem::size_of::<Rc<Vec<Digit>>>() / mem::size_of::<Digit>();
    if n == 0 {
        1
    } else {
        n
    }
};

#[derive(Clone)]
enum Repr {
    /// # Invariants
    ///
    /// `len <= INLINE_DIGITS`, and the digits at and above `len` are zero
    Inline {
        len: usize,
        digits: [Digit; INLINE_DIGITS],
    },
    /// # Invariants
    ///
    /// The buffer always has more than `INLINE_DIGITS` digits
    Shared(Rc<Vec<Digit>>),
}

/// Exclusive view of a `Repr`, only handed out by `DigitStorage::repr_mut`
enum ReprMut<'a> {
    Inline(&'a mut usize, &'a mut [Digit; INLINE_DIGITS]),
    Shared(&'a mut Vec<Digit>),
}

/// A copy-on-write, small buffer optimized sequence of `Digit`s.
///
/// Up to [INLINE_DIGITS] digits are stored inline, longer sequences live in a
/// reference counted buffer. Cloning is always `O(1)`: inline digits are
/// copied and shared buffers only get their reference count incremented. Any
/// mutating access first makes sure that the buffer is not aliased by cloning
/// it if other storages still refer to it, so mutations are never observable
/// through a clone.
///
/// The reference count is not atomic, so `DigitStorage` is neither `Send` nor
/// `Sync`.
///
/// ```
/// use cowint::DigitStorage;
///
/// let x = DigitStorage::new(8, 7);
/// let mut y = x.clone();
/// assert!(x.shares_buffer_with(&y));
/// y[3] = 0;
/// assert!(!x.shares_buffer_with(&y));
/// assert_eq!(x[3], 7);
/// assert_eq!(y[3], 0);
/// ```
#[derive(Clone)]
pub struct DigitStorage {
    repr: Repr,
}

impl DigitStorage {
    /// Copies `src` into inline storage
    fn inline_from(src: &[Digit]) -> Self {
        debug_assert!(src.len() <= INLINE_DIGITS);
        let mut digits = [0; INLINE_DIGITS];
        digits[..src.len()].copy_from_slice(src);
        Self {
            repr: Repr::Inline {
                len: src.len(),
                digits,
            },
        }
    }

    fn from_vec(buf: Vec<Digit>) -> Self {
        if buf.len() <= INLINE_DIGITS {
            Self::inline_from(&buf)
        } else {
            Self {
                repr: Repr::Shared(Rc::new(buf)),
            }
        }
    }

    /// Creates a storage of `len` digits all set to `fill`. A fresh shared
    /// buffer is only allocated if `len > INLINE_DIGITS`.
    pub fn new(len: usize, fill: Digit) -> Self {
        if len <= INLINE_DIGITS {
            let mut digits = [0; INLINE_DIGITS];
            digits[..len].fill(fill);
            Self {
                repr: Repr::Inline { len, digits },
            }
        } else {
            Self {
                repr: Repr::Shared(Rc::new(vec![fill; len])),
            }
        }
    }

    /// Creates a storage by copying `src`
    pub fn from_slice(src: &[Digit]) -> Self {
        if src.len() <= INLINE_DIGITS {
            Self::inline_from(src)
        } else {
            Self {
                repr: Repr::Shared(Rc::new(src.to_vec())),
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Shared(buf) => buf.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns if the digits are stored inline
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// Returns if `self` and `other` currently refer to the same shared
    /// buffer. Inline storages never share.
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Shared(lhs), Repr::Shared(rhs)) => Rc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Digit] {
        match &self.repr {
            Repr::Inline { len, digits } => &digits[..*len],
            Repr::Shared(buf) => buf,
        }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Digit> {
        self.as_slice().iter()
    }

    /// Returns digit `i`, or zero if `i` is out of range
    #[inline]
    pub fn digit(&self, i: usize) -> Digit {
        digit_or_zero(self.as_slice(), i)
    }

    /// Returns the most significant digit
    #[inline]
    pub fn last(&self) -> Option<Digit> {
        self.as_slice().last().copied()
    }

    /// Every mutable access goes through here. A shared buffer that is still
    /// referenced by another storage gets cloned into a fresh buffer with a
    /// reference count of one before anything is handed out.
    fn repr_mut(&mut self) -> ReprMut<'_> {
        match &mut self.repr {
            Repr::Inline { len, digits } => ReprMut::Inline(len, digits),
            Repr::Shared(buf) => ReprMut::Shared(Rc::make_mut(buf)),
        }
    }

    /// Returns the digits as a mutable slice, unsharing them first
    pub fn make_mut(&mut self) -> &mut [Digit] {
        match self.repr_mut() {
            ReprMut::Inline(len, digits) => &mut digits[..*len],
            ReprMut::Shared(buf) => buf,
        }
    }

    /// Appends `x` as the new most significant digit
    pub fn push(&mut self, x: Digit) {
        let promoted = match self.repr_mut() {
            ReprMut::Inline(len, digits) => {
                if *len < INLINE_DIGITS {
                    digits[*len] = x;
                    *len += 1;
                    return
                }
                let mut buf = Vec::with_capacity(2 * INLINE_DIGITS + 1);
                buf.extend_from_slice(&digits[..]);
                buf.push(x);
                buf
            }
            ReprMut::Shared(buf) => {
                buf.push(x);
                return
            }
        };
        self.repr = Repr::Shared(Rc::new(promoted));
    }

    /// Removes and returns the most significant digit
    pub fn pop(&mut self) -> Option<Digit> {
        if let Repr::Shared(buf) = &self.repr {
            if buf.len() == INLINE_DIGITS + 1 {
                // moving back inline only reads the shared buffer, so there is no
                // need to unshare it
                let x = buf[INLINE_DIGITS];
                *self = Self::inline_from(&buf[..INLINE_DIGITS]);
                return Some(x)
            }
        }
        match self.repr_mut() {
            ReprMut::Inline(len, digits) => {
                if *len == 0 {
                    return None
                }
                *len -= 1;
                let x = digits[*len];
                digits[*len] = 0;
                Some(x)
            }
            ReprMut::Shared(buf) => buf.pop(),
        }
    }

    /// Shortens the storage to `new_len` digits. Does nothing if `new_len` is
    /// not less than the current length.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return
        }
        if new_len <= INLINE_DIGITS {
            *self = Self::inline_from(&self.as_slice()[..new_len]);
        } else if let ReprMut::Shared(buf) = self.repr_mut() {
            buf.truncate(new_len);
        }
    }

    /// Resizes the storage to `new_len` digits, filling any new most
    /// significant digits with `fill`
    pub fn resize(&mut self, new_len: usize, fill: Digit) {
        if new_len <= self.len() {
            self.truncate(new_len);
            return
        }
        let promoted = match self.repr_mut() {
            ReprMut::Inline(len, digits) if new_len <= INLINE_DIGITS => {
                digits[*len..new_len].fill(fill);
                *len = new_len;
                return
            }
            ReprMut::Inline(len, digits) => {
                let mut buf = Vec::with_capacity(new_len);
                buf.extend_from_slice(&digits[..*len]);
                buf.resize(new_len, fill);
                buf
            }
            ReprMut::Shared(buf) => {
                buf.resize(new_len, fill);
                return
            }
        };
        self.repr = Repr::Shared(Rc::new(promoted));
    }

    /// Reverses the order of the digits
    pub fn reverse(&mut self) {
        self.make_mut().reverse();
    }

    /// Replaces the contents with `len` digits set to `fill`. This releases
    /// any shared buffer instead of writing through it.
    pub fn assign(&mut self, len: usize, fill: Digit) {
        *self = Self::new(len, fill);
    }
}

impl Index<usize> for DigitStorage {
    type Output = Digit;

    #[inline]
    fn index(&self, i: usize) -> &Digit {
        &self.as_slice()[i]
    }
}

impl IndexMut<usize> for DigitStorage {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Digit {
        &mut self.make_mut()[i]
    }
}

/// Compares the logical digit sequences, regardless of representation
impl PartialEq for DigitStorage {
    fn eq(&self, rhs: &Self) -> bool {
        self.as_slice() == rhs.as_slice()
    }
}

impl Eq for DigitStorage {}

impl Hash for DigitStorage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for DigitStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Digit> for DigitStorage {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DigitStorage {
    type IntoIter = slice::Iter<'a, Digit>;
    type Item = &'a Digit;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `zeroize_support` impl. An exclusively owned buffer is wiped in place. A
/// buffer that other storages still refer to is not written through, this
/// storage only drops its handle and takes fresh zeroed digits.
#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for DigitStorage {
    fn zeroize(&mut self) {
        let len = self.len();
        let exclusive = match &mut self.repr {
            Repr::Inline { digits, .. } => {
                zeroize::Zeroize::zeroize(digits);
                true
            }
            Repr::Shared(buf) => match Rc::get_mut(buf) {
                Some(buf) => {
                    zeroize::Zeroize::zeroize(buf.as_mut_slice());
                    true
                }
                None => false,
            },
        };
        if !exclusive {
            *self = Self::new(len, 0);
        }
    }
}
