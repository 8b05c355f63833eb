use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error;
use crate::message::Message;

use super::traits::MessageSequence;

/// A random access position in a [`MessageSequence`].
///
/// A cursor borrows the sequence and holds an offset. All element access
/// goes through [`MessageSequence::get`], so a cursor never sees the storage
/// behind the sequence.
///
/// A forward cursor designates the element at its offset. A reverse cursor
/// designates the element just before its offset, so `rbegin` has offset
/// `len` and `rend` has offset `0`. Moving a reverse cursor forward
/// decreases its offset.
///
/// Cursors may be moved outside of the sequence; getting the element then
/// fails with [`error::Error::OutOfRange`].
pub struct Cursor<'a, B: ?Sized + Message, const REVERSE: bool> {
    sequence: &'a dyn MessageSequence<B>,
    offset: usize,
}

static_assertions::assert_impl_all!(Cursor<'static, u8, false>: Copy, PartialEq, PartialOrd);
static_assertions::assert_impl_all!(Cursor<'static, u8, true>: Copy, PartialEq, PartialOrd);

impl<'a, B: ?Sized + Message, const REVERSE: bool> Cursor<'a, B, REVERSE> {
    pub(crate) fn new(sequence: &'a dyn MessageSequence<B>, offset: usize) -> Self {
        Self { sequence, offset }
    }

    /// The sequence this cursor moves over.
    pub fn sequence(&self) -> &'a dyn MessageSequence<B> {
        self.sequence
    }

    /// The raw offset of this cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The index of the element this cursor designates.
    pub fn position(&self) -> usize {
        if REVERSE {
            self.offset.wrapping_sub(1)
        } else {
            self.offset
        }
    }

    /// Move the cursor `delta` steps in its direction of travel.
    pub fn advance(&mut self, delta: isize) -> &mut Self {
        let delta = if REVERSE { delta.wrapping_neg() } else { delta };
        self.offset = self.offset.wrapping_add_signed(delta);
        self
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.advance(1)
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.advance(-1)
    }

    /// Get the element this cursor designates.
    pub fn get(&self) -> error::Result<&'a B> {
        self.sequence.get(self.position())
    }

    // a sequence nested at the start of another shares its address, so the
    // concrete type has to match as well
    fn same_sequence(&self, other: &Self) -> bool {
        std::ptr::from_ref(self.sequence).cast::<()>()
            == std::ptr::from_ref(other.sequence).cast::<()>()
            && self.sequence.as_any_sequence().type_id()
                == other.sequence.as_any_sequence().type_id()
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> Clone for Cursor<'_, B, REVERSE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> Copy for Cursor<'_, B, REVERSE> {}

impl<B: ?Sized + Message, const REVERSE: bool> PartialEq for Cursor<'_, B, REVERSE> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other) && self.offset == other.offset
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> Eq for Cursor<'_, B, REVERSE> {}

impl<B: ?Sized + Message, const REVERSE: bool> PartialOrd for Cursor<'_, B, REVERSE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_sequence(other) {
            return None;
        }
        let ordering = self.offset.cmp(&other.offset);
        Some(if REVERSE {
            ordering.reverse()
        } else {
            ordering
        })
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> AddAssign<isize> for Cursor<'_, B, REVERSE> {
    fn add_assign(&mut self, delta: isize) {
        self.advance(delta);
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> SubAssign<isize> for Cursor<'_, B, REVERSE> {
    fn sub_assign(&mut self, delta: isize) {
        self.advance(delta.wrapping_neg());
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> Add<isize> for Cursor<'_, B, REVERSE> {
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self += delta;
        self
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> Sub<isize> for Cursor<'_, B, REVERSE> {
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self -= delta;
        self
    }
}

/// The number of steps from `other` to `self`.
impl<B: ?Sized + Message, const REVERSE: bool> Sub for Cursor<'_, B, REVERSE> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        let distance = self.offset.wrapping_sub(other.offset) as isize;
        if REVERSE {
            distance.wrapping_neg()
        } else {
            distance
        }
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> fmt::Debug for Cursor<'_, B, REVERSE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("reverse", &REVERSE)
            .finish()
    }
}

/// A forward cursor with exclusive access to a [`MessageSequence`].
///
/// Unlike [`Cursor`] it cannot be copied, since it hands out mutable
/// references to the elements.
pub struct CursorMut<'a, B: ?Sized + Message> {
    sequence: &'a mut dyn MessageSequence<B>,
    offset: usize,
}

static_assertions::assert_not_impl_any!(CursorMut<'static, u8>: Clone);

impl<'a, B: ?Sized + Message> CursorMut<'a, B> {
    pub(crate) fn new(sequence: &'a mut dyn MessageSequence<B>, offset: usize) -> Self {
        Self { sequence, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn advance(&mut self, delta: isize) -> &mut Self {
        self.offset = self.offset.wrapping_add_signed(delta);
        self
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.advance(1)
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.advance(-1)
    }

    /// Check whether the cursor is at the end of the sequence.
    pub fn is_end(&self) -> bool {
        self.offset == self.sequence.len()
    }

    pub fn get(&self) -> error::Result<&B> {
        self.sequence.get(self.offset)
    }

    pub fn get_mut(&mut self) -> error::Result<&mut B> {
        self.sequence.get_mut(self.offset)
    }
}

impl<B: ?Sized + Message> fmt::Debug for CursorMut<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("offset", &self.offset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::MessageVec;

    fn numbers() -> MessageVec<u32, u32> {
        MessageVec::from(vec![10, 20, 30, 40])
    }

    #[test]
    fn test_forward_steps() {
        let vec = numbers();
        let sequence = vec.as_sequence();
        let mut cursor = sequence.begin();
        assert_eq!(cursor.get(), Ok(&10));
        cursor.move_next();
        assert_eq!(cursor.get(), Ok(&20));
        cursor += 2;
        assert_eq!(cursor.get(), Ok(&40));
        cursor -= 3;
        assert_eq!(cursor.get(), Ok(&10));
    }

    #[test]
    fn test_reverse_steps() {
        let vec = numbers();
        let sequence = vec.as_sequence();
        let mut cursor = sequence.rbegin();
        assert_eq!(cursor.get(), Ok(&40));
        cursor.move_next();
        assert_eq!(cursor.get(), Ok(&30));
        cursor += 2;
        assert_eq!(cursor.get(), Ok(&10));
        cursor.move_next();
        assert_eq!(cursor, sequence.rend());
        cursor.move_prev();
        assert_eq!(cursor.get(), Ok(&10));
    }

    #[test]
    fn test_arithmetic() {
        let vec = numbers();
        let sequence = vec.as_sequence();
        assert_eq!(sequence.end() - sequence.begin(), 4);
        assert_eq!(sequence.rend() - sequence.rbegin(), 4);
        assert_eq!((sequence.begin() + 3).get(), Ok(&40));
        assert_eq!((sequence.end() - 1).get(), Ok(&40));
        assert_eq!((sequence.rbegin() + 3).get(), Ok(&10));
        assert_eq!(sequence.begin() + 4, sequence.end());
    }

    #[test]
    fn test_end_is_not_dereferenceable() {
        let vec = numbers();
        let sequence = vec.as_sequence();
        assert_eq!(
            sequence.end().get(),
            Err(error::Error::OutOfRange { index: 4, len: 4 })
        );
        assert!(sequence.rend().get().is_err());
        assert!((sequence.begin() - 1).get().is_err());
    }

    #[test]
    fn test_ordering() {
        let vec = numbers();
        let sequence = vec.as_sequence();
        assert!(sequence.begin() < sequence.end());
        assert!(sequence.rbegin() < sequence.rend());
        assert!(sequence.begin() + 2 > sequence.begin() + 1);
    }

    #[test]
    fn test_different_sequences_are_unequal() {
        let a = numbers();
        let b = numbers();
        let a = a.as_sequence();
        let b = b.as_sequence();
        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);
    }

    struct Nested {
        inner: MessageVec<u32, u32>,
    }

    impl MessageSequence<u32> for Nested {
        fn len(&self) -> usize {
            0
        }

        fn capacity(&self) -> usize {
            0
        }

        fn clear(&mut self) {}

        fn reserve(&mut self, _capacity: usize) {}

        fn get(&self, index: usize) -> error::Result<&u32> {
            Err(error::Error::OutOfRange { index, len: 0 })
        }

        fn get_mut(&mut self, index: usize) -> error::Result<&mut u32> {
            Err(error::Error::OutOfRange { index, len: 0 })
        }

        fn push_back(&mut self, _element: &u32) -> error::Result<()> {
            Err(error::Error::NotFound)
        }

        fn push_back_boxed(&mut self, _element: Box<u32>) -> error::Result<()> {
            Err(error::Error::NotFound)
        }

        fn as_any_sequence(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_nested_sequence_at_same_address_is_different() {
        let nested = Nested { inner: numbers() };
        let outer: &dyn MessageSequence<u32> = &nested;
        let inner = nested.inner.as_sequence();
        assert_ne!(outer.begin(), inner.begin());
        assert_eq!(outer.begin().partial_cmp(&inner.begin()), None);
        assert_eq!(outer.iter().count(), 0);
        assert_eq!(inner.iter().count(), 4);
    }

    #[test]
    fn test_cursor_mut() {
        let mut vec = numbers();
        {
            let mut cursor = vec.as_sequence_mut().cursor_mut();
            while !cursor.is_end() {
                *cursor.get_mut().unwrap() += 1;
                cursor.move_next();
            }
            assert!(cursor.get_mut().is_err());
        }
        assert_eq!(vec.as_slice(), &[11, 21, 31, 41]);
    }
}
