use std::any::Any;
use std::ops::Index;

use crate::error;
use crate::message::Message;

use super::cursor::{Cursor, CursorMut};
use super::iter::{Iter, RevIter};

/// The core sequence interface over a base message type `B`.
///
/// Implementations keep their elements in whatever layout they like; callers
/// only ever see `B`. The search and cursor APIs are implemented once on
/// `dyn MessageSequence<B>` in terms of these methods, so they behave the
/// same for every implementation.
pub trait MessageSequence<B: ?Sized + Message> {
    /// Get the number of elements
    fn len(&self) -> usize;

    /// Get the number of elements the sequence can hold without reallocating
    fn capacity(&self) -> usize;

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements.
    fn clear(&mut self);

    /// Make sure the capacity is at least `capacity`.
    ///
    /// Length, values and order of the elements are unchanged.
    fn reserve(&mut self, capacity: usize);

    /// Get the element at `index`
    fn get(&self, index: usize) -> error::Result<&B>;

    /// Get the element at `index` mutably
    fn get_mut(&mut self, index: usize) -> error::Result<&mut B>;

    /// Append a copy of `element`.
    ///
    /// Fails with [`error::Error::TypeMismatch`] if the runtime type of
    /// `element` is not the type this sequence stores.
    fn push_back(&mut self, element: &B) -> error::Result<()>;

    /// Append `element`, moving it into the sequence.
    ///
    /// Fails with [`error::Error::TypeMismatch`] if the runtime type of
    /// `element` is not the type this sequence stores. The rejected element
    /// is dropped.
    fn push_back_boxed(&mut self, element: Box<B>) -> error::Result<()>;

    /// Access the concrete sequence for capability queries.
    fn as_any_sequence(&self) -> &dyn Any;
}

impl<'s, B: ?Sized + Message> dyn MessageSequence<B> + 's {
    /// A cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, B, false> {
        Cursor::new(self, 0)
    }

    /// A cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, B, false> {
        Cursor::new(self, self.len())
    }

    /// A reverse cursor at the last element.
    pub fn rbegin(&self) -> Cursor<'_, B, true> {
        Cursor::new(self, self.len())
    }

    /// A reverse cursor one before the first element.
    pub fn rend(&self) -> Cursor<'_, B, true> {
        Cursor::new(self, 0)
    }

    /// A mutable cursor at the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, B> {
        CursorMut::new(self, 0)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(self.begin(), self.end())
    }

    /// Iterate over the elements from last to first.
    pub fn iter_rev(&self) -> RevIter<'_, B> {
        Iter::new(self.rbegin(), self.rend())
    }

    /// Find the first element, in forward order, for which `predicate`
    /// holds.
    pub fn find_if<P>(&self, mut predicate: P) -> error::Result<&B>
    where
        P: FnMut(&B) -> bool,
    {
        let end = self.end();
        let mut cursor = self.begin();
        while cursor != end {
            let element = cursor.get()?;
            if predicate(element) {
                return Ok(element);
            }
            cursor.move_next();
        }
        Err(error::Error::NotFound)
    }

    /// Find the position of the first element for which `predicate` holds.
    pub fn position_if<P>(&self, mut predicate: P) -> error::Result<usize>
    where
        P: FnMut(&B) -> bool,
    {
        let end = self.end();
        let mut cursor = self.begin();
        while cursor != end {
            if predicate(cursor.get()?) {
                return Ok(cursor.offset());
            }
            cursor += 1;
        }
        Err(error::Error::NotFound)
    }

    /// Find the first element for which `predicate` holds, mutably.
    pub fn find_if_mut<P>(&mut self, predicate: P) -> error::Result<&mut B>
    where
        P: FnMut(&B) -> bool,
    {
        let index = self.position_if(predicate)?;
        self.get_mut(index)
    }
}

impl<'s, B: ?Sized + Message> Index<usize> for dyn MessageSequence<B> + 's {
    type Output = B;

    fn index(&self, index: usize) -> &B {
        match self.get(index) {
            Ok(element) => element,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 's, B: ?Sized + Message> IntoIterator for &'a (dyn MessageSequence<B> + 's) {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Iter<'a, B> {
        self.iter()
    }
}
