use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::error;
use crate::message::{downcast_box, downcast_ref, Message, Upcast};

use super::traits::MessageSequence;

/// A dense sequence of `D` values, usable as a sequence of `B`.
///
/// Elements are stored directly in a `Vec<D>`, without boxing. Through the
/// [`MessageSequence`] interface they are seen as `B`; elements coming in
/// through that interface are checked to really be `D`.
///
/// ```
/// use msgvec_core::{upcast, Message, MessageSequence, MessageVec};
///
/// trait Shape: Message {
///     fn sides(&self) -> u32;
/// }
///
/// #[derive(Clone)]
/// struct Square;
///
/// impl Shape for Square {
///     fn sides(&self) -> u32 {
///         4
///     }
/// }
///
/// upcast!(Shape => Square);
///
/// let mut squares: MessageVec<dyn Shape, Square> = MessageVec::new();
/// squares.push_back(&Square).unwrap();
///
/// let shapes: &dyn MessageSequence<dyn Shape> = &squares;
/// assert_eq!(shapes[0].sides(), 4);
/// ```
pub struct MessageVec<B: ?Sized, D> {
    data: Vec<D>,
    base: PhantomData<fn(&B)>,
}

impl<B: ?Sized, D> MessageVec<B, D> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    /// Append an element that is statically known to be a `D`.
    pub fn push(&mut self, element: D) {
        self.data.push(element);
    }

    pub fn as_slice(&self) -> &[D] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [D] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<D> {
        self.data
    }

    /// Find the first element for which `predicate` holds, seen as `D`.
    pub fn find<P>(&self, mut predicate: P) -> error::Result<&D>
    where
        P: FnMut(&D) -> bool,
    {
        self.data
            .iter()
            .find(|element| predicate(element))
            .ok_or(error::Error::NotFound)
    }
}

impl<B, D> MessageVec<B, D>
where
    B: ?Sized + Message,
    D: Message + Upcast<B> + Clone,
{
    /// View this vector through the base interface.
    pub fn as_sequence(&self) -> &dyn MessageSequence<B> {
        self
    }

    /// View this vector through the base interface, mutably.
    pub fn as_sequence_mut(&mut self) -> &mut dyn MessageSequence<B> {
        self
    }

    /// Replace the contents with copies of the elements of `other`.
    ///
    /// If `other` is a `MessageVec<B, D>` as well, its storage is copied
    /// directly. Otherwise each element is checked to be a `D`; if one is
    /// not, a [`error::Error::TypeMismatch`] is returned and the contents of
    /// `self` are left as they were.
    pub fn assign(&mut self, other: &dyn MessageSequence<B>) -> error::Result<()> {
        if let Some(other) = other.as_any_sequence().downcast_ref::<Self>() {
            self.data.clone_from(&other.data);
            return Ok(());
        }
        let mut data = Vec::with_capacity(other.len());
        for element in other {
            data.push(downcast_ref::<B, D>(element)?.clone());
        }
        self.data = data;
        Ok(())
    }
}

impl<B, D> MessageSequence<B> for MessageVec<B, D>
where
    B: ?Sized + Message,
    D: Message + Upcast<B> + Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn clear(&mut self) {
        self.data.clear()
    }

    fn reserve(&mut self, capacity: usize) {
        self.data
            .reserve(capacity.saturating_sub(self.data.len()))
    }

    #[inline]
    fn get(&self, index: usize) -> error::Result<&B> {
        let len = self.data.len();
        self.data
            .get(index)
            .map(<D as Upcast<B>>::upcast)
            .ok_or(error::Error::OutOfRange { index, len })
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> error::Result<&mut B> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .map(<D as Upcast<B>>::upcast_mut)
            .ok_or(error::Error::OutOfRange { index, len })
    }

    fn push_back(&mut self, element: &B) -> error::Result<()> {
        let element = downcast_ref::<B, D>(element)?;
        self.data.push(element.clone());
        Ok(())
    }

    fn push_back_boxed(&mut self, element: Box<B>) -> error::Result<()> {
        let element = downcast_box::<B, D>(element)?;
        self.data.push(element);
        Ok(())
    }

    fn as_any_sequence(&self) -> &dyn Any {
        self
    }
}

impl<B: ?Sized, D> From<Vec<D>> for MessageVec<B, D> {
    fn from(data: Vec<D>) -> Self {
        Self {
            data,
            base: PhantomData,
        }
    }
}

impl<B: ?Sized, D> Default for MessageVec<B, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized, D: Clone> Clone for MessageVec<B, D> {
    fn clone(&self) -> Self {
        Self::from(self.data.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data)
    }
}

impl<B: ?Sized, D: fmt::Debug> fmt::Debug for MessageVec<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<B: ?Sized, D: PartialEq> PartialEq for MessageVec<B, D> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<B: ?Sized, D: Eq> Eq for MessageVec<B, D> {}

impl<B: ?Sized, D> FromIterator<D> for MessageVec<B, D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<B: ?Sized, D> Extend<D> for MessageVec<B, D> {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.data.extend(iter)
    }
}

impl<B: ?Sized, D> IntoIterator for MessageVec<B, D> {
    type Item = D;
    type IntoIter = std::vec::IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, B: ?Sized, D> IntoIterator for &'a MessageVec<B, D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Typed indexing; panics when out of range, like `Vec`.
impl<B: ?Sized, D> Index<usize> for MessageVec<B, D> {
    type Output = D;

    fn index(&self, index: usize) -> &D {
        &self.data[index]
    }
}

impl<B: ?Sized, D> IndexMut<usize> for MessageVec<B, D> {
    fn index_mut(&mut self, index: usize) -> &mut D {
        &mut self.data[index]
    }
}
