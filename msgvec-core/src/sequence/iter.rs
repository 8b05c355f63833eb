use std::fmt;
use std::iter::FusedIterator;

use crate::message::Message;

use super::cursor::Cursor;

/// An iterator over the elements of a sequence, driven by a pair of cursors.
///
/// The front cursor moves towards the back cursor; iteration stops when they
/// meet.
pub struct Iter<'a, B: ?Sized + Message, const REVERSE: bool = false> {
    front: Cursor<'a, B, REVERSE>,
    back: Cursor<'a, B, REVERSE>,
}

/// An iterator over the elements of a sequence from last to first.
pub type RevIter<'a, B> = Iter<'a, B, true>;

impl<'a, B: ?Sized + Message, const REVERSE: bool> Iter<'a, B, REVERSE> {
    pub(crate) fn new(front: Cursor<'a, B, REVERSE>, back: Cursor<'a, B, REVERSE>) -> Self {
        Self { front, back }
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> Clone for Iter<'_, B, REVERSE> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, B: ?Sized + Message, const REVERSE: bool> Iterator for Iter<'a, B, REVERSE> {
    type Item = &'a B;

    fn next(&mut self) -> Option<&'a B> {
        if self.front == self.back {
            return None;
        }
        let element = self.front.get().ok();
        self.front.move_next();
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<&'a B> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front += n as isize;
        self.next()
    }
}

impl<'a, B: ?Sized + Message, const REVERSE: bool> DoubleEndedIterator for Iter<'a, B, REVERSE> {
    fn next_back(&mut self) -> Option<&'a B> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev();
        self.back.get().ok()
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> ExactSizeIterator for Iter<'_, B, REVERSE> {
    fn len(&self) -> usize {
        // the back cursor is never behind the front cursor
        (self.back - self.front) as usize
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> fmt::Debug for Iter<'_, B, REVERSE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<B: ?Sized + Message, const REVERSE: bool> FusedIterator for Iter<'_, B, REVERSE> {}
