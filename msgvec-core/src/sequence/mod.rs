//! Sequences of messages behind a common base type.
//!
//! [`MessageSequence`] is the interface callers program against.
//! [`MessageVec`] implements it with dense typed storage.
mod cursor;
mod iter;
mod traits;
mod vec;

pub use cursor::{Cursor, CursorMut};
pub use iter::{Iter, RevIter};
pub use traits::MessageSequence;
pub use vec::MessageVec;
