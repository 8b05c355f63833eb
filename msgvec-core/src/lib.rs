pub mod error;
mod message;
pub mod sequence;

pub use error::{Error, Result};
pub use message::{Message, Upcast};
pub use sequence::{Cursor, CursorMut, Iter, MessageSequence, MessageVec, RevIter};
