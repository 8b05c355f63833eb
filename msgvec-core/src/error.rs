use strum::EnumMessage;
use strum_macros::{EnumMessage, IntoStaticStr};
use thiserror::Error;

/// Errors reported by sequence operations.
///
/// Every error is local to the operation that detected it: the sequence is
/// left in a valid state and can keep being used.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumMessage, IntoStaticStr)]
pub enum Error {
    /// Index out of range.
    ///
    /// Indexed access requires an index smaller than the length of the
    /// sequence. The end position can be compared against but never
    /// dereferenced.
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Element not found.
    ///
    /// No element of the sequence satisfies the predicate. An empty sequence
    /// never contains a match.
    #[error("no element satisfies the predicate")]
    NotFound,
    /// Type mismatch.
    ///
    /// The runtime type of an element handed to the sequence is not the type
    /// the sequence stores. The sequence is unchanged.
    #[error("expected an element of type `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn type_mismatch<D>(found: &'static str) -> Self {
        Error::TypeMismatch {
            expected: std::any::type_name::<D>(),
            found,
        }
    }

    /// A stable name for the kind of error.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// One line summary of the error kind.
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    /// Longer explanation of the error kind.
    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("");
            let second = pieces.next().unwrap_or("");
            (first, second)
        } else {
            ("", "")
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
