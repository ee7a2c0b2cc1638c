use crate::TreeKind;
use std::error;
use std::fmt;
use std::result;

/// Errors returned when a tree is driven through its dynamic interface or configured from strings.
///
/// A missing key is never an error: `search` and `delete` report absence with `false`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The tree kind does not implement the operation.
    UnsupportedOperation {
        kind: TreeKind,
        operation: &'static str,
    },
    /// The string does not name a tree kind.
    UnknownTreeKind(String),
    /// The string does not name a traversal order.
    UnknownTraversal(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedOperation { kind, operation } => {
                write!(f, "{} does not support `{}`", kind, operation)
            },
            Error::UnknownTreeKind(name) => write!(f, "unknown tree kind `{}`", name),
            Error::UnknownTraversal(name) => write!(f, "unknown traversal order `{}`", name),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
