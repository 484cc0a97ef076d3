//! Error types for the editor core.

use std::fmt;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for surface, selection and rule operations.
#[derive(Debug)]
pub enum Error {
    /// A node reference no longer belongs to the surface tree.
    DetachedNode,
    /// An in-node offset past the end of the node.
    InvalidOffset { offset: usize, len: usize },
    /// The host surface refused a selection change.
    SelectionRejected(String),
    /// A URL rule pattern failed to compile.
    InvalidPattern(regex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DetachedNode => write!(f, "node is detached from the surface"),
            Self::InvalidOffset { offset, len } => {
                write!(f, "offset {offset} out of bounds for node of length {len}")
            }
            Self::SelectionRejected(reason) => write!(f, "selection rejected: {reason}"),
            Self::InvalidPattern(e) => write!(f, "invalid url pattern: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::InvalidPattern(e)
    }
}
