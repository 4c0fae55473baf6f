//! Error types shared by the lists and the batch loader.

use std::error::Error;
use std::fmt;
use std::ops::Range;

/// An index-based access fell outside the range the operation accepts.
///
/// Reads and removals accept `0..len`, insertions accept `0..len + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The range of indices the operation would have accepted.
    pub valid: Range<usize>,
}

impl IndexOutOfBounds {
    pub(crate) fn new(index: usize, valid: Range<usize>) -> Self {
        IndexOutOfBounds { index, valid }
    }
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of range {}..{}",
            self.index, self.valid.start, self.valid.end
        )
    }
}

impl Error for IndexOutOfBounds {}

/// Errors raised while building a dataset or a data loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// A loader was configured with `batch_size == 0`.
    ZeroBatchSize,
    /// A dataset got a different number of per-item labels than data rows.
    LabelCountMismatch { rows: usize, labels: usize },
    /// A dataset was asked for an item it does not have.
    IndexOutOfBounds(IndexOutOfBounds),
}

impl From<IndexOutOfBounds> for LoaderError {
    fn from(err: IndexOutOfBounds) -> Self {
        LoaderError::IndexOutOfBounds(err)
    }
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::ZeroBatchSize => write!(f, "batch size must be at least 1"),
            LoaderError::LabelCountMismatch { rows, labels } => write!(
                f,
                "dataset has {} data rows but {} labels",
                rows, labels
            ),
            LoaderError::IndexOutOfBounds(err) => write!(f, "dataset access failed: {}", err),
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoaderError::IndexOutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}
