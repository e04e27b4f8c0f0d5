//! Error types for byte stores and the stream adapter.
//!
//! [StoreError] is what a [ByteStore](crate::store::ByteStore) reports for a
//! failed operation. [StreamError] is what the adapter reports where its
//! interface allows more than a bare sentinel.

use crate::store::SeekOrigin;
use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result alias for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

// =#========================================================================#=
// STORE ERROR
// =#========================================================================$=
/// Failure of a single operation on a random-access byte store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store is full (capacity {capacity} bytes)")]
    Full { capacity: u64 },
    /// The store no longer accepts operations. Not produced by the stores in
    /// this crate; available to other [ByteStore](crate::store::ByteStore)
    /// implementations.
    #[error("Store is closed")]
    Closed,
    #[error("Invalid seek by {offset} from {origin:?}")]
    InvalidSeek { offset: i64, origin: SeekOrigin },
    #[error("Store error: {0}")]
    Other(String),
}

// =#========================================================================#=
// STREAM ERROR
// =#========================================================================$=
/// Failure of a stream operation.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Produced by [peek_unit](crate::StreamAdapter::peek_unit) when the byte
    /// was read but the cursor could not be moved back over it.
    #[error("Could not move back one byte after reading")]
    Rewind(#[source] StoreError),
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        Self::Store(StoreError::Io(err))
    }
}

impl From<StreamError> for std::io::Error {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Store(StoreError::Io(io)) => io,
            other => std::io::Error::other(other),
        }
    }
}

impl From<StoreError> for std::io::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(io) => io,
            other => std::io::Error::other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_passes_through() {
        let err = StreamError::from(std::io::Error::new(ErrorKind::NotFound, "gone"));
        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_store_error_becomes_other() {
        let io: std::io::Error = StoreError::Full { capacity: 4 }.into();
        assert_eq!(io.kind(), ErrorKind::Other);
        assert!(io.to_string().contains("capacity 4"));
    }
}
