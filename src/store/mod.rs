//! Random-access byte stores.
//!
//! This module provides the [ByteStore] trait, the capability the stream
//! adapter drives, and two implementations:
//! - [MemoryStore]: growable in-memory store
//! - [FileStore]: store backed by a file on disk
pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::error::StoreResult;

// =#========================================================================#=
// SEEK ORIGIN
// =#========================================================================€=
/// Reference point for a store-level seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// From the first byte of the store
    Start,
    /// From the current cursor position
    Current,
    /// From one past the last byte of the store
    End,
}

impl SeekOrigin {
    /// Resolves `offset` against this origin into an absolute position.
    ///
    /// # Arguments
    /// * `offset` - Signed distance from the origin
    /// * `current` - Current cursor position
    /// * `size` - Total size of the store
    ///
    /// # Returns
    /// * `Some(u64)` - The absolute position
    /// * `None` - If the result would lie before position zero (or overflow)
    pub fn resolve(self, offset: i64, current: u64, size: u64) -> Option<u64> {
        let base = match self {
            SeekOrigin::Start => 0,
            SeekOrigin::Current => current,
            SeekOrigin::End => size,
        };
        base.checked_add_signed(offset)
    }
}

// =#========================================================================#=
// READ OUTCOME
// =#========================================================================€=
/// Successful outcome of a store read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The whole request was satisfied with this many bytes.
    Complete(usize),
    /// The end of the store cut the read short after this many bytes.
    EndOfStream(usize),
}

impl ReadOutcome {
    /// Number of bytes actually read, regardless of outcome.
    pub fn count(self) -> usize {
        match self {
            ReadOutcome::Complete(n) | ReadOutcome::EndOfStream(n) => n,
        }
    }
}

/// Metadata reported by [ByteStore::stat].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStat {
    /// Total length of the store in bytes
    pub size: u64,
}

// =#========================================================================#=
// BYTE STORE (Trait)
// =#========================================================================T=
/// Trait defining a random-access byte store with a single cursor.
///
/// The store owns the one and only position shared by reading and writing.
/// Every operation is a single synchronous attempt; implementations must not
/// retry internally.
pub trait ByteStore {
    /// Reads up to `buf.len()` bytes at the cursor and advances it by the
    /// number of bytes read.
    ///
    /// # Returns
    /// * `Ok(ReadOutcome::Complete(n))` - `n == buf.len()` bytes were read
    /// * `Ok(ReadOutcome::EndOfStream(n))` - Only `n < buf.len()` bytes were left
    /// * `Err(StoreError)` - The read failed
    fn read(&mut self, buf: &mut [u8]) -> StoreResult<ReadOutcome>;

    /// Writes bytes at the cursor and advances it by the number written.
    ///
    /// # Returns
    /// The number of bytes written, which may be fewer than `buf.len()`.
    fn write(&mut self, buf: &[u8]) -> StoreResult<usize>;

    /// Moves the cursor and returns the new absolute position.
    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> StoreResult<u64>;

    /// Persists previously written bytes.
    fn commit(&mut self) -> StoreResult<()>;

    /// Reports metadata about the store, most importantly its size.
    fn stat(&self) -> StoreResult<StoreStat>;
}

impl<S: ByteStore + ?Sized> ByteStore for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> StoreResult<ReadOutcome> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> StoreResult<usize> {
        (**self).write(buf)
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> StoreResult<u64> {
        (**self).seek(offset, origin)
    }

    fn commit(&mut self) -> StoreResult<()> {
        (**self).commit()
    }

    fn stat(&self) -> StoreResult<StoreStat> {
        (**self).stat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_origins() {
        assert_eq!(SeekOrigin::Start.resolve(3, 7, 10), Some(3));
        assert_eq!(SeekOrigin::Current.resolve(-2, 7, 10), Some(5));
        assert_eq!(SeekOrigin::End.resolve(-1, 7, 10), Some(9));
        assert_eq!(SeekOrigin::End.resolve(5, 7, 10), Some(15));
    }

    #[test]
    fn test_resolve_before_start() {
        assert_eq!(SeekOrigin::Start.resolve(-1, 7, 10), None);
        assert_eq!(SeekOrigin::Current.resolve(-8, 7, 10), None);
    }

    #[test]
    fn test_read_outcome_count() {
        assert_eq!(ReadOutcome::Complete(4).count(), 4);
        assert_eq!(ReadOutcome::EndOfStream(0).count(), 0);
    }
}
