//! In-memory implementation of a random-access byte store.

use log::trace;

use crate::error::{StoreError, StoreResult};
use crate::store::{ByteStore, ReadOutcome, SeekOrigin, StoreStat};

// =#========================================================================#=
// MEMORY STORE
// =#========================================================================$=
/// A growable byte store that owns its data.
///
/// Reads past the end report [ReadOutcome::EndOfStream]. Writes past the end
/// extend the data, zero-filling any gap left by seeking beyond it. An optional
/// capacity limit makes the store behave like a full medium once reached.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// The owned byte data
    data: Vec<u8>,
    /// Cursor shared by reads and writes
    pos: u64,
    /// Maximum size the data may grow to
    capacity: Option<u64>,
    /// Number of successful commits
    commits: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `bytes`, with the cursor at the start.
    ///
    /// # Arguments
    /// * `bytes` - Initial content of the store
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            data: bytes,
            ..Self::default()
        }
    }

    /// Limits the store to `capacity` bytes; writes beyond it fail.
    pub fn with_capacity_limit(mut self, capacity: u64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Returns the stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the store and returns its bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Returns the current cursor position.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Returns how often [commit](ByteStore::commit) succeeded.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    fn len(&self) -> u64 {
        self.data.len() as u64
    }
}

impl ByteStore for MemoryStore {
    fn read(&mut self, buf: &mut [u8]) -> StoreResult<ReadOutcome> {
        let start = self.pos.min(self.len()) as usize;
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        self.pos += n as u64;

        if n == buf.len() {
            Ok(ReadOutcome::Complete(n))
        } else {
            Ok(ReadOutcome::EndOfStream(n))
        }
    }

    fn write(&mut self, buf: &[u8]) -> StoreResult<usize> {
        let room = match self.capacity {
            Some(capacity) => capacity.saturating_sub(self.pos),
            None => u64::MAX,
        };
        if room == 0 && !buf.is_empty() {
            return Err(StoreError::Full {
                capacity: self.capacity.unwrap_or(u64::MAX),
            });
        }

        let n = (buf.len() as u64).min(room) as usize;
        let end = usize::try_from(self.pos)
            .ok()
            .and_then(|start| start.checked_add(n))
            .ok_or_else(|| {
                StoreError::Other(format!("cannot write {n} bytes at {}", self.pos))
            })?;
        let start = end - n;
        if end > self.data.len() {
            self.data
                .try_reserve(end - self.data.len())
                .map_err(|err| {
                    StoreError::Other(format!("cannot grow store to {end} bytes: {err}"))
                })?;
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(&buf[..n]);
        self.pos = end as u64;
        Ok(n)
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> StoreResult<u64> {
        let target = origin
            .resolve(offset, self.pos, self.len())
            .ok_or(StoreError::InvalidSeek { offset, origin })?;
        self.pos = target;
        Ok(target)
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.commits += 1;
        trace!("Committed memory store ({} bytes)", self.data.len());
        Ok(())
    }

    fn stat(&self) -> StoreResult<StoreStat> {
        Ok(StoreStat { size: self.len() })
    }
}
