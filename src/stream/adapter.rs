//! Unbuffered, bidirectional stream adapter over a [ByteStore].
//!
//! The adapter keeps no bytes of its own. Looking ahead and pushing back are
//! both done by moving the store's cursor back one byte after a read, so the
//! store stays the only source of truth for data and position.

use log::{debug, trace};

use crate::error::{Result, StoreError, StoreResult, StreamError};
use crate::open_mode::OpenMode;
use crate::store::{ByteStore, ReadOutcome, SeekOrigin};
use crate::stream::byte_stream::ByteStream;

// =#========================================================================#=
// STREAM ADAPTER
// =#========================================================================$=
/// A [ByteStream] that passes every operation straight through to a borrowed
/// [ByteStore].
///
/// The store is borrowed, never owned: the adapter does not open or close it.
/// When the adapter is dropped it commits the store once, unless it was opened
/// read-only, and ignores the outcome. Use [finish](StreamAdapter::finish) to
/// observe that final commit instead.
///
/// Each operation issues a single store call, except
/// [peek_byte](ByteStream::peek_byte) and [available](ByteStream::available)
/// which issue two. Nothing is retried.
///
/// # Example
/// ```
/// use seekbuf::{ByteStream, MemoryStore, OpenMode, StreamAdapter};
///
/// let mut store = MemoryStore::from_vec(b"kakapo".to_vec());
/// let mut stream = StreamAdapter::new(&mut store, OpenMode::READ);
///
/// assert_eq!(stream.peek_byte(), Some(b'k'));
/// assert_eq!(stream.next_byte(), Some(b'k'));
/// assert_eq!(stream.next_byte(), Some(b'a'));
/// assert_eq!(stream.unget_byte(Some(b'a')), Some(b'a'));
/// assert_eq!(stream.next_byte(), Some(b'a'));
/// ```
pub struct StreamAdapter<'a, S: ByteStore + ?Sized> {
    /// Borrowed store holding all data and the single cursor
    store: &'a mut S,
    /// Set unless opened read-only, cleared once [finish](StreamAdapter::finish) committed
    commit_on_drop: bool,
}

impl<'a, S: ByteStore + ?Sized> StreamAdapter<'a, S> {
    /// Attaches a stream to `store`.
    ///
    /// # Arguments
    /// * `store` - The store to read from and write to
    /// * `mode` - Requested directions; without write the stream is read-only
    pub fn new(store: &'a mut S, mode: OpenMode) -> Self {
        trace!("Attaching stream adapter ({:?})", mode);
        Self {
            store,
            commit_on_drop: !mode.is_read_only(),
        }
    }

    /// Returns `true` if the stream was opened without write access.
    pub fn is_read_only(&self) -> bool {
        !self.commit_on_drop
    }

    /// Returns a reference to the underlying store.
    pub fn get_ref(&self) -> &S {
        &*self.store
    }

    /// Returns a mutable reference to the underlying store.
    ///
    /// Moving the store's cursor moves the stream's position as well.
    pub fn get_mut(&mut self) -> &mut S {
        &mut *self.store
    }

    /// Consumes the next byte, keeping end of stream and failure apart.
    ///
    /// # Returns
    /// * `Ok(Some(u8))` - The consumed byte
    /// * `Ok(None)` - The store is at its end
    /// * `Err(StreamError)` - The store failed
    pub fn next_unit(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.store.read(&mut buf)? {
            ReadOutcome::Complete(1) => Ok(Some(buf[0])),
            _ => Ok(None),
        }
    }

    /// Returns the next byte without consuming it, keeping end of stream,
    /// read failure and rewind failure apart.
    ///
    /// # Returns
    /// * `Ok(Some(u8))` - The next byte; the position is unchanged
    /// * `Ok(None)` - The store is at its end
    /// * `Err(StreamError::Store)` - The read failed; the position is unchanged
    /// * `Err(StreamError::Rewind)` - The byte was read but moving back failed,
    ///   so the position is one byte ahead
    pub fn peek_unit(&mut self) -> Result<Option<u8>> {
        let Some(byte) = self.next_unit()? else {
            return Ok(None);
        };
        self.rewind().map_err(StreamError::Rewind)?;
        Ok(Some(byte))
    }

    /// Commits the store unless read-only and detaches, reporting the outcome.
    ///
    /// No further commit happens on drop.
    pub fn finish(mut self) -> Result<()> {
        let result = if self.commit_on_drop { self.sync() } else { Ok(()) };
        self.commit_on_drop = false;
        trace!("Detaching stream adapter");
        result
    }

    /// Moves the store's cursor back over the byte just read.
    fn rewind(&mut self) -> StoreResult<()> {
        self.store.seek(-1, SeekOrigin::Current).map(|_| ())
    }
}

impl<S: ByteStore + ?Sized> ByteStream for StreamAdapter<'_, S> {
    fn put_byte(&mut self, byte: u8) -> Option<u8> {
        match self.store.write(&[byte]) {
            Ok(1) => Some(byte),
            _ => None,
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        self.peek_unit().ok().flatten()
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.next_unit().ok().flatten()
    }

    fn unget_byte(&mut self, byte: Option<u8>) -> Option<u8> {
        let byte = byte?;
        self.rewind().ok()?;
        Some(byte)
    }

    fn sync(&mut self) -> Result<()> {
        Ok(self.store.commit()?)
    }

    fn seek_to(&mut self, pos: u64) -> Result<u64> {
        let offset = i64::try_from(pos)
            .map_err(|_| StoreError::Other(format!("position {pos} out of range")))?;
        Ok(self.store.seek(offset, SeekOrigin::Start)?)
    }

    fn seek_by(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64> {
        Ok(self.store.seek(offset, origin)?)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        self.store.read(buf).map(ReadOutcome::count).unwrap_or(0)
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        self.store.write(buf).unwrap_or(0)
    }

    fn available(&mut self) -> usize {
        let Ok(stat) = self.store.stat() else {
            return 0;
        };
        let Ok(pos) = self.store.seek(0, SeekOrigin::Current) else {
            return 0;
        };
        let left = stat.size.saturating_sub(1).saturating_sub(pos);
        usize::try_from(left).unwrap_or(usize::MAX)
    }
}

impl<S: ByteStore + ?Sized> Drop for StreamAdapter<'_, S> {
    fn drop(&mut self) {
        if !self.commit_on_drop {
            return;
        }
        if let Err(err) = self.sync() {
            debug!("Ignoring failed commit on teardown: {err}");
        }
    }
}

/// Attaches a boxed [ByteStream] to `store`.
///
/// # Arguments
/// * `store` - The store to read from and write to
/// * `mode` - Requested directions; without write the stream is read-only
pub fn stream_from_store<'a, S: ByteStore + ?Sized>(
    store: &'a mut S,
    mode: OpenMode,
) -> Box<dyn ByteStream + 'a> {
    Box::new(StreamAdapter::new(store, mode))
}
