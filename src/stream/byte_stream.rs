//! The consumer-facing byte stream abstraction.

use crate::error::Result;
use crate::store::SeekOrigin;

// =#========================================================================#=
// BYTE STREAM (Trait)
// =#========================================================================T=
/// Trait defining single-unit and bulk access to a seekable byte stream.
///
/// Single-unit operations use `None` as the one sentinel for both end of
/// stream and failure. Consumers that need to tell the two apart should use
/// [StreamAdapter::next_unit](crate::StreamAdapter::next_unit).
pub trait ByteStream {
    /// Writes one byte at the current position.
    ///
    /// # Returns
    /// * `Some(u8)` - The written byte
    /// * `None` - If the write failed
    fn put_byte(&mut self, byte: u8) -> Option<u8>;

    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data or the store failed
    fn peek_byte(&mut self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data or the store failed
    fn next_byte(&mut self) -> Option<u8>;

    /// Steps back over the previously consumed byte.
    ///
    /// Only moving back to the byte already in the stream is supported: the
    /// value passed in is not stored anywhere, so the next read returns what
    /// the stream holds at that position.
    ///
    /// # Arguments
    /// * `byte` - The byte being pushed back, `None` to signal no byte
    ///
    /// # Returns
    /// * `Some(u8)` - `byte`, if the position was moved back
    /// * `None` - If `byte` was `None` or moving back failed
    fn unget_byte(&mut self, byte: Option<u8>) -> Option<u8>;

    /// Asks the underlying storage to persist written bytes.
    fn sync(&mut self) -> Result<()>;

    /// Moves to the absolute position `pos`.
    ///
    /// # Returns
    /// The new position, equal to `pos` on success.
    fn seek_to(&mut self, pos: u64) -> Result<u64>;

    /// Moves by `offset` relative to `origin`.
    ///
    /// # Returns
    /// The resulting absolute position.
    fn seek_by(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64>;

    /// Reads up to `buf.len()` bytes into `buf` with a single underlying read.
    ///
    /// # Returns
    /// The number of bytes read, 0 on failure.
    fn read_bytes(&mut self, buf: &mut [u8]) -> usize;

    /// Writes `buf` with a single underlying write.
    ///
    /// # Returns
    /// The number of bytes written, 0 on failure.
    fn write_bytes(&mut self, buf: &[u8]) -> usize;

    /// Estimates how many bytes can still be read without blocking.
    ///
    /// This is a hint: 0 means nothing is guaranteed, not necessarily that
    /// the stream is at its end.
    fn available(&mut self) -> usize;
}
