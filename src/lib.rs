//! Seekbuf is a library exposing random-access byte stores as unbuffered,
//! bidirectional byte streams.
//!
//! The core is [StreamAdapter], which turns any [ByteStore] (positioned read,
//! write, seek, commit and size query over one shared cursor) into a
//! [ByteStream] offering:
//! - Single byte write, peek, read and push back
//! - Bulk read and write
//! - Absolute and relative seeking
//! - Commit (sync) and an estimate of the bytes left to read
//!
//! The adapter holds no buffer at all, only a borrow of the store and a
//! read-only flag. Peeking and pushing back are done by reading and then
//! moving the store's own cursor back one byte. This trades throughput for a
//! stream whose position always equals the store's.
//!
//! Store implementations provided:
//! - [MemoryStore]: growable in-memory store, optionally capacity limited
//! - [FileStore]: store backed by a file on disk
//!
//! Limitations:
//! - Pushback only steps back over bytes already in the store; a substituted
//!   value is not kept.
//! - Single byte reads do not tell end of stream from failure; use
//!   [StreamAdapter::next_unit] and [StreamAdapter::peek_unit] where that matters.
//! - Not for concurrent use; the store's single cursor is shared state.
//!
//! # Example
//! ```
//! use seekbuf::{ByteStream, MemoryStore, OpenMode, SeekOrigin, StreamAdapter};
//!
//! let mut store = MemoryStore::new();
//! {
//!     let mut stream = StreamAdapter::new(&mut store, OpenMode::READ_WRITE);
//!     assert_eq!(stream.write_bytes(b"kotare"), 6);
//!     assert_eq!(stream.seek_by(0, SeekOrigin::Start).unwrap(), 0);
//!     assert_eq!(stream.peek_byte(), Some(b'k'));
//!     assert_eq!(stream.available(), 5);
//! } // commits the store
//!
//! assert_eq!(store.commit_count(), 1);
//! ```

pub mod error;
pub mod open_mode;
pub mod store;
pub mod stream;

pub use error::{StoreError, StreamError};
pub use open_mode::OpenMode;
pub use store::{ByteStore, FileStore, MemoryStore, ReadOutcome, SeekOrigin, StoreStat};
pub use stream::{ByteStream, StreamAdapter, stream_from_store};
