//! File-backed implementation of a random-access byte store.
//!
//! This module provides [FileStore], which exposes a [File] through the
//! [ByteStore] trait. No buffering happens on this side either: every store
//! call is a single call on the file.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::trace;

use crate::error::{StoreError, StoreResult};
use crate::open_mode::OpenMode;
use crate::store::{ByteStore, ReadOutcome, SeekOrigin, StoreStat};

// =#========================================================================#=
// FILE STORE
// =#========================================================================$=
/// A byte store backed by a file on disk.
///
/// A read returning fewer bytes than requested is reported as
/// [ReadOutcome::EndOfStream], which holds for regular files.
#[derive(Debug)]
pub struct FileStore {
    file: File,
}

impl FileStore {
    /// Opens the file at `path` for the directions in `mode`.
    ///
    /// A mode including [WRITE](OpenMode::WRITE) creates the file if it does
    /// not exist yet.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> StoreResult<FileStore> {
        trace!("Opening file store {} ({:?})", path.as_ref().display(), mode);
        let file = OpenOptions::new()
            .read(mode.is_read())
            .write(mode.is_write())
            .create(mode.is_write())
            .open(path)?;
        Ok(Self { file })
    }

    /// Wraps an already opened file.
    pub fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Consumes the store and returns the file.
    pub fn into_inner(self) -> File {
        self.file
    }
}

impl ByteStore for FileStore {
    fn read(&mut self, buf: &mut [u8]) -> StoreResult<ReadOutcome> {
        let n = self.file.read(buf)?;
        if n == buf.len() {
            Ok(ReadOutcome::Complete(n))
        } else {
            Ok(ReadOutcome::EndOfStream(n))
        }
    }

    fn write(&mut self, buf: &[u8]) -> StoreResult<usize> {
        Ok(self.file.write(buf)?)
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> StoreResult<u64> {
        let pos = match origin {
            SeekOrigin::Start => {
                let start =
                    u64::try_from(offset).map_err(|_| StoreError::InvalidSeek { offset, origin })?;
                SeekFrom::Start(start)
            }
            SeekOrigin::Current => SeekFrom::Current(offset),
            SeekOrigin::End => SeekFrom::End(offset),
        };
        Ok(self.file.seek(pos)?)
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }

    fn stat(&self) -> StoreResult<StoreStat> {
        let size = self.file.metadata()?.len();
        Ok(StoreStat { size })
    }
}
