//! [std::io] traits for [StreamAdapter].
//!
//! Each call maps to exactly one store call, so wrapping the adapter in a
//! [BufReader](std::io::BufReader) is the way to get buffering back. Store
//! failures surface as [io::Error] rather than as zero counts.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::store::{ByteStore, SeekOrigin};
use crate::stream::adapter::StreamAdapter;

impl<S: ByteStore + ?Sized> Read for StreamAdapter<'_, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.get_mut().read(buf)?.count())
    }
}

impl<S: ByteStore + ?Sized> Write for StreamAdapter<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.get_mut().write(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(self.get_mut().commit()?)
    }
}

impl<S: ByteStore + ?Sized> Seek for StreamAdapter<'_, S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, origin) = match pos {
            SeekFrom::Start(start) => {
                let offset = i64::try_from(start)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
                (offset, SeekOrigin::Start)
            }
            SeekFrom::Current(offset) => (offset, SeekOrigin::Current),
            SeekFrom::End(offset) => (offset, SeekOrigin::End),
        };
        Ok(self.get_mut().seek(offset, origin)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open_mode::OpenMode;
    use crate::store::MemoryStore;
    use std::io::{BufRead, BufReader};

    #[test]
    fn test_read_to_end() {
        let mut store = MemoryStore::from_vec(b"pipipi".to_vec());
        let mut stream = StreamAdapter::new(&mut store, OpenMode::READ);
        let mut out = Vec::new();
        stream.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"pipipi");
    }

    #[test]
    fn test_write_all_and_flush() {
        let mut store = MemoryStore::new();
        let mut stream = StreamAdapter::new(&mut store, OpenMode::WRITE);
        stream.write_all(b"fantail").unwrap();
        stream.flush().unwrap();
        drop(stream);
        assert_eq!(store.as_bytes(), b"fantail");
        // one explicit flush, one on drop
        assert_eq!(store.commit_count(), 2);
    }

    #[test]
    fn test_write_all_on_full_store_errors() {
        let mut store = MemoryStore::new().with_capacity_limit(3);
        let mut stream = StreamAdapter::new(&mut store, OpenMode::WRITE);
        assert!(stream.write_all(b"saddleback").is_err());
    }

    #[test]
    fn test_seek_and_buffered_lines() {
        let mut store = MemoryStore::from_vec(b"tui\nkereru\n".to_vec());
        let mut stream = StreamAdapter::new(&mut store, OpenMode::READ);
        assert_eq!(stream.seek(SeekFrom::Start(4)).unwrap(), 4);

        let mut line = String::new();
        BufReader::new(&mut stream).read_line(&mut line).unwrap();
        assert_eq!(line, "kereru\n");
    }

    #[test]
    fn test_seek_before_start_errors() {
        let mut store = MemoryStore::new();
        let mut stream = StreamAdapter::new(&mut store, OpenMode::READ);
        assert!(stream.seek(SeekFrom::Current(-1)).is_err());
    }
}
