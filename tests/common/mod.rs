//! Test double wrapping a [MemoryStore] with call recording and fault injection.
#![allow(dead_code)]

use std::cell::Cell;

use seekbuf::{ByteStore, MemoryStore, ReadOutcome, SeekOrigin, StoreError, StoreStat};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Read,
    Write,
    Seek,
    Commit,
    Stat,
}

#[derive(Debug, Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    failing: Vec<Op>,
    /// Fail only seeks moving backwards from the cursor
    fail_rewind: bool,
    calls: Vec<Op>,
    stats: Cell<usize>,
}

impl FaultyStore {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            inner: MemoryStore::from_vec(bytes.to_vec()),
            ..Self::default()
        }
    }

    pub fn failing(mut self, op: Op) -> Self {
        self.failing.push(op);
        self
    }

    pub fn failing_rewind(mut self) -> Self {
        self.fail_rewind = true;
        self
    }

    pub fn calls(&self) -> &[Op] {
        &self.calls
    }

    pub fn count(&self, op: Op) -> usize {
        if op == Op::Stat {
            return self.stats.get();
        }
        self.calls.iter().filter(|&&c| c == op).count()
    }

    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn check(&mut self, op: Op) -> Result<(), StoreError> {
        self.calls.push(op);
        if self.failing.contains(&op) {
            return Err(StoreError::Other(format!("injected {op:?} failure")));
        }
        Ok(())
    }
}

impl ByteStore for FaultyStore {
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, StoreError> {
        self.check(Op::Read)?;
        self.inner.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, StoreError> {
        self.check(Op::Write)?;
        self.inner.write(buf)
    }

    fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64, StoreError> {
        self.check(Op::Seek)?;
        if self.fail_rewind && origin == SeekOrigin::Current && offset < 0 {
            return Err(StoreError::InvalidSeek { offset, origin });
        }
        self.inner.seek(offset, origin)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.check(Op::Commit)?;
        self.inner.commit()
    }

    fn stat(&self) -> Result<StoreStat, StoreError> {
        self.stats.set(self.stats.get() + 1);
        if self.failing.contains(&Op::Stat) {
            return Err(StoreError::Closed);
        }
        self.inner.stat()
    }
}
