//! Open mode flags requested when attaching a stream to a store.

use std::ops::BitOr;

/// Directions a stream is opened for.
///
/// Combine with `|`, e.g. `OpenMode::READ | OpenMode::WRITE`. The default is
/// read and write. A mode without [WRITE](OpenMode::WRITE) makes the stream
/// read-only, which means it never commits the store on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenMode {
    read: bool,
    write: bool,
}

impl OpenMode {
    /// Open for reading
    pub const READ: OpenMode = OpenMode {
        read: true,
        write: false,
    };

    /// Open for writing
    pub const WRITE: OpenMode = OpenMode {
        read: false,
        write: true,
    };

    /// Open for reading and writing
    pub const READ_WRITE: OpenMode = OpenMode {
        read: true,
        write: true,
    };

    /// Returns `true` if reading was requested.
    pub fn is_read(self) -> bool {
        self.read
    }

    /// Returns `true` if writing was requested.
    pub fn is_write(self) -> bool {
        self.write
    }

    /// Returns `true` if writing was not requested.
    pub fn is_read_only(self) -> bool {
        !self.write
    }
}

impl Default for OpenMode {
    fn default() -> Self {
        OpenMode::READ_WRITE
    }
}

impl BitOr for OpenMode {
    type Output = OpenMode;

    fn bitor(self, rhs: OpenMode) -> OpenMode {
        OpenMode {
            read: self.read || rhs.read,
            write: self.write || rhs.write,
        }
    }
}
