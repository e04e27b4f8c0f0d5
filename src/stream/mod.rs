//! Byte streams on top of random-access byte stores.
pub mod adapter;
pub mod byte_stream;
mod std_io;

pub use adapter::{StreamAdapter, stream_from_store};
pub use byte_stream::ByteStream;
