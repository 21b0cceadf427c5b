//! bytestream-core
//!
//! Generic binary byte-stream codec.
//!
//! An `OutputStream` turns a sequence of values into a flat little-endian
//! byte buffer; an `InputStream` reads them back in the same order. How a
//! value is laid out is decided by its static type through the `Encode` and
//! `Decode` traits. The wire carries no type tags, no magic and no version,
//! so writer and reader must agree on the exact value sequence out of band.
//!
//! Wire format:
//! - scalars: native width, little-endian on every host;
//! - lengths and counts: `u64` little-endian;
//! - text/bytes: length, then raw bytes;
//! - tuples and arrays: elements back to back;
//! - sequences, sets, maps: count, then elements (key before value).
//!
//! Byte order is fixed by the format, not by the host: every scalar goes
//! through `byteorder::LittleEndian`, so big-endian hosts are supported and
//! produce the same bytes as little-endian ones.
//!
//! Reads are bounds-checked. The first failure faults the input stream; every
//! later read is a no-op that reports the same error, so a long chain of
//! reads can be checked once at the end:
//!
//! ```
//! use bytestream_core::{InputStream, OutputStream};
//!
//! let mut out = OutputStream::new();
//! out.write(&11i32).write("abc").write(&vec![10i32, 3000, 400]);
//! assert_eq!(out.len(), 4 + (8 + 3) + (8 + 3 * 4));
//!
//! let (mut n, mut s, mut v) = (0i32, String::new(), Vec::<i32>::new());
//! let mut input = InputStream::new(out.as_bytes());
//! input.read(&mut n).read(&mut s).read(&mut v);
//!
//! assert!(input.is_ok() && input.is_at_end());
//! assert_eq!((n, s.as_str(), v), (11, "abc", vec![10, 3000, 400]));
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Streams and codecs
pub mod codec;
pub mod stream;

pub use codec::{from_bytes, to_bytes, Decode, Encode};
pub use config::StreamConfig;
pub use stream::{InputStream, OutputStream, StreamState};
pub use types::StreamError;

#[doc(hidden)]
pub use num_enum;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Decode, Encode};
    pub use crate::config::StreamConfig;
    pub use crate::stream::{InputStream, OutputStream};
    pub use crate::types::StreamError;
}
