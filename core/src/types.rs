//! types.rs
//! Error type shared by the read side of every codec.
//!
//! Design notes:
//! - Writing never fails; only decoding produces a `StreamError`.
//! - The first error on an `InputStream` is stored as its fault and handed
//!   back to every later decode, hence `Clone + Eq`.
//! - Offsets are byte positions in the input buffer.

use thiserror::Error;

/// Unified decode error covering truncation, invalid bit patterns and limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Not enough bytes left for a scalar, a length-prefixed payload, or the
    /// declared number of collection elements.
    #[error("invalid read at offset {offset}: need {needed} bytes, {remaining} remaining")]
    InvalidRead {
        offset: usize,
        needed: u64,
        remaining: usize,
    },

    /// Text payload is not valid UTF-8.
    #[error("invalid utf-8 in text payload at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Bytes were read but do not form a valid value (bool, char, enum).
    #[error("invalid {type_name} value at offset {offset}")]
    InvalidValue {
        type_name: &'static str,
        offset: usize,
    },

    /// Collection count above `StreamConfig::max_collection_len`.
    #[error("collection length {len} exceeds configured limit {limit}")]
    LengthLimit { len: u64, limit: u64 },

    /// Returned by `from_bytes` when the value does not span the whole buffer.
    #[error("{remaining} trailing bytes after decoded value")]
    TrailingBytes { remaining: usize },

    /// Raised by user-type decoders through `InputStream::fail_custom`.
    #[error("{0}")]
    Custom(String),
}

impl StreamError {
    /// True for errors that trip an `InputStream` fault.
    ///
    /// `TrailingBytes` is a post-decode check and never faults a stream.
    pub fn is_read_fault(&self) -> bool {
        !matches!(self, StreamError::TrailingBytes { .. })
    }
}
