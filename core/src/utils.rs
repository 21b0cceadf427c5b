//! utils.rs
//! Host diagnostics and hex rendering for fault logs.

use std::fmt;

/// Byte order of the machine running the codec.
///
/// The wire is always little-endian; this is reported for diagnostics only,
/// since every scalar goes through `byteorder::LittleEndian`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

pub const fn host_endianness() -> Endianness {
    if cfg!(target_endian = "little") {
        Endianness::Little
    } else {
        Endianness::Big
    }
}

/// Hex rendering of at most `max` leading bytes, with an ellipsis when cut.
pub fn hex_preview(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        hex::encode(bytes)
    } else {
        format!("{}..", hex::encode(&bytes[..max]))
    }
}
