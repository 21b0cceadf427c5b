//! constants.rs
//! Wire-level constants shared by every codec.

/// Every length and count prefix is an unsigned 64-bit little-endian integer.
pub const LEN_PREFIX_SIZE: usize = core::mem::size_of::<u64>();

/// Upper bound on up-front reservation for collections whose elements can
/// occupy zero bytes on the wire (e.g. `Vec<()>`). Non-zero-width elements are
/// already bounded by the remaining input.
pub const ZERO_WIDTH_PREALLOC_CAP: usize = 4096;

/// Number of bytes at the cursor rendered as hex when a fault is logged.
pub const HEX_PREVIEW_LEN: usize = 16;
