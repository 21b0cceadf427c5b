//! stream/output.rs
//!
//! Append-only write side.
//!
//! Design notes:
//! - Owns a growable `Vec<u8>`; growth is the only resource concern, so no
//!   write can fail.
//! - `write` returns `&mut Self` so appends chain.
//! - Extraction (`as_bytes`, `into_vec`, `into_bytes`) is expected once
//!   encoding is complete.

use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::codec::Encode;
use crate::config::StreamConfig;
use crate::utils::host_endianness;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputStream {
    buf: Vec<u8>,
    config: StreamConfig,
}

impl OutputStream {
    pub fn new() -> Self {
        Self::with_config(StreamConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut out = Self::new();
        out.buf.reserve(capacity);
        out
    }

    pub fn with_config(config: StreamConfig) -> Self {
        log::trace!(
            "output stream: created (host {}, bulk_scalar_copy={})",
            host_endianness(),
            config.bulk_scalar_copy
        );
        Self { buf: Vec::new(), config }
    }

    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Append one value using the codec its type resolves to.
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode(self);
        self
    }

    /// Append raw bytes with no prefix.
    pub fn write_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append a length or count prefix (`u64`, little-endian).
    #[inline]
    pub fn write_len(&mut self, len: usize) -> &mut Self {
        self.put_with(crate::constants::LEN_PREFIX_SIZE, |dst| {
            LittleEndian::write_u64(dst, len as u64)
        });
        self
    }

    /// Append a length-prefixed payload.
    pub fn write_payload(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf
            .reserve(crate::constants::LEN_PREFIX_SIZE + bytes.len());
        self.write_len(bytes.len());
        self.write_raw(bytes)
    }

    /// Grow by exactly `width` zeroed bytes and let `fill` overwrite them.
    #[inline]
    pub(crate) fn put_with<F: FnOnce(&mut [u8])>(&mut self, width: usize, fill: F) {
        let start = self.buf.len();
        self.buf.resize(start + width, 0);
        fill(&mut self.buf[start..]);
    }

    #[inline]
    pub(crate) fn push_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drop everything written so far, keeping the allocation and config.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buf)
    }
}

impl AsRef<[u8]> for OutputStream {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}
