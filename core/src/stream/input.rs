//! stream/input.rs
//!
//! Read side: a borrowed buffer, a cursor and a sticky fault.
//!
//! Design notes:
//! - Every raw access checks the fault first, so after a fault no byte is
//!   read and the cursor never moves again.
//! - Bounds are checked before anything is allocated; a hostile length or
//!   count faults without reserving memory for it.
//! - A payload whose declared length overruns the buffer leaves the cursor
//!   just past its length field. There is no rollback.
//! - `read` records failures on the stream and keeps chaining; `decode`
//!   records them and also returns them.

use std::any::type_name;

use byteorder::{ByteOrder, LittleEndian};

use crate::codec::Decode;
use crate::config::StreamConfig;
use crate::constants::{HEX_PREVIEW_LEN, LEN_PREFIX_SIZE};
use crate::stream::state::{Cursor, StreamState};
use crate::types::StreamError;
use crate::utils::{hex_preview, host_endianness};

#[derive(Debug, Clone)]
pub struct InputStream<'a> {
    buf: &'a [u8],
    cursor: Cursor,
    state: StreamState,
    config: StreamConfig,
}

impl<'a> InputStream<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, StreamConfig::default())
    }

    pub fn with_config(buf: &'a [u8], config: StreamConfig) -> Self {
        log::trace!(
            "input stream: created over {} bytes (host {})",
            buf.len(),
            host_endianness()
        );
        Self {
            buf,
            cursor: Cursor::new(buf.len()),
            state: StreamState::Ok,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Caller surface
    // -----------------------------------------------------------------------

    /// Decode into `dest`. A no-op once the stream has faulted; check
    /// `is_ok()` after a chain of reads before trusting any destination.
    pub fn read<T: Decode>(&mut self, dest: &mut T) -> &mut Self {
        if self.state.is_ok() {
            if let Err(err) = dest.decode_into(self) {
                self.trip(err);
            }
        }
        self
    }

    /// Decode and return one value.
    ///
    /// Fails if the stream is faulted afterwards, even when `T::decode`
    /// returned `Ok`: a decoder built on chained `read` calls reports its
    /// faults only through the stream.
    pub fn decode<T: Decode>(&mut self) -> Result<T, StreamError> {
        self.state.check()?;
        let value = T::decode(self).map_err(|err| self.trip(err))?;
        self.state.check()?;
        Ok(value)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// `Ok(())` if every decode so far succeeded, otherwise the first fault.
    pub fn status(&self) -> Result<(), StreamError> {
        self.state.check()
    }

    pub fn fault(&self) -> Option<&StreamError> {
        self.state.fault()
    }

    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// True once every byte of the buffer has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    // -----------------------------------------------------------------------
    // Raw access for codecs
    // -----------------------------------------------------------------------

    /// Consume exactly `n` bytes.
    pub fn read_raw(&mut self, n: usize) -> Result<&'a [u8], StreamError> {
        self.state.check()?;
        match self.cursor.span(n) {
            Some(range) => {
                self.cursor.consume(&range);
                let buf: &'a [u8] = self.buf;
                Ok(&buf[range])
            }
            None => Err(self.fail_short(n as u64)),
        }
    }

    /// Read a length or count prefix (`u64`, little-endian).
    pub fn read_len(&mut self) -> Result<u64, StreamError> {
        let raw = self.read_raw(LEN_PREFIX_SIZE)?;
        Ok(LittleEndian::read_u64(raw))
    }

    /// Read a length-prefixed payload.
    ///
    /// On overrun the fault is tripped with the cursor just past the length.
    pub fn read_payload(&mut self) -> Result<&'a [u8], StreamError> {
        let len = self.read_len()?;
        let len = self.ensure_available(len)?;
        self.read_raw(len)
    }

    /// Read a collection count and check it can be satisfied by what is left.
    ///
    /// `T` is the per-entry type (the element, or `(K, V)` for mappings);
    /// `count * T::MIN_ENCODED_LEN` must fit in the remaining bytes.
    pub fn read_count<T: Decode>(&mut self) -> Result<usize, StreamError> {
        let count = self.read_len()?;
        if let Some(limit) = self.config.max_collection_len {
            if count > limit {
                return Err(self.fail(StreamError::LengthLimit { len: count, limit }));
            }
        }
        let needed = count.saturating_mul(T::MIN_ENCODED_LEN as u64);
        self.ensure_available(needed)?;
        usize::try_from(count).map_err(|_| self.fail_short(count))
    }

    /// Fault unless `needed` more bytes are available. Consumes nothing.
    pub fn ensure_available(&mut self, needed: u64) -> Result<usize, StreamError> {
        self.state.check()?;
        match usize::try_from(needed) {
            Ok(n) if n <= self.cursor.remaining() => Ok(n),
            _ => Err(self.fail_short(needed)),
        }
    }

    // -----------------------------------------------------------------------
    // Faults
    // -----------------------------------------------------------------------

    /// Trip the fault with `err` and return the cause now in effect.
    ///
    /// Errors that are not read faults (`TrailingBytes`) are handed back
    /// without touching the stream.
    pub fn fail(&mut self, err: StreamError) -> StreamError {
        self.trip(err)
    }

    /// Trip a `Custom` fault; meant for user-type decoders.
    pub fn fail_custom(&mut self, msg: impl Into<String>) -> StreamError {
        self.trip(StreamError::Custom(msg.into()))
    }

    /// Trip an `InvalidValue` fault for a value of type `T` read at `offset`.
    pub fn fail_invalid<T: ?Sized>(&mut self, offset: usize) -> StreamError {
        self.trip(StreamError::InvalidValue {
            type_name: type_name::<T>(),
            offset,
        })
    }

    fn fail_short(&mut self, needed: u64) -> StreamError {
        let err = StreamError::InvalidRead {
            offset: self.cursor.position(),
            needed,
            remaining: self.cursor.remaining(),
        };
        self.trip(err)
    }

    fn trip(&mut self, err: StreamError) -> StreamError {
        if !err.is_read_fault() {
            return err;
        }
        if self.state.is_ok() {
            let pos = self.cursor.position();
            log::debug!(
                "input stream: fault at offset {}/{}: {} (next bytes: {})",
                pos,
                self.buf.len(),
                err,
                hex_preview(&self.buf[pos..], HEX_PREVIEW_LEN)
            );
        }
        self.state.trip(err)
    }
}
