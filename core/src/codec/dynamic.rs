//! codec/dynamic.rs
//! Length-prefixed text and byte payloads.
//!
//! Wire layout: `[len: u64 LE][len raw bytes]`, no terminator, no padding.
//!
//! `[u8]` and `Vec<u8>` are handled by the container codec as sequences of
//! `u8`; that encoding is byte-identical to this one.

use bytes::{Bytes, BytesMut};

use crate::codec::{Decode, Encode};
use crate::constants::LEN_PREFIX_SIZE;
use crate::stream::{InputStream, OutputStream};
use crate::types::StreamError;

impl Encode for str {
    fn encode(&self, out: &mut OutputStream) {
        out.write_payload(self.as_bytes());
    }

    fn encoded_len(&self) -> usize {
        LEN_PREFIX_SIZE + self.len()
    }
}

impl Encode for String {
    fn encode(&self, out: &mut OutputStream) {
        self.as_str().encode(out);
    }

    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }
}

impl Decode for String {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        decode_str(input).map(str::to_owned)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        let text = decode_str(input)?;
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// Borrow a text payload straight out of the input buffer.
fn decode_str<'a>(input: &mut InputStream<'a>) -> Result<&'a str, StreamError> {
    let offset = input.position() + LEN_PREFIX_SIZE;
    let raw = input.read_payload()?;
    std::str::from_utf8(raw).map_err(|_| input.fail(StreamError::InvalidUtf8 { offset }))
}

impl Encode for Bytes {
    fn encode(&self, out: &mut OutputStream) {
        out.write_payload(self);
    }

    fn encoded_len(&self) -> usize {
        LEN_PREFIX_SIZE + self.len()
    }
}

impl Decode for Bytes {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        input.read_payload().map(Bytes::copy_from_slice)
    }
}

impl Encode for BytesMut {
    fn encode(&self, out: &mut OutputStream) {
        out.write_payload(self);
    }

    fn encoded_len(&self) -> usize {
        LEN_PREFIX_SIZE + self.len()
    }
}

impl Decode for BytesMut {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        input.read_payload().map(BytesMut::from)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        let raw = input.read_payload()?;
        self.clear();
        self.extend_from_slice(raw);
        Ok(())
    }
}
