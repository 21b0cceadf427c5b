//! Type-driven dispatch for the byte stream.
//!
//! Every supported type implements `Encode` and/or `Decode`; the codec used
//! for a value is chosen at compile time from its static type. Nothing on the
//! wire identifies a type, so the reader must decode exactly the types, in
//! exactly the order, that the writer encoded.
//!
//! | Module | Types |
//! | --- | --- |
//! | `primitive` | integers, floats, `bool`, `char`, `scalar_enum!` enums |
//! | `dynamic` | `str`, `String`, `Bytes`, `BytesMut` |
//! | `compound` | tuples (arity 0..=12), `[T; N]` |
//! | `container` | `[T]`, `Vec`, `VecDeque`, `LinkedList`, sets, maps |
//! | `user` | `codec_struct!` and hand-written impls |

pub mod compound;
pub mod container;
pub mod dynamic;
pub mod primitive;
pub mod user;

use crate::constants::ZERO_WIDTH_PREALLOC_CAP;
use crate::stream::{InputStream, OutputStream};
use crate::types::StreamError;

/// Serialize a value into an `OutputStream`.
pub trait Encode {
    fn encode(&self, out: &mut OutputStream);

    /// Exact number of bytes `encode` appends.
    ///
    /// The default encodes into a scratch stream; built-in types override it.
    fn encoded_len(&self) -> usize {
        let mut scratch = OutputStream::new();
        self.encode(&mut scratch);
        scratch.len()
    }

    /// Encode a run of values back to back, without a count prefix.
    ///
    /// Scalars override this with a single slice conversion.
    #[doc(hidden)]
    fn encode_slice(items: &[Self], out: &mut OutputStream)
    where
        Self: Sized,
    {
        encode_each(items, out);
    }
}

/// Produce or populate a value from an `InputStream`.
pub trait Decode: Sized {
    /// Smallest number of bytes one value can occupy on the wire.
    ///
    /// Used to reject collection counts that cannot possibly fit in the
    /// remaining input. Must never overstate; `0` is always safe.
    const MIN_ENCODED_LEN: usize = 0;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError>;

    /// Populate `self` in place. Containers override this to reuse their
    /// allocation; on error `self` is valid but its contents are unspecified.
    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        *self = Self::decode(input)?;
        Ok(())
    }

    /// Decode `count` values and append them to `out`.
    ///
    /// Scalars override this with a single slice conversion.
    #[doc(hidden)]
    fn decode_vec(
        count: usize,
        input: &mut InputStream<'_>,
        out: &mut Vec<Self>,
    ) -> Result<(), StreamError> {
        decode_each(count, input, out)
    }
}

#[inline]
pub(crate) fn encode_each<T: Encode>(items: &[T], out: &mut OutputStream) {
    for item in items {
        item.encode(out);
    }
}

#[inline]
pub(crate) fn decode_each<T: Decode>(
    count: usize,
    input: &mut InputStream<'_>,
    out: &mut Vec<T>,
) -> Result<(), StreamError> {
    for _ in 0..count {
        out.push(input.decode::<T>()?);
    }
    Ok(())
}

/// Capacity to reserve for `count` entries of `T` once `read_count` accepted it.
///
/// `read_count` already bounds `count * MIN_ENCODED_LEN` by the remaining
/// input, so only zero-width entries need an extra cap.
#[inline]
pub(crate) fn capacity_hint<T: Decode>(count: usize) -> usize {
    if T::MIN_ENCODED_LEN == 0 {
        count.min(ZERO_WIDTH_PREALLOC_CAP)
    } else {
        count
    }
}

// ---------------------------------------------------------------------------
// Blanket forwarding
// ---------------------------------------------------------------------------

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, out: &mut OutputStream) {
        (**self).encode(out);
    }

    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, out: &mut OutputStream) {
        (**self).encode(out);
    }

    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}

impl<T: Decode> Decode for Box<T> {
    const MIN_ENCODED_LEN: usize = T::MIN_ENCODED_LEN;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        input.decode::<T>().map(Box::new)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        (**self).decode_into(input)
    }
}

// ---------------------------------------------------------------------------
// One-shot helpers
// ---------------------------------------------------------------------------

/// Encode a single value into a fresh buffer.
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = OutputStream::new();
    out.write(value);
    out.into_vec()
}

/// Decode a single value that must span the whole buffer.
pub fn from_bytes<T: Decode>(buf: &[u8]) -> Result<T, StreamError> {
    let mut input = InputStream::new(buf);
    let value = input.decode::<T>()?;
    if !input.is_at_end() {
        return Err(StreamError::TrailingBytes {
            remaining: input.remaining(),
        });
    }
    Ok(value)
}
