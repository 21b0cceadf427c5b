//! codec/primitive.rs
//! Fixed-width scalars.
//!
//! Wire layout:
//! - Integers and floats: native width, little-endian, on every host.
//! - `bool`: one byte, `0` or `1`.
//! - `char`: its Unicode scalar value as a `u32`.
//! - Enums registered with `scalar_enum!`: their `num_enum` primitive.
//!
//! Byte order is normalised through `byteorder::LittleEndian`, including in
//! the slice paths used for scalar sequences, so big-endian hosts produce the
//! same bytes as little-endian ones.

use byteorder::{ByteOrder, LittleEndian};

use crate::codec::{decode_each, encode_each, Decode, Encode};
use crate::stream::{InputStream, OutputStream};
use crate::types::StreamError;

macro_rules! impl_scalar {
    ($($ty:ty => $read:ident, $write:ident, $read_into:ident, $write_into:ident;)+) => {$(
        impl Encode for $ty {
            #[inline]
            fn encode(&self, out: &mut OutputStream) {
                out.put_with(core::mem::size_of::<$ty>(), |dst| LittleEndian::$write(dst, *self));
            }

            #[inline]
            fn encoded_len(&self) -> usize {
                core::mem::size_of::<$ty>()
            }

            fn encode_slice(items: &[Self], out: &mut OutputStream) {
                if !out.config().bulk_scalar_copy {
                    return encode_each(items, out);
                }
                out.put_with(items.len() * core::mem::size_of::<$ty>(), |dst| {
                    LittleEndian::$write_into(items, dst)
                });
            }
        }

        impl Decode for $ty {
            const MIN_ENCODED_LEN: usize = core::mem::size_of::<$ty>();

            #[inline]
            fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
                let raw = input.read_raw(core::mem::size_of::<$ty>())?;
                Ok(LittleEndian::$read(raw))
            }

            fn decode_vec(
                count: usize,
                input: &mut InputStream<'_>,
                out: &mut Vec<Self>,
            ) -> Result<(), StreamError> {
                if !input.config().bulk_scalar_copy {
                    return decode_each(count, input, out);
                }
                let width = (count as u64).saturating_mul(core::mem::size_of::<$ty>() as u64);
                let width = input.ensure_available(width)?;
                let raw = input.read_raw(width)?;
                let start = out.len();
                out.resize(start + count, <$ty>::default());
                LittleEndian::$read_into(raw, &mut out[start..]);
                Ok(())
            }
        }
    )+};
}

impl_scalar! {
    u16  => read_u16,  write_u16,  read_u16_into,  write_u16_into;
    u32  => read_u32,  write_u32,  read_u32_into,  write_u32_into;
    u64  => read_u64,  write_u64,  read_u64_into,  write_u64_into;
    u128 => read_u128, write_u128, read_u128_into, write_u128_into;
    i16  => read_i16,  write_i16,  read_i16_into,  write_i16_into;
    i32  => read_i32,  write_i32,  read_i32_into,  write_i32_into;
    i64  => read_i64,  write_i64,  read_i64_into,  write_i64_into;
    i128 => read_i128, write_i128, read_i128_into, write_i128_into;
    f32  => read_f32,  write_f32,  read_f32_into,  write_f32_into;
    f64  => read_f64,  write_f64,  read_f64_into,  write_f64_into;
}

// Single bytes have no byte order; slices of them are copied as-is.

impl Encode for u8 {
    #[inline]
    fn encode(&self, out: &mut OutputStream) {
        out.push_byte(*self);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        1
    }

    fn encode_slice(items: &[Self], out: &mut OutputStream) {
        if !out.config().bulk_scalar_copy {
            return encode_each(items, out);
        }
        out.write_raw(items);
    }
}

impl Decode for u8 {
    const MIN_ENCODED_LEN: usize = 1;

    #[inline]
    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        Ok(input.read_raw(1)?[0])
    }

    fn decode_vec(
        count: usize,
        input: &mut InputStream<'_>,
        out: &mut Vec<Self>,
    ) -> Result<(), StreamError> {
        if !input.config().bulk_scalar_copy {
            return decode_each(count, input, out);
        }
        out.extend_from_slice(input.read_raw(count)?);
        Ok(())
    }
}

impl Encode for i8 {
    #[inline]
    fn encode(&self, out: &mut OutputStream) {
        out.push_byte(*self as u8);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        1
    }

    fn encode_slice(items: &[Self], out: &mut OutputStream) {
        if !out.config().bulk_scalar_copy {
            return encode_each(items, out);
        }
        out.put_with(items.len(), |dst| {
            for (d, s) in dst.iter_mut().zip(items) {
                *d = *s as u8;
            }
        });
    }
}

impl Decode for i8 {
    const MIN_ENCODED_LEN: usize = 1;

    #[inline]
    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        Ok(input.read_raw(1)?[0] as i8)
    }

    fn decode_vec(
        count: usize,
        input: &mut InputStream<'_>,
        out: &mut Vec<Self>,
    ) -> Result<(), StreamError> {
        if !input.config().bulk_scalar_copy {
            return decode_each(count, input, out);
        }
        out.extend(input.read_raw(count)?.iter().map(|&b| b as i8));
        Ok(())
    }
}

impl Encode for bool {
    #[inline]
    fn encode(&self, out: &mut OutputStream) {
        out.push_byte(u8::from(*self));
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        1
    }
}

impl Decode for bool {
    const MIN_ENCODED_LEN: usize = 1;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let offset = input.position();
        match u8::decode(input)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(input.fail_invalid::<bool>(offset)),
        }
    }
}

impl Encode for char {
    #[inline]
    fn encode(&self, out: &mut OutputStream) {
        u32::from(*self).encode(out);
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        core::mem::size_of::<u32>()
    }
}

impl Decode for char {
    const MIN_ENCODED_LEN: usize = core::mem::size_of::<u32>();

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let offset = input.position();
        let raw = u32::decode(input)?;
        char::from_u32(raw).ok_or_else(|| input.fail_invalid::<char>(offset))
    }
}

/// Register fieldless enums as scalars.
///
/// The enum must derive `num_enum::IntoPrimitive` and
/// `num_enum::TryFromPrimitive` and be `Copy`; it is written as its primitive
/// representation. Decoding an undeclared discriminant faults with
/// `StreamError::InvalidValue`.
///
/// ```
/// use num_enum::{IntoPrimitive, TryFromPrimitive};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
/// #[repr(u8)]
/// enum Side {
///     Buy = 1,
///     Sell = 2,
/// }
///
/// bytestream_core::scalar_enum!(Side);
///
/// let wire = bytestream_core::to_bytes(&Side::Sell);
/// assert_eq!(wire, [2]);
/// ```
#[macro_export]
macro_rules! scalar_enum {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Encode for $ty {
            #[inline]
            fn encode(&self, out: &mut $crate::OutputStream) {
                let raw: <$ty as $crate::num_enum::TryFromPrimitive>::Primitive =
                    ::core::convert::From::from(*self);
                $crate::Encode::encode(&raw, out);
            }

            #[inline]
            fn encoded_len(&self) -> usize {
                ::core::mem::size_of::<<$ty as $crate::num_enum::TryFromPrimitive>::Primitive>()
            }
        }

        impl $crate::Decode for $ty {
            const MIN_ENCODED_LEN: usize =
                <<$ty as $crate::num_enum::TryFromPrimitive>::Primitive as $crate::Decode>::MIN_ENCODED_LEN;

            fn decode(
                input: &mut $crate::InputStream<'_>,
            ) -> ::core::result::Result<Self, $crate::StreamError> {
                let offset = input.position();
                let raw = <<$ty as $crate::num_enum::TryFromPrimitive>::Primitive as $crate::Decode>::decode(input)?;
                <$ty as $crate::num_enum::TryFromPrimitive>::try_from_primitive(raw)
                    .map_err(|_| input.fail_invalid::<$ty>(offset))
            }
        }
    )+};
}
