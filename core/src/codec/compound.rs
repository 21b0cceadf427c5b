//! codec/compound.rs
//! Fixed-arity values: tuples (pairs included) and arrays.
//!
//! Wire layout: the element encodings back to back, in declaration order.
//! No length, no tag. The empty tuple occupies zero bytes.
//!
//! Decoding short-circuits on the first failing element; later elements are
//! never attempted.

use crate::codec::{Decode, Encode};
use crate::stream::{InputStream, OutputStream};
use crate::types::StreamError;

macro_rules! impl_tuple {
    ($($name:ident)*) => {
        impl<$($name: Encode),*> Encode for ($($name,)*) {
            #[allow(non_snake_case, unused_variables)]
            fn encode(&self, out: &mut OutputStream) {
                let ($($name,)*) = self;
                $($name.encode(out);)*
            }

            #[allow(non_snake_case)]
            fn encoded_len(&self) -> usize {
                let ($($name,)*) = self;
                0 $(+ $name.encoded_len())*
            }
        }

        impl<$($name: Decode),*> Decode for ($($name,)*) {
            const MIN_ENCODED_LEN: usize = 0 $(+ <$name as Decode>::MIN_ENCODED_LEN)*;

            #[allow(unused_variables)]
            fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
                Ok(($(input.decode::<$name>()?,)*))
            }
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
impl_tuple!(A B C D E);
impl_tuple!(A B C D E F);
impl_tuple!(A B C D E F G);
impl_tuple!(A B C D E F G H);
impl_tuple!(A B C D E F G H I);
impl_tuple!(A B C D E F G H I J);
impl_tuple!(A B C D E F G H I J K);
impl_tuple!(A B C D E F G H I J K L);

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, out: &mut OutputStream) {
        T::encode_slice(self, out);
    }

    fn encoded_len(&self) -> usize {
        self.iter().map(Encode::encoded_len).sum()
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    const MIN_ENCODED_LEN: usize = T::MIN_ENCODED_LEN.saturating_mul(N);

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        input.ensure_available(Self::MIN_ENCODED_LEN as u64)?;
        let mut items = Vec::with_capacity(N);
        T::decode_vec(N, input, &mut items)?;
        items
            .try_into()
            .map_err(|_| input.fail_custom("array decode produced the wrong element count"))
    }
}
