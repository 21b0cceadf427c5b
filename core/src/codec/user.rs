//! codec/user.rs
//! User-defined types.
//!
//! A type takes part in the codec by implementing `Encode` (write yourself
//! into an `OutputStream`) and `Decode` (read yourself back from an
//! `InputStream`). Inside those impls the ordinary stream interface is used
//! recursively, so user types may contain containers of other user types to
//! any depth. Each type has exactly one impl, so a wrapper around a container
//! is always encoded by its own code, never by the container rule.
//!
//! ```
//! use std::collections::BTreeMap;
//! use bytestream_core::{Decode, Encode, InputStream, OutputStream, StreamError};
//!
//! #[derive(Debug, PartialEq)]
//! struct Inventory {
//!     owner: String,
//!     items: BTreeMap<String, u32>,
//! }
//!
//! impl Encode for Inventory {
//!     fn encode(&self, out: &mut OutputStream) {
//!         out.write(&self.owner).write(&self.items);
//!     }
//! }
//!
//! impl Decode for Inventory {
//!     fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
//!         Ok(Self { owner: input.decode()?, items: input.decode()? })
//!     }
//! }
//!
//! let inv = Inventory { owner: "ana".into(), items: BTreeMap::from([("bolt".into(), 3)]) };
//! let wire = bytestream_core::to_bytes(&inv);
//! assert_eq!(bytestream_core::from_bytes::<Inventory>(&wire).unwrap(), inv);
//! ```

/// Implement `Encode` and `Decode` for a plain struct, field by field.
///
/// Fields are written and read in the order listed, which must name every
/// field of the struct together with its type. Generic structs need a
/// hand-written impl.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct Quote {
///     symbol: String,
///     bid: i64,
///     ask: i64,
/// }
///
/// bytestream_core::codec_struct!(Quote { symbol: String, bid: i64, ask: i64 });
///
/// let q = Quote { symbol: "XYZ".into(), bid: 100, ask: 101 };
/// let wire = bytestream_core::to_bytes(&q);
/// assert_eq!(wire.len(), 8 + 3 + 8 + 8);
/// assert_eq!(bytestream_core::from_bytes::<Quote>(&wire).unwrap(), q);
/// ```
#[macro_export]
macro_rules! codec_struct {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::Encode for $ty {
            fn encode(&self, out: &mut $crate::OutputStream) {
                $( $crate::Encode::encode(&self.$field, out); )*
            }

            fn encoded_len(&self) -> usize {
                0 $(+ $crate::Encode::encoded_len(&self.$field))*
            }
        }

        impl $crate::Decode for $ty {
            const MIN_ENCODED_LEN: usize = 0 $(+ <$fty as $crate::Decode>::MIN_ENCODED_LEN)*;

            fn decode(
                input: &mut $crate::InputStream<'_>,
            ) -> ::core::result::Result<Self, $crate::StreamError> {
                ::core::result::Result::Ok(Self {
                    $( $field: input.decode::<$fty>()?, )*
                })
            }
        }
    };
}
