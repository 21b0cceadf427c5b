//! codec/container.rs
//! Variable-arity homogeneous collections.
//!
//! Wire layout: `[count: u64 LE]` then `count` entries in the collection's
//! iteration order. A mapping entry is its key followed by its value.
//!
//! Insertion policy on decode:
//! - sequences (`Vec`, `VecDeque`, `LinkedList`) append in wire order;
//! - sets insert-or-ignore, so duplicate entries collapse;
//! - mappings insert-or-overwrite, so the last entry for a key wins.
//!
//! Decoding into an existing collection clears it first. If an entry fails,
//! the entries decoded before it stay in the destination; the stream is
//! faulted and the caller is expected to discard the value.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::codec::{capacity_hint, Decode, Encode};
use crate::constants::LEN_PREFIX_SIZE;
use crate::stream::{InputStream, OutputStream};
use crate::types::StreamError;

/// Count prefix followed by every item, for collections without slice access.
fn encode_iter<'i, T, I>(out: &mut OutputStream, len: usize, items: I)
where
    T: Encode + 'i,
    I: IntoIterator<Item = &'i T>,
{
    out.write_len(len);
    for item in items {
        item.encode(out);
    }
}

fn encode_entries<'i, K, V, I>(out: &mut OutputStream, len: usize, entries: I)
where
    K: Encode + 'i,
    V: Encode + 'i,
    I: IntoIterator<Item = (&'i K, &'i V)>,
{
    out.write_len(len);
    for (key, value) in entries {
        key.encode(out);
        value.encode(out);
    }
}

fn prefixed_len<'i, T, I>(items: I) -> usize
where
    T: Encode + 'i,
    I: IntoIterator<Item = &'i T>,
{
    LEN_PREFIX_SIZE + items.into_iter().map(Encode::encoded_len).sum::<usize>()
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

impl<T: Encode> Encode for [T] {
    fn encode(&self, out: &mut OutputStream) {
        out.write_len(self.len());
        T::encode_slice(self, out);
    }

    fn encoded_len(&self) -> usize {
        prefixed_len(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, out: &mut OutputStream) {
        self.as_slice().encode(out);
    }

    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }
}

impl<T: Decode> Decode for Vec<T> {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let mut items = Vec::new();
        items.decode_into(input)?;
        Ok(items)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<T>()?;
        self.reserve(capacity_hint::<T>(count));
        T::decode_vec(count, input, self)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode(&self, out: &mut OutputStream) {
        let (front, back) = self.as_slices();
        out.write_len(self.len());
        T::encode_slice(front, out);
        T::encode_slice(back, out);
    }

    fn encoded_len(&self) -> usize {
        prefixed_len(self)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        Vec::<T>::decode(input).map(VecDeque::from)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<T>()?;
        self.reserve(capacity_hint::<T>(count));
        for _ in 0..count {
            self.push_back(input.decode::<T>()?);
        }
        Ok(())
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    fn encode(&self, out: &mut OutputStream) {
        encode_iter(out, self.len(), self);
    }

    fn encoded_len(&self) -> usize {
        prefixed_len(self)
    }
}

impl<T: Decode> Decode for LinkedList<T> {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let mut items = LinkedList::new();
        items.decode_into(input)?;
        Ok(items)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<T>()?;
        for _ in 0..count {
            self.push_back(input.decode::<T>()?);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sets
// ---------------------------------------------------------------------------

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, out: &mut OutputStream) {
        encode_iter(out, self.len(), self);
    }

    fn encoded_len(&self) -> usize {
        prefixed_len(self)
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let mut items = BTreeSet::new();
        items.decode_into(input)?;
        Ok(items)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<T>()?;
        for _ in 0..count {
            self.insert(input.decode::<T>()?);
        }
        Ok(())
    }
}

impl<T: Encode, S> Encode for HashSet<T, S> {
    fn encode(&self, out: &mut OutputStream) {
        encode_iter(out, self.len(), self);
    }

    fn encoded_len(&self) -> usize {
        prefixed_len(self)
    }
}

impl<T, S> Decode for HashSet<T, S>
where
    T: Decode + Eq + Hash,
    S: BuildHasher + Default,
{
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let mut items = HashSet::with_hasher(S::default());
        items.decode_into(input)?;
        Ok(items)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<T>()?;
        self.reserve(capacity_hint::<T>(count));
        for _ in 0..count {
            self.insert(input.decode::<T>()?);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Mappings
// ---------------------------------------------------------------------------

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, out: &mut OutputStream) {
        encode_entries(out, self.len(), self);
    }

    fn encoded_len(&self) -> usize {
        LEN_PREFIX_SIZE
            + self
                .iter()
                .map(|(key, value)| key.encoded_len() + value.encoded_len())
                .sum::<usize>()
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let mut entries = BTreeMap::new();
        entries.decode_into(input)?;
        Ok(entries)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<(K, V)>()?;
        for _ in 0..count {
            let key = input.decode::<K>()?;
            let value = input.decode::<V>()?;
            self.insert(key, value);
        }
        Ok(())
    }
}

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode(&self, out: &mut OutputStream) {
        encode_entries(out, self.len(), self);
    }

    fn encoded_len(&self) -> usize {
        LEN_PREFIX_SIZE
            + self
                .iter()
                .map(|(key, value)| key.encoded_len() + value.encoded_len())
                .sum::<usize>()
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Decode + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    const MIN_ENCODED_LEN: usize = LEN_PREFIX_SIZE;

    fn decode(input: &mut InputStream<'_>) -> Result<Self, StreamError> {
        let mut entries = HashMap::with_hasher(S::default());
        entries.decode_into(input)?;
        Ok(entries)
    }

    fn decode_into(&mut self, input: &mut InputStream<'_>) -> Result<(), StreamError> {
        self.clear();
        let count = input.read_count::<(K, V)>()?;
        self.reserve(capacity_hint::<(K, V)>(count));
        for _ in 0..count {
            let key = input.decode::<K>()?;
            let value = input.decode::<V>()?;
            self.insert(key, value);
        }
        Ok(())
    }
}
