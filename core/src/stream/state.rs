//! stream/state.rs
//! Read cursor and sticky fault state of an `InputStream`.
//!
//! Invariants:
//! - `position <= len` at all times.
//! - `Ok -> Faulted` is one-way; the first cause is kept.

use std::ops::Range;

use crate::types::StreamError;

/// Read position inside a buffer of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { pos: 0, len }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.len
    }

    /// Byte range of the next `n` bytes, or `None` if they run past the end.
    #[inline]
    pub fn span(&self, n: usize) -> Option<Range<usize>> {
        let end = self.pos.checked_add(n)?;
        (end <= self.len).then_some(self.pos..end)
    }

    /// Move past a range previously returned by `span`.
    #[inline]
    pub(crate) fn consume(&mut self, range: &Range<usize>) {
        debug_assert_eq!(range.start, self.pos, "cursor consumed out of order");
        debug_assert!(range.end <= self.len, "cursor consumed past end");
        self.pos = range.end;
    }
}

/// Fault state of an input stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StreamState {
    #[default]
    Ok,
    Faulted(StreamError),
}

impl StreamState {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, StreamState::Ok)
    }

    pub fn fault(&self) -> Option<&StreamError> {
        match self {
            StreamState::Ok => None,
            StreamState::Faulted(err) => Some(err),
        }
    }

    /// `Ok(())` while healthy, otherwise the stored fault.
    #[inline]
    pub fn check(&self) -> Result<(), StreamError> {
        match self {
            StreamState::Ok => Ok(()),
            StreamState::Faulted(err) => Err(err.clone()),
        }
    }

    /// Record a fault and return the cause now in effect.
    pub(crate) fn trip(&mut self, err: StreamError) -> StreamError {
        match self {
            StreamState::Ok => {
                *self = StreamState::Faulted(err.clone());
                err
            }
            StreamState::Faulted(first) => first.clone(),
        }
    }
}
