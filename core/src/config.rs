//! config.rs
//! Per-stream codec settings.
//!
//! Design notes:
//! - Settings never change the wire format; they only pick a code path or
//!   tighten what the reader accepts.
//! - Serde derives let hosts embed the struct in their own config files;
//!   missing fields fall back to `Default`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Encode/decode sequences of scalars with one slice conversion instead of
    /// per-element dispatch. Output is byte-identical either way.
    pub bulk_scalar_copy: bool,

    /// Reject collection counts above this value. `None` means the count is
    /// bounded only by the remaining input.
    pub max_collection_len: Option<u64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            bulk_scalar_copy: true,
            max_collection_len: None,
        }
    }
}

impl StreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bulk_scalar_copy(mut self, enabled: bool) -> Self {
        self.bulk_scalar_copy = enabled;
        self
    }

    pub fn with_max_collection_len(mut self, limit: u64) -> Self {
        self.max_collection_len = Some(limit);
        self
    }
}
