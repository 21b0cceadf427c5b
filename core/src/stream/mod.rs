//! Byte streams for the codec.
//!
//! Responsibilities:
//! - `OutputStream`: append-only buffer that every `Encode` impl writes into
//! - `InputStream`: borrowed buffer with a read cursor and a sticky fault
//! - `Cursor` / `StreamState`: the bookkeeping behind the input side
//!
//! Non-responsibilities:
//! - Deciding how a type is laid out (see `codec`)
//! - IO of any kind; buffers are fully in memory

pub mod input;
pub mod output;
pub mod state;

pub use input::InputStream;
pub use output::OutputStream;
pub use state::{Cursor, StreamState};
