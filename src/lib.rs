//! recfile - Typed single-record file persistence
//!
//! Stores one encodable value per named file under a caller-provided
//! base directory, as structured text (JSON by default, TOML as an
//! alternative). Each operation resolves its path, performs one
//! filesystem call, and returns; no state is held between calls.

pub mod error;
pub mod format;
pub mod store;

pub use error::{CodecError, Result, StoreError};
pub use format::{Format, Json, Toml};
pub use store::{Persistable, Store};
