//! Error types for recfile

use std::io;
use thiserror::Error;

/// Boxed error produced by a [`Format`](crate::format::Format)
/// implementation during encode or decode.
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for store operations
///
/// Every variant carries the logical name of the record the failed
/// operation addressed, so callers can tell an absent record apart
/// from a malformed or unwritable one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no record named `{name}`")]
    NotFound { name: String },

    #[error("failed to encode record `{name}`: {source}")]
    Encode {
        name: String,
        #[source]
        source: CodecError,
    },

    #[error("failed to decode record `{name}`: {source}")]
    Decode {
        name: String,
        #[source]
        source: CodecError,
    },

    #[error("failed to read record `{name}`: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write record `{name}`: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete record `{name}`: {source}")]
    Delete {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Logical name of the record the failed operation addressed
    pub fn record_name(&self) -> &str {
        match self {
            StoreError::NotFound { name }
            | StoreError::Encode { name, .. }
            | StoreError::Decode { name, .. }
            | StoreError::Read { name, .. }
            | StoreError::Write { name, .. }
            | StoreError::Delete { name, .. } => name,
        }
    }

    /// True when the record was absent, as opposed to malformed or
    /// unreachable
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
