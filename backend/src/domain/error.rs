//! Error type returned by mutating service operations.
//!
//! Reads never fail: absent, unreadable, or malformed records resolve to
//! their empty defaults. Only writes surface failures, so callers can tell a
//! persisted change from one that was lost.

use thiserror::Error;

use super::ports::KeyValueStoreError;

/// Failure raised while persisting a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The backing store rejected the operation.
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),
    /// A record could not be serialized for storage.
    #[error("failed to encode record {key}: {message}")]
    Encode {
        /// Storage key of the record.
        key: &'static str,
        /// Serializer failure description.
        message: String,
    },
}

/// Convenient result alias for service operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
