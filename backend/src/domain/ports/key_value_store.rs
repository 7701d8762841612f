//! Port for the on-device key-value store backing every collection.
//!
//! Values are opaque text (JSON in practice). Adapters decide where the text
//! lives; the domain only ever addresses it by key.

use thiserror::Error;

/// Errors raised by key-value store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyValueStoreError {
    /// The store could not be opened or locked.
    #[error("key-value store unavailable: {message}")]
    Unavailable {
        /// Adapter-specific failure description.
        message: String,
    },
    /// Reading a value failed.
    #[error("failed to read key {key}: {message}")]
    Read {
        /// Key being read.
        key: String,
        /// Adapter-specific failure description.
        message: String,
    },
    /// Writing or removing a value failed.
    #[error("failed to write key {key}: {message}")]
    Write {
        /// Key being written.
        key: String,
        /// Adapter-specific failure description.
        message: String,
    },
}

impl KeyValueStoreError {
    /// The store as a whole cannot be reached.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Reading `key` failed.
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Writing or removing `key` failed.
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Durable string store addressed by key.
///
/// Implementations must be safe to share behind an `Arc`; callers issue one
/// operation at a time and expect each to complete before the next.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    /// Remove every key held by the store.
    fn clear(&self) -> Result<(), KeyValueStoreError>;
}
