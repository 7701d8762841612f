//! Domain ports for the hexagonal boundary.
//!
//! The only driven port is the key-value store. Wall-clock time is read
//! through [`mockable::Clock`], re-exported here so services and adapters
//! share one seam.

mod key_value_store;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
pub use mockable::Clock;
