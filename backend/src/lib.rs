//! Daily belongings checklist and meal timer core.
//!
//! The crate resolves which belongings are needed today from a static
//! inventory and per-weekday rules, tracks which of them have been checked
//! off, and times meals into a per-day log. All state lives in a
//! [`domain::ports::KeyValueStore`] as JSON records; rendering and user
//! interaction are left to the caller.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use satchel::app::Satchel;
//! use satchel::domain::DefaultDataset;
//! use satchel::outbound::InMemoryKeyValueStore;
//!
//! let satchel = Satchel::new(
//!     Arc::new(InMemoryKeyValueStore::default()),
//!     Arc::new(DefaultClock),
//!     DefaultDataset::standard(),
//! );
//! satchel.initialize().expect("seed defaults");
//!
//! let today = satchel.todays_checklist();
//! assert!(today.items.len() >= 11);
//! assert_eq!(today.progress.checked, 0);
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use app::{ChecklistView, Satchel};
pub use config::SatchelSettings;
