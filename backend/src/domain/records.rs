//! Typed access to the JSON collections held in the key-value store.
//!
//! Every read degrades to the collection's empty default when the key is
//! absent, the store fails, or the stored text does not parse. Writes, and
//! the presence checks that guard seeding, propagate failures as [`Error`].

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{Error, Result};
use super::ports::KeyValueStore;
use super::{DailyLog, DefaultDataset, InventoryItem, MealLogEntry, MealSession, WeeklyRule};

/// Storage keys, one per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    /// Ordered list of [`InventoryItem`].
    Inventory,
    /// Unordered list of [`WeeklyRule`].
    WeeklyRules,
    /// Map from date to [`DailyLog`].
    DailyLogs,
    /// The open [`MealSession`], absent when idle.
    MealSession,
    /// Oldest-first list of [`MealLogEntry`].
    MealLog,
}

impl RecordKey {
    /// Returns the key string used in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => "satchel.inventory",
            Self::WeeklyRules => "satchel.weekly_rules",
            Self::DailyLogs => "satchel.daily_logs",
            Self::MealSession => "satchel.meal_session",
            Self::MealLog => "satchel.meal_log",
        }
    }
}

pub(crate) type DailyLogs = BTreeMap<NaiveDate, DailyLog>;

pub(crate) struct Records<S> {
    store: Arc<S>,
}

impl<S> Clone for Records<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> Records<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub(crate) fn inventory(&self) -> Vec<InventoryItem> {
        self.load(RecordKey::Inventory).unwrap_or_default()
    }

    pub(crate) fn save_inventory(&self, items: &[InventoryItem]) -> Result<()> {
        self.save(RecordKey::Inventory, items)
    }

    pub(crate) fn rules(&self) -> Vec<WeeklyRule> {
        self.load(RecordKey::WeeklyRules).unwrap_or_default()
    }

    pub(crate) fn save_rules(&self, rules: &[WeeklyRule]) -> Result<()> {
        self.save(RecordKey::WeeklyRules, rules)
    }

    pub(crate) fn daily_logs(&self) -> DailyLogs {
        self.load(RecordKey::DailyLogs).unwrap_or_default()
    }

    pub(crate) fn save_daily_logs(&self, logs: &DailyLogs) -> Result<()> {
        self.save(RecordKey::DailyLogs, logs)
    }

    pub(crate) fn meal_session(&self) -> Option<MealSession> {
        self.load(RecordKey::MealSession)
    }

    pub(crate) fn save_meal_session(&self, session: &MealSession) -> Result<()> {
        self.save(RecordKey::MealSession, session)
    }

    pub(crate) fn discard_meal_session(&self) -> Result<()> {
        self.remove(RecordKey::MealSession)
    }

    pub(crate) fn meal_log(&self) -> Vec<MealLogEntry> {
        self.load(RecordKey::MealLog).unwrap_or_default()
    }

    pub(crate) fn save_meal_log(&self, entries: &[MealLogEntry]) -> Result<()> {
        self.save(RecordKey::MealLog, entries)
    }

    /// Write each default collection whose key holds no value yet.
    ///
    /// Returns whether anything was written. A failed read aborts seeding so
    /// stored collections are never overwritten on a guess.
    pub(crate) fn seed_missing(&self, defaults: &DefaultDataset) -> Result<bool> {
        let mut seeded = false;
        if !self.contains(RecordKey::Inventory)? {
            self.save_inventory(&defaults.inventory)?;
            seeded = true;
        }
        if !self.contains(RecordKey::WeeklyRules)? {
            self.save_rules(&defaults.rules)?;
            seeded = true;
        }
        Ok(seeded)
    }

    pub(crate) fn clear(&self) -> Result<()> {
        self.store.clear()?;
        Ok(())
    }

    fn contains(&self, key: RecordKey) -> Result<bool> {
        let raw = self.store.get(key.as_str())?;
        Ok(raw.is_some_and(|value| !value.trim().is_empty()))
    }

    fn raw(&self, key: RecordKey) -> Option<String> {
        match self.store.get(key.as_str()) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(key = key.as_str(), %error, "store read failed; using default");
                None
            }
        }
    }

    fn load<T: DeserializeOwned>(&self, key: RecordKey) -> Option<T> {
        let raw = self.raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key = key.as_str(), %error, "stored record is malformed; using default");
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: RecordKey, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|error| Error::Encode {
            key: key.as_str(),
            message: error.to_string(),
        })?;
        self.store.set(key.as_str(), &raw)?;
        debug!(key = key.as_str(), bytes = raw.len(), "record saved");
        Ok(())
    }

    fn remove(&self, key: RecordKey) -> Result<()> {
        self.store.remove(key.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
