//! Daily check log bookkeeping.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use super::error::Result;
use super::ports::KeyValueStore;
use super::records::Records;
use super::{CheckProgress, DailyLog, DefaultDataset, InventoryItem, ItemId};

/// Check log service backed by a key-value store.
pub struct CheckLogService<S> {
    records: Records<S>,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for CheckLogService<S> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: KeyValueStore> CheckLogService<S> {
    /// Create a new service over `store`, reading "today" from `clock`.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Records::new(store),
            clock,
        }
    }

    /// The clock's current local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// The log for `date`, or an unsaved empty log if none is stored.
    pub fn log(&self, date: NaiveDate) -> DailyLog {
        self.records
            .daily_logs()
            .remove(&date)
            .unwrap_or_else(|| DailyLog::empty(date))
    }

    /// Flip whether `item_id` is checked on `date` and return the saved log.
    pub fn toggle(&self, item_id: &ItemId, date: NaiveDate) -> Result<DailyLog> {
        let mut logs = self.records.daily_logs();
        let log = logs.entry(date).or_insert_with(|| DailyLog::empty(date));
        log.toggle(item_id);
        let updated = log.clone();
        self.records.save_daily_logs(&logs)?;
        debug!(item_id = %item_id, %date, checked = updated.is_checked(item_id), "check toggled");
        Ok(updated)
    }

    /// Uncheck everything on `date`.
    pub fn reset(&self, date: NaiveDate) -> Result<()> {
        let mut logs = self.records.daily_logs();
        logs.insert(date, DailyLog::empty(date));
        self.records.save_daily_logs(&logs)?;
        debug!(%date, "check log reset");
        Ok(())
    }

    /// Erase every collection in the store, then reseed inventory and rules
    /// from `defaults`.
    pub fn reset_all(&self, defaults: &DefaultDataset) -> Result<()> {
        self.records.clear()?;
        self.records.seed_missing(defaults)?;
        info!("all data reset to defaults");
        Ok(())
    }

    /// How many of `items` are checked on `date`.
    pub fn progress(&self, date: NaiveDate, items: &[InventoryItem]) -> CheckProgress {
        self.log(date).progress(items)
    }

    /// The subset of `items` not checked on `date`, in their given order.
    pub fn missing_items(&self, date: NaiveDate, items: &[InventoryItem]) -> Vec<InventoryItem> {
        self.log(date)
            .missing(items)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "check_log_service_tests.rs"]
mod tests;
