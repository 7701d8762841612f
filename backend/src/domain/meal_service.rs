//! Meal session state machine and meal log.
//!
//! Sessions move between idle and active. Starting while active and ending
//! while idle leave the store untouched.

use std::sync::Arc;

use chrono::{Local, NaiveDate, TimeDelta};
use mockable::Clock;
use tracing::{debug, warn};

use super::error::Result;
use super::ports::KeyValueStore;
use super::records::Records;
use super::{MealLogEntry, MealSession, MealState, StartOutcome, total_minutes};

/// Meal timer service backed by a key-value store.
pub struct MealService<S> {
    records: Records<S>,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for MealService<S> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: KeyValueStore> MealService<S> {
    /// Create a new service over `store`, reading "now" from `clock`.
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

    /// Whether a session is open.
    pub fn state(&self) -> MealState {
        self.records
            .meal_session()
            .map_or(MealState::Idle, MealState::Active)
    }

    /// Open a session at the current time unless one is already open.
    pub fn start(&self) -> Result<StartOutcome> {
        if let Some(open) = self.records.meal_session() {
            debug!(started_at = %open.started_at(), "meal session already active");
            return Ok(StartOutcome::AlreadyActive(open));
        }
        let session = MealSession::start(self.clock.utc());
        self.records.save_meal_session(&session)?;
        debug!(started_at = %session.started_at(), "meal session started");
        Ok(StartOutcome::Started(session))
    }

    /// Close the open session, append it to the log, and return the entry.
    ///
    /// Returns `None` when no session is open. The session is consumed before
    /// the log is written; if the log write fails the session is reopened, so
    /// a failed call can be retried without logging the meal twice.
    pub fn end(&self, amount: &str) -> Result<Option<MealLogEntry>> {
        let Some(session) = self.records.meal_session() else {
            debug!("no meal session to end");
            return Ok(None);
        };
        let entry = session.finish(self.clock.utc(), amount, &Local);
        self.records.discard_meal_session()?;

        let mut log = self.records.meal_log();
        log.push(entry.clone());
        if let Err(error) = self.records.save_meal_log(&log) {
            if let Err(restore_error) = self.records.save_meal_session(&session) {
                warn!(%restore_error, "failed to reopen meal session after log write failure");
            }
            return Err(error);
        }
        debug!(day = %entry.day, minutes = entry.minutes, "meal session ended");
        Ok(Some(entry))
    }

    /// Running time of the open session.
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.records
            .meal_session()
            .map(|session| session.elapsed(self.clock.utc()))
    }

    /// Every logged entry, oldest first.
    pub fn entries(&self) -> Vec<MealLogEntry> {
        self.records.meal_log()
    }

    /// Entries logged on `day`, newest first.
    pub fn entries_for(&self, day: NaiveDate) -> Vec<MealLogEntry> {
        let mut entries: Vec<MealLogEntry> = self
            .records
            .meal_log()
            .into_iter()
            .filter(|entry| entry.day == day)
            .collect();
        entries.reverse();
        entries
    }

    /// Sum of logged minutes on `day`.
    pub fn total_minutes(&self, day: NaiveDate) -> u32 {
        total_minutes(&self.records.meal_log(), day)
    }

    /// Remove today's entries and discard any open session.
    pub fn clear_today(&self) -> Result<()> {
        let today = self.today();
        let mut log = self.records.meal_log();
        let before = log.len();
        log.retain(|entry| entry.day != today);
        if log.len() != before {
            self.records.save_meal_log(&log)?;
        }
        self.records.discard_meal_session()?;
        debug!(%today, removed = before - log.len(), "today's meal log cleared");
        Ok(())
    }

    /// Remove every entry and discard any open session.
    pub fn clear_all(&self) -> Result<()> {
        self.records.save_meal_log(&[])?;
        self.records.discard_meal_session()?;
        debug!("meal log cleared");
        Ok(())
    }
}

#[cfg(test)]
#[path = "meal_service_tests.rs"]
mod tests;
