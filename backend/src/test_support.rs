//! Shared test doubles for service and adapter tests.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use camino::Utf8PathBuf;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use tempfile::TempDir;

use crate::outbound::FileKeyValueStore;

/// Clock frozen at a settable instant.
///
/// `local()` converts that instant to the host time zone, so tests that need
/// a fixed calendar date should pass the date explicitly.
#[derive(Debug)]
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Freeze the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    /// Move the clock forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: i64) {
        self.advance(TimeDelta::milliseconds(millis));
    }

    /// Jump the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// A [`FileKeyValueStore`] rooted in a fresh temporary directory.
///
/// The directory is deleted when the returned [`TempDir`] drops.
pub fn temp_file_store() -> io::Result<(TempDir, FileKeyValueStore)> {
    let dir = tempfile::tempdir()?;
    let root = Utf8PathBuf::try_from(dir.path().join("store"))
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let store = FileKeyValueStore::open(&root).map_err(io::Error::other)?;
    Ok((dir, store))
}
