//! Meal timing: the open session and the log of finished sessions.
//!
//! At most one session is open at a time. Ending a session turns it into a
//! [`MealLogEntry`] keyed by the calendar day the session started on.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const CLOCK_FORMAT: &str = "%H:%M";

/// An open meal-timing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealSession {
    started_at: DateTime<Utc>,
}

impl MealSession {
    /// Open a session starting at `started_at`.
    pub fn start(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    /// Returns the start timestamp.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Running time at `now`; never negative.
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.started_at).max(TimeDelta::zero())
    }

    /// Close the session at `ended_at`, rendering times in `tz`.
    pub fn finish<Tz>(&self, ended_at: DateTime<Utc>, amount: &str, tz: &Tz) -> MealLogEntry
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let local_start = self.started_at.with_timezone(tz);
        let local_end = ended_at.with_timezone(tz);
        MealLogEntry {
            day: local_start.date_naive(),
            start_time: local_start.format(CLOCK_FORMAT).to_string(),
            end_time: local_end.format(CLOCK_FORMAT).to_string(),
            minutes: whole_minutes(self.elapsed(ended_at)),
            amount: amount.trim().to_owned(),
        }
    }
}

/// Whether a meal session is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealState {
    /// No session is open.
    Idle,
    /// A session is open.
    Active(MealSession),
}

impl MealState {
    /// The open session, if any.
    pub fn session(&self) -> Option<&MealSession> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }
}

/// Result of asking to start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session was opened.
    Started(MealSession),
    /// A session was already open and was left untouched.
    AlreadyActive(MealSession),
}

impl StartOutcome {
    /// The session that is open after the call.
    pub fn session(&self) -> MealSession {
        match self {
            Self::Started(session) | Self::AlreadyActive(session) => *session,
        }
    }
}

/// A finished meal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealLogEntry {
    /// Calendar day the session started on.
    pub day: NaiveDate,
    /// Local start time as `HH:MM`.
    pub start_time: String,
    /// Local end time as `HH:MM`.
    pub end_time: String,
    /// Duration rounded to the nearest whole minute.
    pub minutes: u32,
    /// Free-text description of how much was eaten.
    #[serde(default)]
    pub amount: String,
}

/// Round a duration to the nearest whole minute, treating negatives as zero.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use satchel::domain::whole_minutes;
///
/// assert_eq!(whole_minutes(TimeDelta::milliseconds(125_000)), 2);
/// assert_eq!(whole_minutes(TimeDelta::seconds(150)), 3);
/// assert_eq!(whole_minutes(TimeDelta::seconds(-30)), 0);
/// ```
pub fn whole_minutes(duration: TimeDelta) -> u32 {
    if duration <= TimeDelta::zero() {
        return 0;
    }
    let rounded = (duration + TimeDelta::seconds(30)).num_minutes();
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Sum the minutes of every entry logged on `day`.
pub fn total_minutes(entries: &[MealLogEntry], day: NaiveDate) -> u32 {
    entries
        .iter()
        .filter(|entry| entry.day == day)
        .fold(0_u32, |total, entry| total.saturating_add(entry.minutes))
}
