//! Weekday rules that enable non-daily items on specific days.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InventoryValidationError, ItemId};

/// Day of the week as an index where 0 is Sunday and 6 is Saturday.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use satchel::domain::DayOfWeek;
///
/// let tuesday = DayOfWeek::new(2).expect("in range");
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");
/// assert_eq!(DayOfWeek::from_date(date), tuesday);
/// assert!(DayOfWeek::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// Sunday, the first index.
    pub const SUNDAY: Self = Self(0);
    /// Saturday, the last index.
    pub const SATURDAY: Self = Self(6);

    /// Validate and construct a [`DayOfWeek`].
    pub fn new(index: u8) -> Result<Self, InventoryValidationError> {
        if index > Self::SATURDAY.0 {
            return Err(InventoryValidationError::WeekdayOutOfRange { value: index });
        }
        Ok(Self(index))
    }

    /// Weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        let index = date.weekday().num_days_from_sunday();
        // num_days_from_sunday is always 0..=6
        Self(u8::try_from(index).unwrap_or(Self::SUNDAY.0))
    }

    /// Returns the raw index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Iterate over all seven days starting at Sunday.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::SUNDAY.0..=Self::SATURDAY.0).map(Self)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = InventoryValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(value: DayOfWeek) -> Self {
        value.0
    }
}

/// Stable identifier of a weekday rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Validate and construct a [`RuleId`].
    pub fn new(id: impl Into<String>) -> Result<Self, InventoryValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InventoryValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Generate a new random [`RuleId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for RuleId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RuleId> for String {
    fn from(value: RuleId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RuleId {
    type Error = InventoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Enables an inventory item on one day of the week.
///
/// At most one rule exists per `(weekday, item_id)` pair. Rules are stored
/// only while enabled; disabling a pair deletes its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRule {
    /// Unique rule id.
    pub id: RuleId,
    /// Day the rule applies to.
    pub weekday: DayOfWeek,
    /// Item the rule enables.
    pub item_id: ItemId,
    /// Whether the rule is in effect.
    pub enabled: bool,
}

impl WeeklyRule {
    /// Whether this rule is enabled and targets `weekday`.
    pub fn applies_on(&self, weekday: DayOfWeek) -> bool {
        self.enabled && self.weekday == weekday
    }

    /// Whether this rule targets the `(weekday, item_id)` pair.
    pub fn matches(&self, weekday: DayOfWeek, item_id: &ItemId) -> bool {
        self.weekday == weekday && &self.item_id == item_id
    }
}
