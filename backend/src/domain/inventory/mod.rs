//! Inventory items, weekday rules, and today's item resolution.
//!
//! The inventory is the static list of belongings. Weekday rules add
//! non-daily items on specific days of the week. The resolver combines the
//! two into the ordered list of items required for a given weekday.

use std::fmt;

mod item;
mod resolver;
mod rule;

pub use item::{Category, InventoryItem, ItemId, ParseCategoryError};
pub use resolver::{WeekdayPlanEntry, resolve_items, weekday_plan};
pub use rule::{DayOfWeek, RuleId, WeeklyRule};

/// Validation errors raised by inventory value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryValidationError {
    /// Identifiers must contain at least one non-whitespace character.
    EmptyId,
    /// Weekday indices run from 0 (Sunday) to 6 (Saturday).
    WeekdayOutOfRange {
        /// Rejected index.
        value: u8,
    },
}

impl fmt::Display for InventoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identifier must not be blank"),
            Self::WeekdayOutOfRange { value } => {
                write!(f, "weekday must be between 0 and 6 (got {value})")
            }
        }
    }
}

impl std::error::Error for InventoryValidationError {}
