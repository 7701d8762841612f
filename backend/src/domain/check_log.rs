//! Per-date record of which resolved items have been checked off.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{InventoryItem, ItemId};

/// Checked item ids for one calendar date.
///
/// `checked` behaves as a set kept in check order; an id never appears twice
/// after a [`DailyLog::toggle`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use satchel::domain::{DailyLog, ItemId};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
/// let id = ItemId::new("A").expect("valid id");
/// let mut log = DailyLog::empty(date);
///
/// log.toggle(&id);
/// assert!(log.is_checked(&id));
/// log.toggle(&id);
/// assert!(log.checked.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Calendar date the log belongs to.
    pub date: NaiveDate,
    /// Ids checked on `date`.
    #[serde(default)]
    pub checked: Vec<ItemId>,
}

impl DailyLog {
    /// A log for `date` with nothing checked.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            checked: Vec::new(),
        }
    }

    /// Whether `item_id` is checked.
    pub fn is_checked(&self, item_id: &ItemId) -> bool {
        self.checked.contains(item_id)
    }

    /// Flip the membership of `item_id`.
    pub fn toggle(&mut self, item_id: &ItemId) {
        if self.is_checked(item_id) {
            self.checked.retain(|checked| checked != item_id);
        } else {
            self.checked.push(item_id.clone());
        }
    }

    /// Tally how many of `items` are checked.
    pub fn progress(&self, items: &[InventoryItem]) -> CheckProgress {
        let checked = items.iter().filter(|item| self.is_checked(&item.id)).count();
        CheckProgress::new(checked, items.len())
    }

    /// The subset of `items` not yet checked, in their given order.
    pub fn missing<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        items
            .iter()
            .filter(|item| !self.is_checked(&item.id))
            .collect()
    }
}

/// Completion tally for a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckProgress {
    /// Items checked.
    pub checked: usize,
    /// Items in the list.
    pub total: usize,
}

impl CheckProgress {
    /// Build a tally; `checked` is capped at `total`.
    pub fn new(checked: usize, total: usize) -> Self {
        Self {
            checked: checked.min(total),
            total,
        }
    }

    /// Whole-number completion percentage, rounded down; 0 for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use satchel::domain::CheckProgress;
    /// assert_eq!(CheckProgress::new(1, 3).percent(), 33);
    /// assert_eq!(CheckProgress::new(0, 0).percent(), 0);
    /// ```
    pub fn percent(&self) -> usize {
        (self.checked * 100).checked_div(self.total).unwrap_or(0)
    }

    /// Whether every item is checked. An empty list counts as complete.
    pub fn is_complete(&self) -> bool {
        self.checked == self.total
    }
}
