//! Inventory item identity, category, and record shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::InventoryValidationError;

/// Stable identifier of an inventory item.
///
/// Stock items use short numeric strings; items added at runtime receive a
/// random UUID. Both forms are opaque to the domain.
///
/// # Examples
///
/// ```
/// use satchel::domain::ItemId;
///
/// let id = ItemId::new("11").expect("non-blank id");
/// assert_eq!(id.as_ref(), "11");
/// assert!(ItemId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Validate and construct an [`ItemId`].
    pub fn new(id: impl Into<String>) -> Result<Self, InventoryValidationError> {
        Self::from_owned(id.into())
    }

    /// Generate a new random [`ItemId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, InventoryValidationError> {
        if id.trim().is_empty() {
            return Err(InventoryValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = InventoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Grouping used to label inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Phones, laptops, chargers.
    Digital,
    /// Wallet, keys, identification.
    Essential,
    /// Tissues, masks.
    Hygiene,
    /// Stationery and course material.
    Study,
    /// Drinks and snacks.
    Food,
    /// Anything else, including categories this build does not know.
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::Digital,
        Self::Essential,
        Self::Hygiene,
        Self::Study,
        Self::Food,
        Self::Other,
    ];

    /// Returns the stored string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use satchel::domain::Category;
    /// assert_eq!(Category::Hygiene.as_str(), "hygiene");
    /// assert_eq!(Category::default().as_str(), "other");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Essential => "essential",
            Self::Hygiene => "hygiene",
            Self::Study => "study",
            Self::Food => "food",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError {
                input: s.to_owned(),
            })
    }
}

/// One belonging tracked by the checklist.
///
/// Items with `is_daily` set appear every day. Other items appear only on
/// weekdays with an enabled [`WeeklyRule`](super::WeeklyRule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique item id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Display grouping; absent in storage means [`Category::Other`].
    #[serde(default)]
    pub category: Category,
    /// Whether the item is required every day.
    pub is_daily: bool,
    /// Ascending display position. Values may collide.
    pub sort_order: i64,
}
