//! Stock inventory and rules written to a fresh store.

use super::{Category, DayOfWeek, InventoryItem, ItemId, RuleId, WeeklyRule};

const STOCK_ITEMS: [(&str, &str, Category, bool); 15] = [
    ("1", "Smartphone", Category::Digital, true),
    ("2", "Wallet", Category::Essential, true),
    ("3", "House key", Category::Essential, true),
    ("4", "Student ID", Category::Essential, true),
    ("5", "Wireless earbuds", Category::Digital, true),
    ("6", "Power bank", Category::Digital, true),
    ("7", "Handkerchief & tissues", Category::Hygiene, true),
    ("8", "Face mask", Category::Hygiene, true),
    ("9", "Writing supplies", Category::Study, true),
    ("10", "Laptop", Category::Digital, true),
    ("11", "Scientific calculator", Category::Study, false),
    ("12", "Lab coat", Category::Study, false),
    ("13", "English reference book", Category::Study, false),
    ("14", "Folding umbrella", Category::Other, false),
    ("15", "Water bottle", Category::Food, true),
];

/// Inventory and rules used to initialize an empty store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultDataset {
    /// Items written when no inventory is stored.
    pub inventory: Vec<InventoryItem>,
    /// Rules written when no rules are stored.
    pub rules: Vec<WeeklyRule>,
}

impl DefaultDataset {
    /// The stock dataset: fifteen everyday belongings and one Tuesday rule
    /// for the scientific calculator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use satchel::domain::DefaultDataset;
    /// let defaults = DefaultDataset::standard();
    /// assert_eq!(defaults.inventory.len(), 15);
    /// assert_eq!(defaults.rules.len(), 1);
    /// ```
    pub fn standard() -> Self {
        let inventory = STOCK_ITEMS
            .iter()
            .zip(1_i64..)
            .filter_map(|((id, name, category, is_daily), sort_order)| {
                Some(InventoryItem {
                    id: ItemId::new(*id).ok()?,
                    name: (*name).to_owned(),
                    category: *category,
                    is_daily: *is_daily,
                    sort_order,
                })
            })
            .collect();

        let rules = match (RuleId::new("w1"), DayOfWeek::new(2), ItemId::new("11")) {
            (Ok(id), Ok(weekday), Ok(item_id)) => vec![WeeklyRule {
                id,
                weekday,
                item_id,
                enabled: true,
            }],
            _ => Vec::new(),
        };

        Self { inventory, rules }
    }
}
