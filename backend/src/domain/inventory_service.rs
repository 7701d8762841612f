//! Inventory and weekday rule management.
//!
//! The service owns the inventory and rule collections: it seeds them on a
//! fresh store, applies CRUD edits, and resolves the items required today.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use super::error::Result;
use super::ports::KeyValueStore;
use super::records::Records;
use super::{
    Category, DayOfWeek, DefaultDataset, InventoryItem, ItemId, RuleId, WeekdayPlanEntry,
    WeeklyRule, resolve_items, weekday_plan,
};

/// Inventory service backed by a key-value store.
pub struct InventoryService<S> {
    records: Records<S>,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for InventoryService<S> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: KeyValueStore> InventoryService<S> {
    /// Create a new service over `store`, reading "today" from `clock`.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Records::new(store),
            clock,
        }
    }

    /// Seed the inventory and rules from `defaults` where the store holds
    /// none. Collections already present, even empty ones, are kept.
    pub fn initialize(&self, defaults: &DefaultDataset) -> Result<()> {
        if self.records.seed_missing(defaults)? {
            info!(
                items = defaults.inventory.len(),
                rules = defaults.rules.len(),
                "seeded default inventory"
            );
        }
        Ok(())
    }

    /// The stored inventory in stored order.
    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.records.inventory()
    }

    /// The stored weekday rules.
    pub fn rules(&self) -> Vec<WeeklyRule> {
        self.records.rules()
    }

    /// Items required on `weekday`.
    pub fn items_for(&self, weekday: DayOfWeek) -> Vec<InventoryItem> {
        resolve_items(&self.records.inventory(), &self.records.rules(), weekday)
    }

    /// Items required on the clock's current local weekday.
    pub fn todays_items(&self) -> Vec<InventoryItem> {
        self.items_for(self.today())
    }

    /// The clock's current local weekday.
    pub fn today(&self) -> DayOfWeek {
        DayOfWeek::from_date(self.clock.local().date_naive())
    }

    /// Per-item configuration for `weekday`, in inventory order.
    pub fn weekday_plan(&self, weekday: DayOfWeek) -> Vec<WeekdayPlanEntry> {
        weekday_plan(&self.records.inventory(), &self.records.rules(), weekday)
    }

    /// First item whose name equals `name` exactly.
    pub fn find_item_by_name(&self, name: &str) -> Option<InventoryItem> {
        self.records
            .inventory()
            .into_iter()
            .find(|item| item.name == name)
    }

    /// Append a new daily item named `name`.
    ///
    /// Returns `None` without touching the store when `name` is blank. The
    /// new item defaults to [`Category::Other`] and sorts after the existing
    /// items.
    pub fn add_item(&self, name: &str, category: Option<Category>) -> Result<Option<InventoryItem>> {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring item with blank name");
            return Ok(None);
        }

        let mut inventory = self.records.inventory();
        let sort_order = i64::try_from(inventory.len())
            .unwrap_or(i64::MAX)
            .saturating_add(1);
        let item = InventoryItem {
            id: ItemId::random(),
            name: name.to_owned(),
            category: category.unwrap_or_default(),
            is_daily: true,
            sort_order,
        };
        inventory.push(item.clone());
        self.records.save_inventory(&inventory)?;
        debug!(item_id = %item.id, sort_order, "item added");
        Ok(Some(item))
    }

    /// Remove the item `id` and every rule that references it.
    ///
    /// Returns whether an item was removed. Rules naming `id` are purged
    /// even when no such item exists.
    pub fn delete_item(&self, id: &ItemId) -> Result<bool> {
        let mut inventory = self.records.inventory();
        let before = inventory.len();
        inventory.retain(|item| &item.id != id);
        let removed = inventory.len() != before;
        if removed {
            self.records.save_inventory(&inventory)?;
        }

        let mut rules = self.records.rules();
        let rule_count = rules.len();
        rules.retain(|rule| &rule.item_id != id);
        if rules.len() != rule_count {
            self.records.save_rules(&rules)?;
        }

        debug!(item_id = %id, removed, rules_removed = rule_count - rules.len(), "item deleted");
        Ok(removed)
    }

    /// Replace the stored item sharing `item.id`.
    ///
    /// Returns whether an item was replaced; unknown ids are ignored.
    pub fn update_item(&self, item: InventoryItem) -> Result<bool> {
        let mut inventory = self.records.inventory();
        let Some(slot) = inventory.iter_mut().find(|stored| stored.id == item.id) else {
            debug!(item_id = %item.id, "ignoring update for unknown item");
            return Ok(false);
        };
        let item_id = item.id.clone();
        *slot = item;
        self.records.save_inventory(&inventory)?;
        debug!(item_id = %item_id, "item updated");
        Ok(true)
    }

    /// Enable or disable `item_id` on `weekday`.
    ///
    /// Any existing rule for the pair is replaced. Disabling leaves no rule
    /// behind, so repeating a call has no further effect.
    pub fn set_rule(&self, weekday: DayOfWeek, item_id: &ItemId, enabled: bool) -> Result<()> {
        let mut rules = self.records.rules();
        rules.retain(|rule| !rule.matches(weekday, item_id));
        if enabled {
            rules.push(WeeklyRule {
                id: RuleId::random(),
                weekday,
                item_id: item_id.clone(),
                enabled: true,
            });
        }
        self.records.save_rules(&rules)?;
        debug!(%weekday, item_id = %item_id, enabled, "weekday rule set");
        Ok(())
    }
}

#[cfg(test)]
#[path = "inventory_service_tests.rs"]
mod tests;
