//! Resolution of the items required on a given weekday.

use std::collections::HashSet;

use super::{DayOfWeek, InventoryItem, ItemId, WeeklyRule};

/// Compute the items required on `weekday`.
///
/// The result holds every daily item plus every non-daily item enabled by a
/// rule for `weekday`, each once, sorted by ascending `sort_order`. Items
/// with equal sort orders keep their relative order, daily items first.
///
/// # Examples
///
/// ```
/// use satchel::domain::{
///     Category, DayOfWeek, InventoryItem, ItemId, RuleId, WeeklyRule, resolve_items,
/// };
///
/// let item = |id: &str, is_daily: bool, sort_order: i64| InventoryItem {
///     id: ItemId::new(id).expect("id"),
///     name: id.to_owned(),
///     category: Category::Other,
///     is_daily,
///     sort_order,
/// };
/// let inventory = vec![item("A", true, 1), item("B", false, 2)];
/// let rules = vec![WeeklyRule {
///     id: RuleId::new("r").expect("id"),
///     weekday: DayOfWeek::new(2).expect("weekday"),
///     item_id: ItemId::new("B").expect("id"),
///     enabled: true,
/// }];
///
/// let tuesday = resolve_items(&inventory, &rules, DayOfWeek::new(2).expect("weekday"));
/// let wednesday = resolve_items(&inventory, &rules, DayOfWeek::new(3).expect("weekday"));
/// assert_eq!(tuesday.len(), 2);
/// assert_eq!(wednesday.len(), 1);
/// ```
pub fn resolve_items(
    inventory: &[InventoryItem],
    rules: &[WeeklyRule],
    weekday: DayOfWeek,
) -> Vec<InventoryItem> {
    let enabled_ids: HashSet<&ItemId> = rules
        .iter()
        .filter(|rule| rule.applies_on(weekday))
        .map(|rule| &rule.item_id)
        .collect();

    let daily = inventory.iter().filter(|item| item.is_daily);
    let extra = inventory
        .iter()
        .filter(|item| !item.is_daily && enabled_ids.contains(&item.id));

    let mut seen = HashSet::new();
    let mut items: Vec<InventoryItem> = daily
        .chain(extra)
        .filter(|item| seen.insert(item.id.clone()))
        .cloned()
        .collect();
    items.sort_by_key(|item| item.sort_order);
    items
}

/// How one inventory item is configured for a weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayPlanEntry {
    /// The inventory item.
    pub item: InventoryItem,
    /// Whether the item is required every day.
    pub is_daily: bool,
    /// Whether an enabled rule exists for the item on the weekday.
    pub has_rule: bool,
    /// Whether the item will be resolved on the weekday.
    pub effective: bool,
}

/// Describe every inventory item's status on `weekday`, in inventory order.
pub fn weekday_plan(
    inventory: &[InventoryItem],
    rules: &[WeeklyRule],
    weekday: DayOfWeek,
) -> Vec<WeekdayPlanEntry> {
    inventory
        .iter()
        .map(|item| {
            let has_rule = rules
                .iter()
                .any(|rule| rule.applies_on(weekday) && rule.item_id == item.id);
            WeekdayPlanEntry {
                item: item.clone(),
                is_daily: item.is_daily,
                has_rule,
                effective: item.is_daily || has_rule,
            }
        })
        .collect()
}
