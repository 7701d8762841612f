//! Domain primitives, services, and ports.
//!
//! Purpose: model the belongings checklist and the meal timer independently
//! of where their state is stored. Services read and write through the
//! [`ports::KeyValueStore`] port and read time through [`ports::Clock`].
//!
//! Public surface:
//! - Inventory types ([`InventoryItem`], [`WeeklyRule`], [`DayOfWeek`]) and
//!   the pure [`resolve_items`] resolver.
//! - [`DailyLog`] and [`CheckProgress`] for the per-date check log.
//! - [`MealSession`], [`MealLogEntry`], and [`MealState`] for meal timing.
//! - [`InventoryService`], [`CheckLogService`], and [`MealService`].
//! - [`Error`], the failure raised when a write cannot be persisted.

pub mod ports;

mod check_log;
mod check_log_service;
mod error;
mod inventory;
mod inventory_service;
mod meal;
mod meal_service;
mod records;
mod seed;

pub use self::check_log::{CheckProgress, DailyLog};
pub use self::check_log_service::CheckLogService;
pub use self::error::{Error, Result};
pub use self::inventory::{
    Category, DayOfWeek, InventoryItem, InventoryValidationError, ItemId, ParseCategoryError,
    RuleId, WeekdayPlanEntry, WeeklyRule, resolve_items, weekday_plan,
};
pub use self::inventory_service::InventoryService;
pub use self::meal::{
    MealLogEntry, MealSession, MealState, StartOutcome, total_minutes, whole_minutes,
};
pub use self::meal_service::MealService;
pub use self::records::RecordKey;
pub use self::seed::DefaultDataset;
