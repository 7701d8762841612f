//! Wiring of the checklist and meal services over one shared store.

use std::sync::Arc;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use tracing::info;

use crate::config::SatchelSettings;
use crate::domain::ports::{KeyValueStore, KeyValueStoreError};
use crate::domain::{
    CheckLogService, CheckProgress, DailyLog, DayOfWeek, DefaultDataset, Error, InventoryItem,
    InventoryService, MealService,
};
use crate::outbound::FileKeyValueStore;

/// Everything the daily checklist screen shows for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistView {
    /// Date being shown.
    pub date: NaiveDate,
    /// Weekday of `date`.
    pub weekday: DayOfWeek,
    /// Items required on `date`, in display order.
    pub items: Vec<InventoryItem>,
    /// Check log for `date`.
    pub log: DailyLog,
    /// Completion tally of `items` against `log`.
    pub progress: CheckProgress,
}

/// Application core: the inventory, check log, and meal services sharing
/// one store and one clock.
pub struct Satchel<S> {
    inventory: InventoryService<S>,
    check_log: CheckLogService<S>,
    meals: MealService<S>,
    defaults: DefaultDataset,
}

impl<S: KeyValueStore> Satchel<S> {
    /// Wire the services over `store`. Call [`Satchel::initialize`] once per
    /// fresh store to seed `defaults`.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, defaults: DefaultDataset) -> Self {
        Self {
            inventory: InventoryService::new(Arc::clone(&store), Arc::clone(&clock)),
            check_log: CheckLogService::new(Arc::clone(&store), Arc::clone(&clock)),
            meals: MealService::new(store, clock),
            defaults,
        }
    }

    /// Seed inventory and rules that are not yet stored.
    pub fn initialize(&self) -> Result<(), Error> {
        self.inventory.initialize(&self.defaults)
    }

    /// Inventory and weekday rule operations.
    pub fn inventory(&self) -> &InventoryService<S> {
        &self.inventory
    }

    /// Daily check log operations.
    pub fn check_log(&self) -> &CheckLogService<S> {
        &self.check_log
    }

    /// Meal timer operations.
    pub fn meals(&self) -> &MealService<S> {
        &self.meals
    }

    /// The dataset used for seeding and resets.
    pub fn defaults(&self) -> &DefaultDataset {
        &self.defaults
    }

    /// Resolved items, check log, and progress for `date`.
    pub fn checklist(&self, date: NaiveDate) -> ChecklistView {
        let weekday = DayOfWeek::from_date(date);
        let items = self.inventory.items_for(weekday);
        let log = self.check_log.log(date);
        let progress = log.progress(&items);
        ChecklistView {
            date,
            weekday,
            items,
            log,
            progress,
        }
    }

    /// [`Satchel::checklist`] for the clock's current local date.
    pub fn todays_checklist(&self) -> ChecklistView {
        self.checklist(self.check_log.today())
    }

    /// Erase all state for every feature and reseed the defaults.
    pub fn reset_all(&self) -> Result<(), Error> {
        self.check_log.reset_all(&self.defaults)
    }
}

impl Satchel<FileKeyValueStore> {
    /// Open the durable store described by `settings` using the system clock.
    ///
    /// Seeds the stock dataset unless seeding is disabled.
    pub fn open(settings: &SatchelSettings) -> Result<Self, Error> {
        let data_dir = Utf8PathBuf::try_from(settings.data_dir()).map_err(|err| {
            KeyValueStoreError::unavailable(format!("data directory is not UTF-8: {err}"))
        })?;
        let store = FileKeyValueStore::open(&data_dir)?;
        let defaults = if settings.seeds_defaults() {
            DefaultDataset::standard()
        } else {
            DefaultDataset::default()
        };
        let satchel = Self::new(Arc::new(store), Arc::new(DefaultClock), defaults);
        if settings.seeds_defaults() {
            satchel.initialize()?;
        }
        info!(%data_dir, "satchel opened");
        Ok(satchel)
    }
}
