//! Tests for typed record access and degraded reads.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{KeyValueStoreError, MockKeyValueStore};
use crate::outbound::InMemoryKeyValueStore;

fn records_with(entries: &[(RecordKey, &str)]) -> Records<InMemoryKeyValueStore> {
    let store = InMemoryKeyValueStore::with_entries(
        entries
            .iter()
            .map(|(key, value)| (key.as_str(), *value)),
    );
    Records::new(Arc::new(store))
}

#[rstest]
fn absent_collections_read_as_empty() {
    let records = records_with(&[]);
    assert!(records.inventory().is_empty());
    assert!(records.rules().is_empty());
    assert!(records.daily_logs().is_empty());
    assert!(records.meal_session().is_none());
    assert!(records.meal_log().is_empty());
}

#[rstest]
#[case(RecordKey::Inventory, "not json")]
#[case(RecordKey::Inventory, r#"{"id":"1"}"#)]
#[case(RecordKey::WeeklyRules, "[{\"weekday\":2}]")]
#[case(RecordKey::DailyLogs, "[]")]
#[case(RecordKey::MealSession, "\"yesterday\"")]
#[case(RecordKey::MealLog, "")]
fn malformed_records_read_as_empty(#[case] key: RecordKey, #[case] raw: &str) {
    let malformed = records_with(&[(key, raw)]);
    let empty = records_with(&[]);

    assert_eq!(malformed.inventory(), empty.inventory());
    assert_eq!(malformed.rules(), empty.rules());
    assert_eq!(malformed.daily_logs(), empty.daily_logs());
    assert_eq!(malformed.meal_session(), empty.meal_session());
    assert_eq!(malformed.meal_log(), empty.meal_log());
}

#[rstest]
fn read_failures_degrade_to_defaults() {
    let mut store = MockKeyValueStore::new();
    store
        .expect_get()
        .returning(|_| Err(KeyValueStoreError::unavailable("disk detached")));
    let records = Records::new(Arc::new(store));

    assert!(records.inventory().is_empty());
    assert!(records.meal_session().is_none());
}

#[rstest]
fn write_failures_surface_as_store_errors() {
    let mut store = MockKeyValueStore::new();
    store
        .expect_set()
        .times(1)
        .returning(|key, _| Err(KeyValueStoreError::write(key, "quota exceeded")));
    let records = Records::new(Arc::new(store));

    let result = records.save_meal_log(&[]);

    assert!(matches!(result, Err(Error::Store(KeyValueStoreError::Write { .. }))));
}

#[rstest]
fn saved_records_use_their_own_keys() {
    let store = Arc::new(InMemoryKeyValueStore::default());
    let records = Records::new(Arc::clone(&store));

    records.save_rules(&[]).expect("save rules");
    records.save_meal_log(&[]).expect("save meal log");

    assert_eq!(
        store.keys(),
        vec![
            RecordKey::MealLog.as_str().to_owned(),
            RecordKey::WeeklyRules.as_str().to_owned(),
        ]
    );
    assert_eq!(
        store.get(RecordKey::WeeklyRules.as_str()).expect("get").as_deref(),
        Some("[]")
    );
}

#[rstest]
fn seeding_skips_collections_already_present() {
    let records = records_with(&[(RecordKey::Inventory, "[]")]);
    let defaults = DefaultDataset::standard();

    let seeded = records.seed_missing(&defaults).expect("seed");

    assert!(seeded);
    assert!(records.inventory().is_empty());
    assert_eq!(records.rules(), defaults.rules);
    assert!(!records.seed_missing(&defaults).expect("second seed"));
}

#[rstest]
fn blank_values_count_as_absent_when_seeding() {
    let records = records_with(&[(RecordKey::Inventory, "  ")]);
    let defaults = DefaultDataset::standard();

    records.seed_missing(&defaults).expect("seed");

    assert_eq!(records.inventory(), defaults.inventory);
}

#[rstest]
fn seeding_stops_when_presence_cannot_be_read() {
    let mut store = MockKeyValueStore::new();
    store
        .expect_get()
        .returning(|key| Err(KeyValueStoreError::read(key, "device busy")));
    store.expect_set().never();
    let records = Records::new(Arc::new(store));

    let result = records.seed_missing(&DefaultDataset::standard());

    assert!(matches!(
        result,
        Err(Error::Store(KeyValueStoreError::Read { .. }))
    ));
}
