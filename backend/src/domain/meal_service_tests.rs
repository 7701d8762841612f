//! Tests for the meal timer service.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{KeyValueStoreError, MockKeyValueStore};
use crate::domain::{Error, RecordKey};
use crate::outbound::InMemoryKeyValueStore;
use crate::test_support::MutableClock;

struct Harness {
    store: Arc<InMemoryKeyValueStore>,
    clock: Arc<MutableClock>,
    service: MealService<InMemoryKeyValueStore>,
}

impl Harness {
    fn today(&self) -> NaiveDate {
        self.clock.utc().with_timezone(&Local).date_naive()
    }

    fn meal(&self, millis: i64, amount: &str) -> MealLogEntry {
        self.service.start().expect("start");
        self.clock.advance_millis(millis);
        self.service
            .end(amount)
            .expect("end")
            .expect("session was active")
    }
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 12, 5, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemoryKeyValueStore::default());
    let clock = Arc::new(MutableClock::new(noon()));
    let service = MealService::new(Arc::clone(&store), clock.clone());
    Harness {
        store,
        clock,
        service,
    }
}

fn entry(day: &str, minutes: u32) -> MealLogEntry {
    MealLogEntry {
        day: day.parse().expect("valid date"),
        start_time: "12:00".to_owned(),
        end_time: "12:10".to_owned(),
        minutes,
        amount: String::new(),
    }
}

#[rstest]
fn starts_idle(harness: Harness) {
    assert_eq!(harness.service.state(), MealState::Idle);
    assert!(harness.service.elapsed().is_none());
}

#[rstest]
fn start_opens_session_at_clock_time(harness: Harness) {
    let outcome = harness.service.start().expect("start");

    assert_eq!(outcome, StartOutcome::Started(MealSession::start(noon())));
    assert_eq!(
        harness.service.state(),
        MealState::Active(MealSession::start(noon()))
    );
}

#[rstest]
fn starting_twice_keeps_the_first_start(harness: Harness) {
    harness.service.start().expect("first start");
    harness.clock.advance(TimeDelta::minutes(5));

    let outcome = harness.service.start().expect("second start");

    assert_eq!(outcome, StartOutcome::AlreadyActive(MealSession::start(noon())));
    assert_eq!(
        harness.service.state().session().map(MealSession::started_at),
        Some(noon())
    );
}

#[rstest]
fn end_rounds_to_whole_minutes(harness: Harness) {
    let logged = harness.meal(125_000, "half");

    assert_eq!(logged.minutes, 2);
    assert_eq!(logged.amount, "half");
    assert_eq!(logged.day, harness.today());
    assert_eq!(harness.service.state(), MealState::Idle);
    assert_eq!(harness.service.entries(), vec![logged]);
}

#[rstest]
fn end_trims_amount(harness: Harness) {
    let logged = harness.meal(60_000, "  all  ");
    assert_eq!(logged.amount, "all");
}

#[rstest]
fn end_while_idle_changes_nothing(harness: Harness) {
    let ended = harness.service.end("full").expect("end");

    assert!(ended.is_none());
    assert!(harness.store.keys().is_empty());
}

#[rstest]
fn elapsed_tracks_the_clock(harness: Harness) {
    harness.service.start().expect("start");
    harness.clock.advance(TimeDelta::seconds(90));

    assert_eq!(harness.service.elapsed(), Some(TimeDelta::seconds(90)));
}

#[rstest]
fn entries_for_lists_newest_first(harness: Harness) {
    let first = harness.meal(3 * 60_000, "some");
    harness.clock.advance(TimeDelta::minutes(1));
    let second = harness.meal(5 * 60_000, "most");

    assert_eq!(
        harness.service.entries_for(harness.today()),
        vec![second, first]
    );
    assert_eq!(harness.service.total_minutes(harness.today()), 8);
}

#[rstest]
fn clear_today_keeps_other_days(harness: Harness) {
    let today = harness.today();
    let yesterday = today.pred_opt().expect("previous day");
    let older = MealLogEntry {
        day: yesterday,
        ..entry("2000-01-01", 15)
    };
    harness
        .store
        .set(
            RecordKey::MealLog.as_str(),
            &serde_json::to_string(&[older.clone()]).expect("encode"),
        )
        .expect("seed log");
    harness.meal(5 * 60_000, "");
    harness.service.start().expect("restart");

    harness.service.clear_today().expect("clear today");

    assert_eq!(harness.service.entries(), vec![older]);
    assert_eq!(harness.service.state(), MealState::Idle);
    assert_eq!(harness.service.total_minutes(today), 0);
}

#[rstest]
fn clear_all_removes_everything(harness: Harness) {
    harness.meal(5 * 60_000, "");
    harness.service.start().expect("restart");

    harness.service.clear_all().expect("clear all");

    assert!(harness.service.entries().is_empty());
    assert_eq!(harness.service.state(), MealState::Idle);
    assert!(harness.store.get(RecordKey::MealSession.as_str()).expect("get").is_none());
}

#[rstest]
fn total_minutes_ignores_other_days(harness: Harness) {
    harness
        .store
        .set(
            RecordKey::MealLog.as_str(),
            &serde_json::to_string(&[entry("2024-03-01", 12), entry("2024-03-02", 7)])
                .expect("encode"),
        )
        .expect("seed log");

    let day: NaiveDate = "2024-03-01".parse().expect("valid date");
    assert_eq!(harness.service.total_minutes(day), 12);
}

/// In-memory store whose meal writes can be made to fail once.
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryKeyValueStore,
    fail_next_remove: AtomicBool,
    fail_next_log_write: AtomicBool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        if key == RecordKey::MealLog.as_str() && self.fail_next_log_write.swap(false, Ordering::SeqCst)
        {
            return Err(KeyValueStoreError::write(key, "disk full"));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        if self.fail_next_remove.swap(false, Ordering::SeqCst) {
            return Err(KeyValueStoreError::write(key, "disk full"));
        }
        self.inner.remove(key)
    }

    fn clear(&self) -> Result<(), KeyValueStoreError> {
        self.inner.clear()
    }
}

fn flaky_meals() -> (Arc<FlakyStore>, Arc<MutableClock>, MealService<FlakyStore>) {
    let store = Arc::new(FlakyStore::default());
    let clock = Arc::new(MutableClock::new(noon()));
    let meals = MealService::new(Arc::clone(&store), clock.clone());
    (store, clock, meals)
}

#[rstest]
fn failed_session_discard_keeps_the_meal_unlogged() {
    let (store, clock, meals) = flaky_meals();
    meals.start().expect("start");
    clock.advance_millis(125_000);
    store.fail_next_remove.store(true, Ordering::SeqCst);

    let first = meals.end("a");

    assert!(matches!(
        first,
        Err(Error::Store(KeyValueStoreError::Write { .. }))
    ));
    assert!(meals.entries().is_empty());
    assert_eq!(meals.state(), MealState::Active(MealSession::start(noon())));

    let retried = meals.end("a").expect("retry end");
    assert!(retried.is_some());
    assert_eq!(meals.entries().len(), 1);
    assert_eq!(meals.state(), MealState::Idle);
}

#[rstest]
fn failed_log_write_reopens_the_session() {
    let (store, clock, meals) = flaky_meals();
    meals.start().expect("start");
    clock.advance_millis(125_000);
    store.fail_next_log_write.store(true, Ordering::SeqCst);

    let first = meals.end("a");

    assert!(matches!(first, Err(Error::Store(_))));
    assert!(meals.entries().is_empty());
    assert_eq!(meals.state(), MealState::Active(MealSession::start(noon())));

    let retried = meals
        .end("a")
        .expect("retry end")
        .expect("session is still open");
    assert_eq!(retried.minutes, 2);
    assert_eq!(meals.entries(), vec![retried]);
}

#[rstest]
fn end_writes_nothing_when_the_session_cannot_be_discarded() {
    let open = serde_json::to_string(&MealSession::start(noon())).expect("encode session");
    let mut store = MockKeyValueStore::new();
    store.expect_get().returning(move |key| {
        Ok((key == RecordKey::MealSession.as_str()).then(|| open.clone()))
    });
    store
        .expect_remove()
        .times(1)
        .returning(|key| Err(KeyValueStoreError::write(key, "read-only")));
    store.expect_set().never();
    let meals = MealService::new(Arc::new(store), Arc::new(MutableClock::new(noon())));

    assert!(meals.end("all").is_err());
}
