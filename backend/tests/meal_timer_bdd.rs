//! Behaviour-driven tests for the meal timer.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use chrono::{TimeDelta, TimeZone, Utc};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use satchel::domain::{MealLogEntry, MealService, MealState};
use satchel::outbound::InMemoryKeyValueStore;
use satchel::test_support::MutableClock;

#[derive(Default, ScenarioState)]
struct MealWorld {
    clock: Slot<Arc<MutableClock>>,
    meals: Slot<MealService<InMemoryKeyValueStore>>,
    last_meal: Slot<Option<MealLogEntry>>,
}

impl MealWorld {
    fn meals(&self) -> MealService<InMemoryKeyValueStore> {
        self.meals.get().expect("meal timer should be set up")
    }

    fn last_meal(&self) -> MealLogEntry {
        self.last_meal
            .get()
            .flatten()
            .expect("a meal should have been logged")
    }
}

#[fixture]
fn world() -> MealWorld {
    MealWorld::default()
}

#[given("an idle meal timer")]
fn an_idle_meal_timer(world: &MealWorld) {
    let start = Utc
        .with_ymd_and_hms(2024, 3, 4, 12, 5, 0)
        .single()
        .expect("valid timestamp");
    let clock = Arc::new(MutableClock::new(start));
    let meals = MealService::new(Arc::new(InMemoryKeyValueStore::default()), clock.clone());
    world.clock.set(clock);
    world.meals.set(meals);
}

#[when("a meal is started")]
fn a_meal_is_started(world: &MealWorld) {
    world.meals().start().expect("start should persist");
}

#[when("{seconds} seconds pass")]
fn seconds_pass(world: &MealWorld, seconds: i64) {
    world
        .clock
        .get()
        .expect("clock should be set up")
        .advance(TimeDelta::seconds(seconds));
}

#[when("the meal is ended with amount {amount}")]
fn the_meal_is_ended(world: &MealWorld, amount: String) {
    let ended = world
        .meals()
        .end(amount.trim_matches('"'))
        .expect("end should persist");
    world.last_meal.set(ended);
}

#[when("today's meals are cleared")]
fn todays_meals_are_cleared(world: &MealWorld) {
    world.meals().clear_today().expect("clear should persist");
}

#[then("the last meal lasted {minutes} minutes")]
fn the_last_meal_lasted(world: &MealWorld, minutes: u32) {
    assert_eq!(world.last_meal().minutes, minutes);
}

#[then("the last meal amount is {amount}")]
fn the_last_meal_amount_is(world: &MealWorld, amount: String) {
    assert_eq!(world.last_meal().amount, amount.trim_matches('"'));
}

#[then("the meal timer is idle")]
fn the_meal_timer_is_idle(world: &MealWorld) {
    assert_eq!(world.meals().state(), MealState::Idle);
}

#[then("no meal is logged")]
fn no_meal_is_logged(world: &MealWorld) {
    assert_eq!(world.last_meal.get(), Some(None));
    assert!(world.meals().entries().is_empty());
}

#[then("today's total is {minutes} minutes")]
fn todays_total_is(world: &MealWorld, minutes: u32) {
    let meals = world.meals();
    assert_eq!(meals.total_minutes(meals.today()), minutes);
}

#[scenario(
    path = "tests/features/meal_timer.feature",
    name = "Ending a meal logs its rounded duration"
)]
fn ending_a_meal_logs_its_rounded_duration(world: MealWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/meal_timer.feature",
    name = "Starting an active meal keeps the first start time"
)]
fn starting_an_active_meal_keeps_the_first_start_time(world: MealWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/meal_timer.feature",
    name = "Ending an idle timer logs nothing"
)]
fn ending_an_idle_timer_logs_nothing(world: MealWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/meal_timer.feature",
    name = "Clearing today discards the open session"
)]
fn clearing_today_discards_the_open_session(world: MealWorld) {
    let _ = world;
}
