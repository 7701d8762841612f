//! Satchel entry-point: opens the configured store and logs today's checklist.

use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};

use satchel::telemetry::init_tracing;
use satchel::{Satchel, SatchelSettings};

/// Application bootstrap.
fn main() -> io::Result<()> {
    if let Err(e) = init_tracing() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = SatchelSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let satchel = Satchel::open(&settings).map_err(io::Error::other)?;

    let view = satchel.todays_checklist();
    let missing = satchel
        .check_log()
        .missing_items(view.date, &view.items)
        .into_iter()
        .map(|item| item.name)
        .collect::<Vec<_>>();
    info!(
        date = %view.date,
        weekday = %view.weekday,
        checked = view.progress.checked,
        total = view.progress.total,
        percent = view.progress.percent(),
        ?missing,
        "today's checklist"
    );

    let meals = satchel.meals();
    info!(
        state = ?meals.state(),
        minutes_today = meals.total_minutes(meals.today()),
        "meal timer"
    );
    Ok(())
}
