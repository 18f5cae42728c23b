//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `stickyplan_core` linkage and the configured storage.
//! - Print today's agenda as a plain-text day view.

use stickyplan_core::db::open_db;
use stickyplan_core::{
    hour_label, init_logging, CalendarView, LogNotifier, Planner, PlannerConfig,
    SqliteTaskStorage, SystemClock, TaskStore,
};

fn main() {
    println!("stickyplan_core ping={}", stickyplan_core::ping());
    println!("stickyplan_core version={}", stickyplan_core::core_version());

    let config = match PlannerConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("storage error: {err}");
            std::process::exit(1);
        }
    };
    let storage = SqliteTaskStorage::with_key(&conn, config.storage_key.as_str());
    let store = TaskStore::open(storage, LogNotifier, SystemClock);
    let planner = Planner::new(store, config.default_view, config.week_start);

    println!("{}", planner.header_label());
    match planner.view() {
        CalendarView::Day(grid) => {
            for slot in &grid.slots {
                let titles: Vec<&str> = slot.tasks.iter().map(|task| task.title.as_str()).collect();
                println!("{:>6} | {}", hour_label(slot.hour()), titles.join(", "));
            }
        }
        view => println!("{} tasks in view", view.task_count()),
    }
}
