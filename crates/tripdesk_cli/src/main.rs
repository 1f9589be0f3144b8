//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tripdesk_core` linkage and open a store end to end.
//! - Print a deterministic, read-only summary of every tool.
//!
//! Usage: `tripdesk_cli [config.json]`

use std::process::ExitCode;
use tripdesk_core::{AppConfig, Desk, SqliteStore, SystemClock};

fn main() -> ExitCode {
    println!("tripdesk_core ping={}", tripdesk_core::ping());
    println!("tripdesk_core version={}", tripdesk_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Ok(log_dir) = std::path::absolute(config.effective_log_dir()) {
        tripdesk_core::init_logging(&config.log_level, &log_dir)?;
    }

    let store = SqliteStore::open(config.store_path())?;
    let clock = SystemClock;
    let desk = Desk::open(&store, &clock)?;

    let topics = desk.topics()?.stats();
    println!(
        "topics total={} completed={} in_progress={} not_started={} percent={}",
        topics.total,
        topics.completed,
        topics.in_progress,
        topics.not_started,
        topics.completion_percent_rounded()
    );

    let journal = desk.journal()?.streaks();
    println!(
        "journal entries={} current_streak={} best_streak={}",
        journal.total_entries, journal.current, journal.best
    );

    let ledger = desk.ledger()?;
    let summary = ledger.summary();
    println!(
        "ledger saved={:.2} spent={:.2} net={:.2} month_net={:.2} goal_progress={:.1}",
        summary.all_time.saved,
        summary.all_time.spent,
        summary.all_time.net(),
        summary.this_month.net(),
        ledger.goal_progress()
    );

    println!("gallery drawings={}", desk.gallery()?.drawings().len());
    println!("theme={:?}", desk.theme());
    Ok(())
}
