//! Journal writing streaks.
//!
//! # Invariants
//! - Only distinct entry dates count; several entries on one day are one day.
//! - The current streak must include today; a missing today means 0.

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakInfo {
    /// Consecutive days ending today.
    pub current: u32,
    /// Longest run of consecutive days anywhere in the history.
    pub best: u32,
    /// Number of entries, counting repeats on the same day.
    pub total_entries: usize,
}

/// Computes streaks from entry dates (any order, duplicates allowed).
pub fn streak_info<I>(dates: I, today: NaiveDate) -> StreakInfo
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut total_entries = 0usize;
    let distinct: BTreeSet<NaiveDate> = dates
        .into_iter()
        .inspect(|_| total_entries += 1)
        .collect();
    let descending: Vec<NaiveDate> = distinct.into_iter().rev().collect();

    StreakInfo {
        current: current_streak(&descending, today),
        best: best_streak(&descending),
        total_entries,
    }
}

/// Walks backward from today over `descending` distinct dates.
pub fn current_streak(descending: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0u32;
    for (offset, date) in descending.iter().enumerate() {
        let expected = today.checked_sub_days(Days::new(offset as u64));
        if expected != Some(*date) {
            break;
        }
        streak += 1;
    }
    streak
}

/// Longest run of calendar-consecutive dates in `descending` distinct dates.
pub fn best_streak(descending: &[NaiveDate]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for date in descending {
        run = match previous {
            Some(prev) if prev.signed_duration_since(*date).num_days() == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(*date);
    }
    best
}
