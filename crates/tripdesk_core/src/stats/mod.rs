//! Derived statistics over full collections.
//!
//! All functions are pure and recompute from scratch; callers pass the
//! current day or month explicitly.

pub mod ledger_totals;
pub mod streak;
pub mod topic_stats;
