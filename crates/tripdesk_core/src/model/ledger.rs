//! Savings ledger entries and the monthly goal.

use super::{new_record_id, RecordId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Saved,
    Spent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    /// Non-negative; the sign comes from `kind`. Stored as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl LedgerRecord {
    pub fn new(
        amount: Decimal,
        description: impl Into<String>,
        kind: EntryKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: new_record_id(),
            date,
            amount,
            description: description.into(),
            kind,
        }
    }

    /// `+amount` when saved, `-amount` when spent.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EntryKind::Saved => self.amount,
            EntryKind::Spent => -self.amount,
        }
    }

    /// Whether the entry falls in the `YYYY-MM` month.
    pub fn in_month(&self, month: &str) -> bool {
        crate::clock::month_key(self.date) == month
    }
}

/// Single active monthly savings target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    #[serde(rename = "monthlyTarget", with = "rust_decimal::serde::float")]
    pub monthly_target: Decimal,
    /// `YYYY-MM` month the goal was set for.
    #[serde(rename = "currentMonth")]
    pub month: String,
}

impl SavingsGoal {
    pub fn new(monthly_target: Decimal, month: impl Into<String>) -> Self {
        Self {
            monthly_target,
            month: month.into(),
        }
    }

    /// A goal set in an earlier month still persists but no longer counts.
    pub fn is_stale(&self, current_month: &str) -> bool {
        self.month != current_month
    }
}

/// Sorts entries newest day first, keeping same-day order.
pub fn sort_newest_first(entries: &mut [LedgerRecord]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
