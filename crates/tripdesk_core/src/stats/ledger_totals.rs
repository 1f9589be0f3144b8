//! Ledger aggregation and goal progress.

use crate::model::ledger::{EntryKind, LedgerRecord, SavingsGoal};
use rust_decimal::Decimal;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Saved/spent sums over a set of entries.
///
/// Sums saturate at the `Decimal` range instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub saved: Decimal,
    pub spent: Decimal,
}

impl Totals {
    /// `saved - spent`, saturating.
    pub fn net(&self) -> Decimal {
        self.saved.saturating_sub(self.spent)
    }
}

/// All-time and current-month totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub all_time: Totals,
    pub this_month: Totals,
}

pub fn totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a LedgerRecord>,
{
    entries
        .into_iter()
        .fold(Totals::default(), |mut totals, entry| {
            match entry.kind {
                EntryKind::Saved => totals.saved = totals.saved.saturating_add(entry.amount),
                EntryKind::Spent => totals.spent = totals.spent.saturating_add(entry.amount),
            }
            totals
        })
}

/// Aggregates all entries and the subset dated in `current_month` (`YYYY-MM`).
pub fn ledger_summary(entries: &[LedgerRecord], current_month: &str) -> LedgerSummary {
    LedgerSummary {
        all_time: totals(entries),
        this_month: totals(entries.iter().filter(|entry| entry.in_month(current_month))),
    }
}

/// Goal progress in percent, clamped to `[0, 100]`.
///
/// Reads 0 when there is no goal, the goal is stale, or its target is not
/// positive.
pub fn goal_progress(
    goal: Option<&SavingsGoal>,
    this_month_net: Decimal,
    current_month: &str,
) -> Decimal {
    let Some(goal) = goal else {
        return Decimal::ZERO;
    };
    if goal.is_stale(current_month) || goal.monthly_target <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match this_month_net
        .checked_div(goal.monthly_target)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
    {
        Some(percent) => percent.clamp(Decimal::ZERO, ONE_HUNDRED),
        // Overflow only happens far outside the clamp range.
        None if this_month_net > Decimal::ZERO => ONE_HUNDRED,
        None => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::{goal_progress, ledger_summary};
    use crate::model::ledger::{EntryKind, LedgerRecord, SavingsGoal};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn entry(amount: i64, kind: EntryKind, date: NaiveDate) -> LedgerRecord {
        LedgerRecord::new(Decimal::from(amount), "x", kind, date)
    }

    #[test]
    fn saved_minus_spent_is_net() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let entries = [
            entry(100, EntryKind::Saved, date),
            entry(30, EntryKind::Spent, date),
        ];
        let summary = ledger_summary(&entries, "2024-04");
        assert_eq!(summary.all_time.saved, Decimal::from(100));
        assert_eq!(summary.all_time.spent, Decimal::from(30));
        assert_eq!(summary.all_time.net(), Decimal::from(70));
        assert_eq!(summary.this_month, summary.all_time);
    }

    #[test]
    fn month_filter_excludes_other_months() {
        let april = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
        let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let entries = [
            entry(40, EntryKind::Saved, april),
            entry(10, EntryKind::Saved, may),
        ];
        let summary = ledger_summary(&entries, "2024-05");
        assert_eq!(summary.all_time.net(), Decimal::from(50));
        assert_eq!(summary.this_month.net(), Decimal::from(10));
    }

    #[test]
    fn progress_is_ratio_clamped_and_zero_when_stale() {
        let goal = SavingsGoal::new(Decimal::from(200), "2024-05");
        assert_eq!(
            goal_progress(Some(&goal), Decimal::from(50), "2024-05"),
            Decimal::from(25)
        );
        assert_eq!(
            goal_progress(Some(&goal), Decimal::from(250), "2024-05"),
            Decimal::from(100)
        );
        assert_eq!(
            goal_progress(Some(&goal), Decimal::from(-20), "2024-05"),
            Decimal::ZERO
        );
        assert_eq!(
            goal_progress(Some(&goal), Decimal::from(50), "2024-06"),
            Decimal::ZERO
        );
        assert_eq!(goal_progress(None, Decimal::from(50), "2024-05"), Decimal::ZERO);
    }

    #[test]
    fn huge_amounts_saturate_instead_of_overflowing() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let huge = LedgerRecord::new(Decimal::MAX, "x", EntryKind::Saved, date);
        let entries = [huge.clone(), huge, entry(1, EntryKind::Spent, date)];

        let summary = ledger_summary(&entries, "2024-04");
        assert_eq!(summary.all_time.saved, Decimal::MAX);
        assert_eq!(summary.all_time.net(), Decimal::MAX - Decimal::ONE);

        let goal = SavingsGoal::new(Decimal::ONE, "2024-04");
        assert_eq!(
            goal_progress(Some(&goal), summary.this_month.net(), "2024-04"),
            Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn zero_target_reads_zero() {
        let goal = SavingsGoal::new(Decimal::ZERO, "2024-05");
        assert_eq!(
            goal_progress(Some(&goal), Decimal::from(50), "2024-05"),
            Decimal::ZERO
        );
    }
}
