//! Savings ledger use-cases and the monthly goal.
//!
//! # Invariants
//! - Stored amounts are non-negative; direction comes from `EntryKind`.
//! - At most one goal exists; setting a goal replaces it, clearing removes it.
//! - A stale goal is kept in storage but contributes 0% progress.

use super::{require_text, CommandError, CommandResult};
use crate::clock::Clock;
use crate::model::ledger::{sort_newest_first, EntryKind, LedgerRecord, SavingsGoal};
use crate::repo::record_repo::RecordRepository;
use crate::repo::singleton_repo::SingletonRepository;
use crate::stats::ledger_totals::{goal_progress, ledger_summary, LedgerSummary};
use log::{debug, info};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a form amount: required, decimal, non-negative.
pub fn parse_amount(value: &str) -> CommandResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CommandError::MissingAmount);
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CommandError::InvalidAmount(trimmed.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CommandError::InvalidAmount(trimmed.to_string()));
    }
    Ok(amount.normalize())
}

pub struct LedgerService<R, G, C>
where
    R: RecordRepository<LedgerRecord>,
    G: SingletonRepository<SavingsGoal>,
    C: Clock,
{
    entries_repo: R,
    goal_repo: G,
    clock: C,
    entries: Vec<LedgerRecord>,
    goal: Option<SavingsGoal>,
}

impl<R, G, C> LedgerService<R, G, C>
where
    R: RecordRepository<LedgerRecord>,
    G: SingletonRepository<SavingsGoal>,
    C: Clock,
{
    pub fn open(entries_repo: R, goal_repo: G, clock: C) -> CommandResult<Self> {
        let mut entries = entries_repo.load_all()?;
        sort_newest_first(&mut entries);
        let goal = goal_repo.load()?;
        debug!(
            "event=tool_mount module=ledger status=ok count={} has_goal={}",
            entries.len(),
            goal.is_some()
        );
        Ok(Self {
            entries_repo,
            goal_repo,
            clock,
            entries,
            goal,
        })
    }

    /// Entries newest day first.
    pub fn entries(&self) -> &[LedgerRecord] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&LedgerRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Adds an entry dated today.
    pub fn add(
        &mut self,
        amount: &str,
        description: &str,
        kind: EntryKind,
    ) -> CommandResult<LedgerRecord> {
        let (amount, description) = validate_entry(amount, description)
            .inspect_err(|err| debug!("event=ledger_add module=ledger status=ignored reason={err}"))?;
        let entry = LedgerRecord::new(amount, description, kind, self.clock.today());

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.commit(next)?;

        info!("event=ledger_add module=ledger status=ok id={}", entry.id);
        Ok(entry)
    }

    /// Replaces amount, description and kind; the date is kept.
    pub fn edit(
        &mut self,
        id: &str,
        amount: &str,
        description: &str,
        kind: EntryKind,
    ) -> CommandResult<LedgerRecord> {
        let (amount, description) = validate_entry(amount, description)
            .inspect_err(|err| debug!("event=ledger_edit module=ledger status=ignored reason={err}"))?;

        let mut next = self.entries.clone();
        let entry = next
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| CommandError::NotFound(id.to_string()))?;
        entry.amount = amount;
        entry.description = description;
        entry.kind = kind;
        let updated = entry.clone();
        self.commit(next)?;

        info!("event=ledger_edit module=ledger status=ok id={id}");
        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> CommandResult<()> {
        if self.get(id).is_none() {
            return Err(CommandError::NotFound(id.to_string()));
        }
        let next = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        info!("event=ledger_remove module=ledger status=ok id={id}");
        Ok(())
    }

    /// Stored goal, stale or not.
    pub fn goal(&self) -> Option<&SavingsGoal> {
        self.goal.as_ref()
    }

    /// Stored goal when it belongs to the current month.
    pub fn active_goal(&self) -> Option<&SavingsGoal> {
        let month = self.clock.current_month();
        self.goal.as_ref().filter(|goal| !goal.is_stale(&month))
    }

    /// Replaces any goal with a positive target for the current month.
    pub fn set_goal(&mut self, monthly_target: &str) -> CommandResult<SavingsGoal> {
        let target = parse_amount(monthly_target)
            .and_then(|target| {
                if target > Decimal::ZERO {
                    Ok(target)
                } else {
                    Err(CommandError::InvalidAmount(monthly_target.trim().to_string()))
                }
            })
            .inspect_err(|err| debug!("event=goal_set module=ledger status=ignored reason={err}"))?;

        let goal = SavingsGoal::new(target, self.clock.current_month());
        self.goal_repo.save(&goal)?;
        self.goal = Some(goal.clone());
        info!(
            "event=goal_set module=ledger status=ok month={}",
            goal.month
        );
        Ok(goal)
    }

    /// Discards the goal so a new target can be entered.
    pub fn clear_goal(&mut self) -> CommandResult<()> {
        self.goal_repo.clear()?;
        self.goal = None;
        info!("event=goal_clear module=ledger status=ok");
        Ok(())
    }

    /// All-time and this-month totals.
    pub fn summary(&self) -> LedgerSummary {
        ledger_summary(&self.entries, &self.clock.current_month())
    }

    /// This-month net against the goal, in percent within `[0, 100]`.
    pub fn goal_progress(&self) -> Decimal {
        let month = self.clock.current_month();
        let summary = ledger_summary(&self.entries, &month);
        goal_progress(self.goal.as_ref(), summary.this_month.net(), &month)
    }

    fn commit(&mut self, mut next: Vec<LedgerRecord>) -> CommandResult<()> {
        sort_newest_first(&mut next);
        self.entries_repo.save_all(&next)?;
        self.entries = next;
        Ok(())
    }
}

fn validate_entry(amount: &str, description: &str) -> CommandResult<(Decimal, String)> {
    let amount = parse_amount(amount)?;
    let description = require_text(description, "description")?;
    Ok((amount, description))
}
