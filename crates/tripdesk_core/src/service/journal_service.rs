//! Journal use-cases: dated entries, search, and streaks.
//!
//! # Invariants
//! - Entries are held newest day first, on load and after every write.
//! - An entry's date is fixed at creation; edits change content only.

use super::{require_text, CommandError, CommandResult};
use crate::clock::Clock;
use crate::model::journal::{sort_newest_first, JournalRecord};
use crate::repo::record_repo::RecordRepository;
use crate::stats::streak::{streak_info, StreakInfo};
use chrono::NaiveDate;
use log::{debug, info};

/// Optional text and date criteria; both must match when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFilter {
    /// Case-insensitive substring of the content.
    pub text: Option<String>,
    /// Exact entry date.
    pub date: Option<NaiveDate>,
}

impl JournalFilter {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            date: None,
        }
    }

    pub fn on(date: NaiveDate) -> Self {
        Self {
            text: None,
            date: Some(date),
        }
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    pub fn matches(&self, entry: &JournalRecord) -> bool {
        let text_matches = match self.text.as_deref() {
            Some(needle) if !needle.is_empty() => entry
                .content
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };
        let date_matches = self.date.map_or(true, |date| entry.date == date);
        text_matches && date_matches
    }
}

pub struct JournalService<R: RecordRepository<JournalRecord>, C: Clock> {
    repo: R,
    clock: C,
    entries: Vec<JournalRecord>,
}

impl<R: RecordRepository<JournalRecord>, C: Clock> JournalService<R, C> {
    pub fn open(repo: R, clock: C) -> CommandResult<Self> {
        let mut entries = repo.load_all()?;
        sort_newest_first(&mut entries);
        debug!(
            "event=tool_mount module=journal status=ok count={}",
            entries.len()
        );
        Ok(Self {
            repo,
            clock,
            entries,
        })
    }

    /// Entries newest day first.
    pub fn entries(&self) -> &[JournalRecord] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&JournalRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Adds an entry dated today.
    pub fn add(&mut self, content: &str) -> CommandResult<JournalRecord> {
        let content = require_text(content, "journal entry")
            .inspect_err(|err| debug!("event=journal_add module=journal status=ignored reason={err}"))?;
        let entry = JournalRecord::new(content, self.clock.today());

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.commit(next)?;

        info!(
            "event=journal_add module=journal status=ok id={} date={}",
            entry.id, entry.date
        );
        Ok(entry)
    }

    pub fn edit(&mut self, id: &str, content: &str) -> CommandResult<JournalRecord> {
        let content = require_text(content, "journal entry")
            .inspect_err(|err| debug!("event=journal_edit module=journal status=ignored reason={err}"))?;

        let mut next = self.entries.clone();
        let entry = next
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| CommandError::NotFound(id.to_string()))?;
        entry.content = content;
        let updated = entry.clone();
        self.commit(next)?;

        info!("event=journal_edit module=journal status=ok id={id}");
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
        info!("event=journal_remove module=journal status=ok id={id}");
        Ok(())
    }

    /// Entries matching `filter`, newest day first.
    pub fn filter(&self, filter: &JournalFilter) -> Vec<&JournalRecord> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    pub fn streaks(&self) -> StreakInfo {
        streak_info(
            self.entries.iter().map(|entry| entry.date),
            self.clock.today(),
        )
    }

    fn commit(&mut self, mut next: Vec<JournalRecord>) -> CommandResult<()> {
        sort_newest_first(&mut next);
        self.repo.save_all(&next)?;
        self.entries = next;
        Ok(())
    }
}
