//! Desk shell: section switching, theme preference, and tool mounting.
//!
//! # Responsibility
//! - Hand out freshly loaded tool services bound to one store and clock.
//! - Track which section is mounted and persist the theme.
//!
//! # Invariants
//! - Tools never share in-memory state; each mount reloads from storage.

use super::gallery_service::GalleryService;
use super::journal_service::JournalService;
use super::ledger_service::LedgerService;
use super::topic_service::TopicService;
use super::CommandResult;
use crate::clock::Clock;
use crate::model::drawing::DrawingRecord;
use crate::model::journal::JournalRecord;
use crate::model::ledger::{LedgerRecord, SavingsGoal};
use crate::model::prefs::{ActiveSection, Theme};
use crate::model::topic::TopicRecord;
use crate::repo::record_repo::KvRecordRepository;
use crate::repo::singleton_repo::{KvSingletonRepository, SingletonRepository};
use crate::store::KeyValueStore;
use log::info;

pub type DeskTopics<'s, S, C> = TopicService<KvRecordRepository<&'s S, TopicRecord>, &'s C>;
pub type DeskJournal<'s, S, C> = JournalService<KvRecordRepository<&'s S, JournalRecord>, &'s C>;
pub type DeskLedger<'s, S, C> = LedgerService<
    KvRecordRepository<&'s S, LedgerRecord>,
    KvSingletonRepository<&'s S, SavingsGoal>,
    &'s C,
>;
pub type DeskGallery<'s, S, C> = GalleryService<KvRecordRepository<&'s S, DrawingRecord>, &'s C>;

pub struct Desk<'s, S: KeyValueStore, C: Clock> {
    store: &'s S,
    clock: &'s C,
    active: ActiveSection,
    theme: Theme,
}

impl<'s, S: KeyValueStore, C: Clock> Desk<'s, S, C> {
    /// Opens the shell on the default section with the stored theme.
    pub fn open(store: &'s S, clock: &'s C) -> CommandResult<Self> {
        let theme = theme_repo(store).load()?.unwrap_or_default();
        Ok(Self {
            store,
            clock,
            active: ActiveSection::default(),
            theme,
        })
    }

    pub fn active_section(&self) -> ActiveSection {
        self.active
    }

    pub fn switch_to(&mut self, section: ActiveSection) {
        if self.active != section {
            info!(
                "event=section_switch module=desk status=ok from={} to={}",
                self.active.as_str(),
                section.as_str()
            );
        }
        self.active = section;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips light/dark and persists the choice.
    pub fn toggle_theme(&mut self) -> CommandResult<Theme> {
        let next = self.theme.toggled();
        theme_repo(self.store).save(&next)?;
        self.theme = next;
        Ok(next)
    }

    pub fn topics(&self) -> CommandResult<DeskTopics<'s, S, C>> {
        TopicService::open(KvRecordRepository::new(self.store), self.clock)
    }

    pub fn journal(&self) -> CommandResult<DeskJournal<'s, S, C>> {
        JournalService::open(KvRecordRepository::new(self.store), self.clock)
    }

    pub fn ledger(&self) -> CommandResult<DeskLedger<'s, S, C>> {
        LedgerService::open(
            KvRecordRepository::new(self.store),
            KvSingletonRepository::new(self.store),
            self.clock,
        )
    }

    pub fn gallery(&self) -> CommandResult<DeskGallery<'s, S, C>> {
        GalleryService::open(KvRecordRepository::new(self.store), self.clock)
    }
}

fn theme_repo<S: KeyValueStore>(store: &S) -> KvSingletonRepository<&S, Theme> {
    KvSingletonRepository::new(store)
}
