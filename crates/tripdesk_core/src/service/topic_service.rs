//! Topic tracker use-cases.
//!
//! # Invariants
//! - New topics start `NotStarted` dated today.
//! - A status change always refreshes the date; a rename never does.

use super::{require_text, CommandError, CommandResult};
use crate::clock::Clock;
use crate::model::topic::{TopicRecord, TopicStatus};
use crate::repo::record_repo::RecordRepository;
use crate::stats::topic_stats::{topic_stats, TopicStats};
use log::{debug, info};

pub struct TopicService<R: RecordRepository<TopicRecord>, C: Clock> {
    repo: R,
    clock: C,
    topics: Vec<TopicRecord>,
}

impl<R: RecordRepository<TopicRecord>, C: Clock> TopicService<R, C> {
    /// Mounts the tracker, loading the stored topic list.
    pub fn open(repo: R, clock: C) -> CommandResult<Self> {
        let topics = repo.load_all()?;
        debug!(
            "event=tool_mount module=topics status=ok count={}",
            topics.len()
        );
        Ok(Self {
            repo,
            clock,
            topics,
        })
    }

    /// Topics in insertion order.
    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn get(&self, id: &str) -> Option<&TopicRecord> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    pub fn add(&mut self, name: &str) -> CommandResult<TopicRecord> {
        let name = require_text(name, "topic name").inspect_err(log_rejected("topic_add"))?;
        let topic = TopicRecord::new(name, self.clock.today());

        let mut next = self.topics.clone();
        next.push(topic.clone());
        self.commit(next)?;

        info!("event=topic_add module=topics status=ok id={}", topic.id);
        Ok(topic)
    }

    pub fn set_status(&mut self, id: &str, status: TopicStatus) -> CommandResult<TopicRecord> {
        let today = self.clock.today();
        let updated = self.update(id, |topic| topic.set_status(status, today))?;
        info!(
            "event=topic_status module=topics status=ok id={} topic_status={}",
            id,
            status.as_str()
        );
        Ok(updated)
    }

    pub fn rename(&mut self, id: &str, name: &str) -> CommandResult<TopicRecord> {
        let name = require_text(name, "topic name").inspect_err(log_rejected("topic_rename"))?;
        let updated = self.update(id, |topic| topic.name = name)?;
        info!("event=topic_rename module=topics status=ok id={id}");
        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> CommandResult<()> {
        if self.get(id).is_none() {
            return Err(CommandError::NotFound(id.to_string()));
        }
        let next = self
            .topics
            .iter()
            .filter(|topic| topic.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        info!("event=topic_remove module=topics status=ok id={id}");
        Ok(())
    }

    pub fn stats(&self) -> TopicStats {
        topic_stats(&self.topics)
    }

    fn update(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut TopicRecord),
    ) -> CommandResult<TopicRecord> {
        let mut next = self.topics.clone();
        let topic = next
            .iter_mut()
            .find(|topic| topic.id == id)
            .ok_or_else(|| CommandError::NotFound(id.to_string()))?;
        apply(topic);
        let updated = topic.clone();
        self.commit(next)?;
        Ok(updated)
    }

    fn commit(&mut self, next: Vec<TopicRecord>) -> CommandResult<()> {
        self.repo.save_all(&next)?;
        self.topics = next;
        Ok(())
    }
}

fn log_rejected(event: &'static str) -> impl Fn(&CommandError) {
    move |err| debug!("event={event} module=topics status=ignored reason={err}")
}
