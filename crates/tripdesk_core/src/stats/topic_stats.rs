use crate::model::topic::{TopicRecord, TopicStatus};

/// Per-status counts of a topic list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TopicStats {
    pub fn count(&self, status: TopicStatus) -> usize {
        match status {
            TopicStatus::NotStarted => self.not_started,
            TopicStatus::InProgress => self.in_progress,
            TopicStatus::Completed => self.completed,
        }
    }

    /// `completed / total * 100`, or 0 for an empty list.
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    /// Completion rounded to the nearest whole percent.
    pub fn completion_percent_rounded(&self) -> u32 {
        self.completion_percent().round() as u32
    }
}

pub fn topic_stats(topics: &[TopicRecord]) -> TopicStats {
    topics
        .iter()
        .fold(TopicStats::default(), |mut stats, topic| {
            stats.total += 1;
            match topic.status {
                TopicStatus::NotStarted => stats.not_started += 1,
                TopicStatus::InProgress => stats.in_progress += 1,
                TopicStatus::Completed => stats.completed += 1,
            }
            stats
        })
}
