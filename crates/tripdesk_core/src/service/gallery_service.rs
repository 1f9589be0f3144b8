//! Saved-drawing gallery.
//!
//! Append-only: drawings are never pruned or renamed by the app.

use super::CommandResult;
use crate::clock::Clock;
use crate::model::drawing::{display_timestamp, CanvasSnapshot, DrawingRecord};
use crate::repo::record_repo::RecordRepository;
use log::{debug, info};

pub struct GalleryService<R: RecordRepository<DrawingRecord>, C: Clock> {
    repo: R,
    clock: C,
    drawings: Vec<DrawingRecord>,
}

impl<R: RecordRepository<DrawingRecord>, C: Clock> GalleryService<R, C> {
    pub fn open(repo: R, clock: C) -> CommandResult<Self> {
        let drawings = repo.load_all()?;
        debug!(
            "event=tool_mount module=gallery status=ok count={}",
            drawings.len()
        );
        Ok(Self {
            repo,
            clock,
            drawings,
        })
    }

    /// Drawings in save order.
    pub fn drawings(&self) -> &[DrawingRecord] {
        &self.drawings
    }

    /// Appends a snapshot named `Drawing {n}` where `n` is its 1-based
    /// position in the gallery.
    pub fn save(&mut self, snapshot: CanvasSnapshot) -> CommandResult<DrawingRecord> {
        let name = format!("Drawing {}", self.drawings.len() + 1);
        let drawing = DrawingRecord::new(name, snapshot, display_timestamp(self.clock.now()));

        let mut next = self.drawings.clone();
        next.push(drawing.clone());
        self.repo.save_all(&next)?;
        self.drawings = next;

        info!(
            "event=drawing_save module=gallery status=ok id={} bytes={}",
            drawing.id,
            drawing.snapshot.as_data_url().len()
        );
        Ok(drawing)
    }
}
