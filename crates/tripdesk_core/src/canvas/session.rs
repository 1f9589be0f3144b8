//! Canvas session: pointer state machine over a surface and its history.
//!
//! `Idle --down--> Drawing --move*--> Drawing --up|leave--> Idle`.
//! Every stroke end, and every clear, records one history snapshot.

use super::brush::{Brush, BrushColor, Tool};
use super::history::SnapshotHistory;
use super::surface::{Point, Surface};
use super::{CanvasConfig, CanvasError, CanvasResult};
use crate::clock::Clock;
use crate::model::drawing::{CanvasSnapshot, DrawingRecord};
use crate::repo::record_repo::RecordRepository;
use crate::service::gallery_service::GalleryService;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Mouse or touch input, already mapped to surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerState {
    Idle,
    Drawing { last: Point },
}

/// Downloadable PNG of the current surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// `drawing-<epoch_millis>.png`
    pub file_name: String,
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Writes the image into `dir` under its file name.
    pub fn write_into(&self, dir: impl AsRef<Path>) -> CanvasResult<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        Ok(path)
    }
}

pub struct CanvasSession {
    surface: Surface,
    brush: Brush,
    state: PointerState,
    history: SnapshotHistory,
}

impl CanvasSession {
    /// Creates a blank surface and records it as history entry 0.
    pub fn new(config: &CanvasConfig) -> CanvasResult<Self> {
        config.validate().map_err(CanvasError::InvalidConfig)?;
        let surface = Surface::blank(config.width, config.height);
        let history = SnapshotHistory::new(surface.snapshot()?, config.history_limit);
        debug!(
            "event=canvas_mount module=canvas status=ok width={} height={}",
            config.width, config.height
        );
        Ok(Self {
            surface,
            brush: Brush::default(),
            state: PointerState::Idle,
            history,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.brush.tool = tool;
    }

    pub fn set_color(&mut self, color: &str) -> CanvasResult<()> {
        self.brush.color = BrushColor::parse(color)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: u32) -> CanvasResult<()> {
        self.brush.set_width(width)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PointerState::Drawing { .. })
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_pointer(&self) -> usize {
        self.history.pointer()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> CanvasResult<()> {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up | PointerEvent::Leave => return self.pointer_up(),
        }
        Ok(())
    }

    /// Starts a path at `point`; no pixels change until the first move.
    pub fn pointer_down(&mut self, point: Point) {
        self.state = PointerState::Drawing { last: point };
    }

    /// Extends the current path; ignored while idle.
    pub fn pointer_move(&mut self, point: Point) {
        if let PointerState::Drawing { last } = self.state {
            self.surface.stroke_segment(last, point, &self.brush);
            self.state = PointerState::Drawing { last: point };
        }
    }

    /// Ends the stroke and records a snapshot; ignored while idle.
    pub fn pointer_up(&mut self) -> CanvasResult<()> {
        if !self.is_drawing() {
            return Ok(());
        }
        self.state = PointerState::Idle;
        self.record_snapshot("stroke")
    }

    /// Restores the previous snapshot. Returns `false` at the first entry.
    /// The history pointer only moves once the bitmap is restored.
    pub fn undo(&mut self) -> CanvasResult<bool> {
        self.state = PointerState::Idle;
        let Some(snapshot) = self.history.previous() else {
            return Ok(false);
        };
        self.surface.restore(snapshot)?;
        self.history.undo();
        debug!(
            "event=canvas_undo module=canvas status=ok pointer={}",
            self.history.pointer()
        );
        Ok(true)
    }

    /// Wipes the surface and records the blank state as a new snapshot.
    pub fn clear(&mut self) -> CanvasResult<()> {
        self.state = PointerState::Idle;
        self.surface.clear();
        self.record_snapshot("clear")
    }

    /// Current bitmap as a PNG data URL.
    pub fn snapshot(&self) -> CanvasResult<CanvasSnapshot> {
        self.surface.snapshot()
    }

    /// Saves the current bitmap into the gallery; history is untouched.
    pub fn save_drawing<R, C>(
        &self,
        gallery: &mut GalleryService<R, C>,
    ) -> CanvasResult<DrawingRecord>
    where
        R: RecordRepository<DrawingRecord>,
        C: Clock,
    {
        let snapshot = self.snapshot()?;
        Ok(gallery.save(snapshot)?)
    }

    /// PNG export named by the clock's current instant.
    pub fn export(&self, clock: &impl Clock) -> CanvasResult<ExportedImage> {
        let png = self.surface.encode_png()?;
        let file_name = format!("drawing-{}.png", clock.now().timestamp_millis());
        info!(
            "event=canvas_export module=canvas status=ok bytes={}",
            png.len()
        );
        Ok(ExportedImage { file_name, png })
    }

    fn record_snapshot(&mut self, reason: &'static str) -> CanvasResult<()> {
        let snapshot = self.surface.snapshot()?;
        self.history.record(snapshot);
        debug!(
            "event=canvas_snapshot module=canvas status=ok reason={} pointer={} len={}",
            reason,
            self.history.pointer(),
            self.history.len()
        );
        Ok(())
    }
}
