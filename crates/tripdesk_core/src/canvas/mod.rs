//! Freehand drawing canvas.
//!
//! # Responsibility
//! - Rasterize pointer strokes onto a fixed-size RGBA surface.
//! - Keep a linear undo history of full-frame PNG snapshots.
//! - Hand snapshots to the gallery and produce PNG exports.
//!
//! # Invariants
//! - History entry 0 is the blank surface captured at session start.
//! - A new snapshot discards every entry after the history pointer.
//! - Surface dimensions never change after the session is created.

use crate::service::CommandError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod brush;
pub mod history;
pub mod session;
pub mod surface;

pub use brush::{Brush, BrushColor, Tool};
pub use history::SnapshotHistory;
pub use session::{CanvasSession, ExportedImage, PointerEvent};
pub use surface::{Point, Surface};

const MAX_SURFACE_EDGE: u32 = 8192;

pub type CanvasResult<T> = Result<T, CanvasError>;

/// Surface geometry and history capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Maximum history entries kept; `None` keeps every snapshot.
    pub history_limit: Option<usize>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            history_limit: None,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            history_limit: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.width > MAX_SURFACE_EDGE || self.height > MAX_SURFACE_EDGE {
            return Err(format!(
                "canvas edge must not exceed {MAX_SURFACE_EDGE}px, got {}x{}",
                self.width, self.height
            ));
        }
        if self.history_limit == Some(0) {
            return Err("history_limit must keep at least one snapshot".to_string());
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum CanvasError {
    InvalidConfig(String),
    InvalidBrush(String),
    /// Snapshot is not a PNG data URL or its payload is not valid base64.
    InvalidSnapshot(String),
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    Image(image::ImageError),
    Io(std::io::Error),
    Command(CommandError),
}

impl Display for CanvasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(message) => write!(f, "invalid canvas config: {message}"),
            Self::InvalidBrush(message) => write!(f, "invalid brush: {message}"),
            Self::InvalidSnapshot(message) => write!(f, "invalid snapshot: {message}"),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "snapshot is {}x{}, surface is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::Image(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Image(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Command(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for CanvasError {
    fn from(value: image::ImageError) -> Self {
        Self::Image(value)
    }
}

impl From<std::io::Error> for CanvasError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CommandError> for CanvasError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}
