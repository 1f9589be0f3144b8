//! Brush state: tool, width, and color.

use super::{CanvasError, CanvasResult};
use image::Rgba;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{6})$").expect("valid hex color regex"));

/// Allowed brush widths in pixels.
pub const BRUSH_WIDTH_RANGE: RangeInclusive<u32> = 1..=20;
pub const DEFAULT_BRUSH_WIDTH: u32 = 3;

/// Preset palette offered by the toolbar.
pub const PALETTE: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#6B7280", "#000000",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    /// Paints the brush color over existing pixels.
    #[default]
    Pen,
    /// Clears covered pixels back to transparent.
    Eraser,
}

/// Opaque RGB brush color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrushColor {
    /// Parses `#RRGGBB` (case-insensitive).
    pub fn parse(value: &str) -> CanvasResult<Self> {
        let trimmed = value.trim();
        let hex = HEX_COLOR_RE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| CanvasError::InvalidBrush(format!("color `{trimmed}` is not #RRGGBB")))?;
        let channel = |start: usize| u8::from_str_radix(&hex[start..start + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(CanvasError::InvalidBrush(format!(
                "color `{trimmed}` is not #RRGGBB"
            ))),
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, u8::MAX])
    }
}

impl Default for BrushColor {
    fn default() -> Self {
        Self {
            r: 0x3B,
            g: 0x82,
            b: 0xF6,
        }
    }
}

impl Display for BrushColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    pub tool: Tool,
    width: u32,
    pub color: BrushColor,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            width: DEFAULT_BRUSH_WIDTH,
            color: BrushColor::default(),
        }
    }
}

impl Brush {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) -> CanvasResult<()> {
        if !BRUSH_WIDTH_RANGE.contains(&width) {
            return Err(CanvasError::InvalidBrush(format!(
                "width {width} outside {}..={}",
                BRUSH_WIDTH_RANGE.start(),
                BRUSH_WIDTH_RANGE.end()
            )));
        }
        self.width = width;
        Ok(())
    }

    /// Half the stroke width.
    pub fn radius(&self) -> f32 {
        self.width as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Brush, BrushColor, PALETTE};

    #[test]
    fn palette_colors_parse_and_format_back() {
        for hex in PALETTE {
            assert_eq!(BrushColor::parse(hex).unwrap().to_string(), hex);
        }
        assert_eq!(BrushColor::parse("#ff0000").unwrap().r, 255);
        assert!(BrushColor::parse("red").is_err());
        assert!(BrushColor::parse("#12345").is_err());
    }

    #[test]
    fn width_is_bounded() {
        let mut brush = Brush::default();
        assert_eq!(brush.width(), 3);
        brush.set_width(20).unwrap();
        assert!(brush.set_width(0).is_err());
        assert!(brush.set_width(21).is_err());
        assert_eq!(brush.width(), 20);
    }
}
