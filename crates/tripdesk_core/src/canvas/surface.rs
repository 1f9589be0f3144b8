//! RGBA raster surface and its PNG snapshot encoding.

use super::brush::{Brush, Tool};
use super::{CanvasError, CanvasResult};
use crate::model::drawing::{CanvasSnapshot, PNG_DATA_URL_PREFIX};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Pointer position in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fixed-size drawing bitmap. Blank pixels are fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.pixels().all(|pixel| pixel[3] == 0)
    }

    pub fn clear(&mut self) {
        self.pixels.pixels_mut().for_each(|pixel| *pixel = TRANSPARENT);
    }

    /// Strokes `from -> to` with round caps. Pen paints opaque color; eraser
    /// clears to transparent.
    pub fn stroke_segment(&mut self, from: Point, to: Point, brush: &Brush) {
        let ink = match brush.tool {
            Tool::Pen => brush.color.to_rgba(),
            Tool::Eraser => TRANSPARENT,
        };
        let radius = brush.radius();
        let radius_sq = radius * radius;

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.height() as f32 - 1.0);
        if max_x < min_x || max_y < min_y {
            return;
        }

        for y in (min_y as u32)..=(max_y as u32) {
            for x in (min_x as u32)..=(max_x as u32) {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq_to_segment(center, from, to) <= radius_sq {
                    self.pixels.put_pixel(x, y, ink);
                }
            }
        }
    }

    /// PNG bytes of the current bitmap.
    pub fn encode_png(&self) -> CanvasResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Captures the bitmap as a PNG data URL.
    pub fn snapshot(&self) -> CanvasResult<CanvasSnapshot> {
        let png = self.encode_png()?;
        Ok(CanvasSnapshot::from_data_url(format!(
            "{PNG_DATA_URL_PREFIX}{}",
            B64.encode(png)
        )))
    }

    /// Replaces the bitmap with a snapshot of identical dimensions.
    pub fn restore(&mut self, snapshot: &CanvasSnapshot) -> CanvasResult<()> {
        let decoded = decode_snapshot(snapshot)?;
        let actual = decoded.dimensions();
        let expected = self.pixels.dimensions();
        if actual != expected {
            return Err(CanvasError::DimensionMismatch { expected, actual });
        }
        self.pixels = decoded;
        Ok(())
    }
}

/// Decodes a PNG data URL into RGBA pixels.
pub fn decode_snapshot(snapshot: &CanvasSnapshot) -> CanvasResult<RgbaImage> {
    let payload = snapshot.png_base64().ok_or_else(|| {
        CanvasError::InvalidSnapshot("missing `data:image/png;base64,` prefix".to_string())
    })?;
    let png = B64
        .decode(payload)
        .map_err(|err| CanvasError::InvalidSnapshot(err.to_string()))?;
    let image = image::load_from_memory_with_format(&png, ImageFormat::Png)?;
    Ok(image.to_rgba8())
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    (p.x - cx).powi(2) + (p.y - cy).powi(2)
}

#[cfg(test)]
mod tests {
    use super::{Point, Surface};
    use crate::canvas::brush::{Brush, BrushColor, Tool};
    use crate::model::drawing::CanvasSnapshot;

    #[test]
    fn pen_paints_and_eraser_clears() {
        let mut surface = Surface::blank(20, 20);
        let mut brush = Brush::default();
        brush.color = BrushColor::parse("#EF4444").unwrap();
        surface.stroke_segment(Point::new(2.0, 10.0), Point::new(18.0, 10.0), &brush);

        let painted = surface.pixel(10, 10).unwrap();
        assert_eq!(painted.0, [0xEF, 0x44, 0x44, 0xFF]);
        assert_eq!(surface.pixel(10, 2).unwrap().0[3], 0);

        brush.tool = Tool::Eraser;
        brush.set_width(6).unwrap();
        surface.stroke_segment(Point::new(0.0, 10.0), Point::new(20.0, 10.0), &brush);
        assert!(surface.is_blank());
    }

    #[test]
    fn strokes_outside_surface_are_clipped() {
        let mut surface = Surface::blank(4, 4);
        surface.stroke_segment(
            Point::new(-50.0, -50.0),
            Point::new(-40.0, -40.0),
            &Brush::default(),
        );
        assert!(surface.is_blank());
        surface.stroke_segment(
            Point::new(-10.0, 2.0),
            Point::new(10.0, 2.0),
            &Brush::default(),
        );
        assert!(!surface.is_blank());
    }

    #[test]
    fn snapshot_restores_same_pixels() {
        let mut surface = Surface::blank(8, 8);
        surface.stroke_segment(Point::new(1.0, 1.0), Point::new(6.0, 6.0), &Brush::default());
        let snapshot = surface.snapshot().unwrap();
        assert!(snapshot.as_data_url().starts_with("data:image/png;base64,"));

        let mut restored = Surface::blank(8, 8);
        restored.restore(&snapshot).unwrap();
        assert_eq!(restored, surface);
    }

    #[test]
    fn restore_rejects_foreign_snapshots() {
        let snapshot = Surface::blank(3, 3).snapshot().unwrap();
        let mut surface = Surface::blank(4, 4);
        assert!(surface.restore(&snapshot).is_err());
        assert!(surface
            .restore(&CanvasSnapshot::from_data_url("data:text/plain,hi"))
            .is_err());
    }
}
