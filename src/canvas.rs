//! Drawing surface the page composers emit into.
//!
//! Coordinates are millimetres, origin top-left, Y increasing downward. The
//! backend performs no layout of its own.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PlannerError, Result};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::gray(0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

pub trait Canvas {
    fn set_font_size(&mut self, size: f32);
    fn set_font_weight(&mut self, weight: FontWeight);
    fn set_text_color(&mut self, color: Rgb);
    /// Draw `text` with its baseline starting at (x, y).
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
    fn set_stroke_color(&mut self, color: Rgb);
    fn set_stroke_width(&mut self, width: f32);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Filled dot in the current stroke colour.
    fn draw_filled_circle(&mut self, x: f32, y: f32, radius: f32);
    fn start_new_page(&mut self);
    fn export(self, path: &Path) -> Result<()>
    where
        Self: Sized;
}

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FontSize { size: f32 },
    FontWeight { weight: FontWeight },
    TextColor { color: Rgb },
    Text { text: String, x: f32, y: f32 },
    StrokeColor { color: Rgb },
    StrokeWidth { width: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Circle { x: f32, y: f32, radius: f32 },
    NewPage,
}

/// Canvas that records every primitive instead of painting it.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded operations split at page breaks.
    pub fn pages(&self) -> Vec<&[DrawOp]> {
        if self.ops.is_empty() {
            return Vec::new();
        }
        self.ops
            .split(|op| matches!(op, DrawOp::NewPage))
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.pages().len()
    }

    /// Text strings drawn on one page, in emission order.
    pub fn texts(page: &[DrawOp]) -> Vec<&str> {
        page.iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn set_font_size(&mut self, size: f32) {
        self.ops.push(DrawOp::FontSize { size });
    }

    fn set_font_weight(&mut self, weight: FontWeight) {
        self.ops.push(DrawOp::FontWeight { weight });
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::TextColor { color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::StrokeColor { color });
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.ops.push(DrawOp::StrokeWidth { width });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    fn draw_filled_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ops.push(DrawOp::Circle { x, y, radius });
    }

    fn start_new_page(&mut self) {
        self.ops.push(DrawOp::NewPage);
    }

    /// Writes the recorded operations as JSON.
    fn export(self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.ops)
            .map_err(|e| PlannerError::Io(e.into()))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_split_on_new_page() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.page_count(), 0);

        canvas.draw_text("one", 1.0, 2.0);
        canvas.start_new_page();
        canvas.draw_line(0.0, 0.0, 5.0, 0.0);
        canvas.start_new_page();
        canvas.draw_text("three", 1.0, 2.0);

        let pages = canvas.pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(RecordingCanvas::texts(pages[0]), vec!["one"]);
        assert!(RecordingCanvas::texts(pages[1]).is_empty());
        assert_eq!(RecordingCanvas::texts(pages[2]), vec!["three"]);
    }

    #[test]
    fn test_ops_serialize_with_tag() {
        let op = DrawOp::StrokeColor {
            color: Rgb::gray(200),
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"stroke_color","color":{"r":200,"g":200,"b":200}}"#);
    }
}
