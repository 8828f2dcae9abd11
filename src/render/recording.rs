use crate::render::{Bitmap, Color, FontSize, Rect, Surface};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: Rect,
        color: Color,
    },
    Text {
        font: FontSize,
        x: u32,
        y: u32,
        color: Color,
        text: String,
    },
    Bitmap {
        name: String,
        x: u32,
        y: u32,
    },
}

/// Headless surface that records what would be drawn.
///
/// Text is measured as a monospace font whose glyphs are half as wide as the
/// tier's pixel size.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget the previous frame.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Every text drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts drawn in `color`, in order.
    pub fn texts_in(&self, color: Color) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, color: c, .. } if *c == color => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn bitmaps(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Bitmap { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn text_size(&self, font: FontSize, text: &str) -> (u32, u32) {
        let px = font.pixels();
        (text.chars().count() as u32 * px / 2, px)
    }

    fn draw_text(&mut self, font: FontSize, x: u32, y: u32, color: Color, text: &str) {
        self.ops.push(DrawOp::Text {
            font,
            x,
            y,
            color,
            text: text.to_string(),
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: u32, y: u32) {
        self.ops.push(DrawOp::Bitmap {
            name: bitmap.name().to_string(),
            x,
            y,
        });
    }
}
