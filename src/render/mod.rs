//! Drawing contract consumed by the front-end.
//!
//! The front-end never touches pixels itself: it describes each frame through
//! a [`Surface`], which the host implements on top of its framebuffer and
//! font rasterizer.

mod bitmap;
mod clock;
mod recording;

pub use bitmap::{AssetError, Bitmap};
pub use clock::{Clock, FixedClock, SystemClock};
pub(crate) use clock::format_clock;
pub use recording::{DrawOp, RecordingSurface};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Pixel rectangle. May extend past the surface; implementations clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The three font tiers available to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// Nominal pixel size of the tier.
    pub fn pixels(&self) -> u32 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 24,
        }
    }
}

/// In-memory framebuffer plus text primitives.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Width and height `text` would occupy in `font`.
    fn text_size(&self, font: FontSize, text: &str) -> (u32, u32);
    fn draw_text(&mut self, font: FontSize, x: u32, y: u32, color: Color, text: &str);
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: u32, y: u32);
}
