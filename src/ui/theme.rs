use crate::render::Color;

pub const BACKGROUND: Color = Color::rgb(50, 50, 50);
pub const TEXT: Color = Color::rgb(255, 255, 255);
pub const HIGHLIGHT_BAR: Color = Color::rgb(33, 34, 39);
pub const HIGHLIGHT_TEXT: Color = Color::rgb(0, 255, 197);
pub const SEPARATOR: Color = Color::rgb(255, 255, 255);
