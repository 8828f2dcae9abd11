//! Pixel geometry of the list screens.

use crate::render::Rect;

/// Height of one list row.
pub const ROW_HEIGHT: u32 = 40;
/// Y of the first list row.
pub const LIST_TOP: u32 = 80;
/// X of list, footer and toast text.
pub const TEXT_LEFT: u32 = 60;
/// Rows whose text would start below `height - LIST_BOTTOM_MARGIN` are not drawn.
pub const LIST_BOTTOM_MARGIN: u32 = 85;
/// Height of the footer area under the separator line.
pub const FOOTER_HEIGHT: u32 = 70;
pub const SEPARATOR_WIDTH: u32 = 1215;

/// Top of row `row` (0 = first visible row).
pub fn row_top(row: u32) -> u32 {
    LIST_TOP + row * ROW_HEIGHT
}

/// Y for text of `text_height` centred in row `row`, or `None` when the row
/// falls below the list area.
pub fn row_text_y(row: u32, text_height: u32, surface_height: u32) -> Option<u32> {
    let y = row_top(row) + ROW_HEIGHT.saturating_sub(text_height) / 2;
    (y <= surface_height.saturating_sub(LIST_BOTTOM_MARGIN)).then_some(y)
}

/// Bar behind the highlighted row, covering 80% of the width.
pub fn highlight_rect(row: u32, surface_width: u32) -> Rect {
    Rect::new(0, row_top(row), surface_width * 4 / 5, ROW_HEIGHT)
}

/// One-pixel line separating the list from the footer.
pub fn separator_rect(surface_width: u32, surface_height: u32) -> Rect {
    Rect::new(
        surface_width.saturating_sub(SEPARATOR_WIDTH) / 2,
        surface_height.saturating_sub(FOOTER_HEIGHT),
        SEPARATOR_WIDTH.min(surface_width),
        1,
    )
}

pub fn clock_position(surface_width: u32) -> (u32, u32) {
    (surface_width.saturating_sub(130), 45)
}

pub fn footer_text_y(surface_height: u32) -> u32 {
    surface_height.saturating_sub(42)
}

pub fn toast_y(surface_height: u32) -> u32 {
    surface_height.saturating_sub(20)
}

/// Top-left of the mascot bitmap, 60px in from the bottom-right corner.
pub fn mascot_position(surface_width: u32, surface_height: u32) -> (u32, u32) {
    (surface_width.saturating_sub(60), surface_height.saturating_sub(60))
}
