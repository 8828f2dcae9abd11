use std::ops::Range;

use crate::ui::mvi::UiState;

/// Number of rows in the navigator window.
pub const WINDOW_ROWS: usize = 60;

/// Cursor and scroll position shared by whichever list is active.
///
/// Invariants: `cursor < item_count` (or both zero for an empty list) and
/// `scroll <= cursor < scroll + WINDOW_ROWS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub cursor: usize,
    pub scroll: usize,
}

impl UiState for NavState {}

impl NavState {
    /// Indices of the items inside the window.
    pub fn visible_range(&self, item_count: usize) -> Range<usize> {
        let start = self.scroll.min(item_count);
        let end = (self.scroll + WINDOW_ROWS).min(item_count);
        start..end
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        index == self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_top() {
        assert_eq!(NavState::default(), NavState { cursor: 0, scroll: 0 });
    }

    #[test]
    fn visible_range_clamps_to_items() {
        let state = NavState { cursor: 3, scroll: 2 };
        assert_eq!(state.visible_range(5), 2..5);
        assert_eq!(state.visible_range(100), 2..62);
        assert_eq!(NavState::default().visible_range(0), 0..0);
    }
}
