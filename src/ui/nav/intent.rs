use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Move `|delta|` single steps in the direction of `delta`'s sign.
    Advance { delta: i32, item_count: usize },
    /// Place the cursor on `index`, scrolling just enough to show it.
    Jump { index: usize, item_count: usize },
    /// Back to the top of the list.
    Reset,
}

impl Intent for NavIntent {}
