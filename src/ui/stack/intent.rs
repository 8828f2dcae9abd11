use crate::ui::mvi::Intent;
use crate::ui::stack::state::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackIntent {
    /// Make `Screen` the active screen. Dropped when the stack is full.
    Push(Screen),
    /// Return to the previous screen. Ignored on an empty stack.
    Pop,
}

impl Intent for StackIntent {}
