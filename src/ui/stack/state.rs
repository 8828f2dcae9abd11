use crate::ui::mvi::UiState;

/// Maximum number of screens on the stack.
pub const MAX_DEPTH: usize = 4;

/// A view the front-end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    FileSelect,
    Settings,
    Paused,
    RemapButtons,
    /// The emulator owns the screen; only the status toast is drawn.
    Running,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FileSelect => "File Select",
            Self::Settings => "Settings",
            Self::Paused => "Paused",
            Self::RemapButtons => "Remap Buttons",
            Self::Running => "Running",
        }
    }

    /// Screens that show a navigable list.
    pub fn has_list(&self) -> bool {
        matches!(self, Self::FileSelect | Self::Settings | Self::Paused)
    }
}

/// Bounded stack of screens; the top is the active one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenStack {
    screens: Vec<Screen>,
}

impl UiState for ScreenStack {}

impl ScreenStack {
    pub fn current(&self) -> Option<Screen> {
        self.screens.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn is_full(&self) -> bool {
        self.screens.len() >= MAX_DEPTH
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub(super) fn with_pushed(mut self, screen: Screen) -> Self {
        self.screens.push(screen);
        self
    }

    pub(super) fn with_popped(mut self) -> Self {
        self.screens.pop();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let stack = ScreenStack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn list_screens() {
        assert!(Screen::FileSelect.has_list());
        assert!(Screen::Paused.has_list());
        assert!(!Screen::Running.has_list());
        assert!(!Screen::RemapButtons.has_list());
    }
}
