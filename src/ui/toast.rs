use std::fmt;

/// Fade budget given to a fresh message.
pub const DEFAULT_TOAST_FRAMES: u32 = 500;
/// Fade units consumed per frame.
pub const FADE_STEP: u32 = 4;

/// Single transient status message. A new message replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusToast {
    message: String,
    fade: u32,
    budget: u32,
}

impl Default for StatusToast {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_FRAMES)
    }
}

impl StatusToast {
    pub fn new(budget: u32) -> Self {
        Self {
            message: String::new(),
            fade: 0,
            budget,
        }
    }

    pub fn show(&mut self, args: fmt::Arguments<'_>) {
        self.message = args.to_string();
        self.fade = self.budget;
    }

    pub fn is_visible(&self) -> bool {
        self.fade > 0
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Alpha for the current frame, capped at fully opaque.
    pub fn alpha(&self) -> u8 {
        self.fade.min(u8::MAX as u32) as u8
    }

    /// Advance the fade by one frame.
    pub fn tick(&mut self) {
        self.fade = self.fade.saturating_sub(FADE_STEP);
    }
}
