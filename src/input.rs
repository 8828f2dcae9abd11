//! Per-frame button snapshot.

use bitflags::bitflags;

bitflags! {
    /// Buttons newly pressed during one frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u32 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// Confirm.
        const A = 1 << 4;
        /// Cancel / back.
        const B = 1 << 5;
        /// Quit the application.
        const X = 1 << 6;
    }
}

/// Rows moved by a left/right press.
pub const FAST_SCROLL: i32 = 5;

impl Buttons {
    /// Navigation delta for this snapshot.
    ///
    /// Down is +1, up −1, left −5 and right +5. When several directions are
    /// held together the later one in that order wins.
    pub fn nav_delta(self) -> i32 {
        let mut delta = 0;
        if self.contains(Self::DOWN) {
            delta = 1;
        }
        if self.contains(Self::UP) {
            delta = -1;
        }
        if self.contains(Self::LEFT) {
            delta = -FAST_SCROLL;
        }
        if self.contains(Self::RIGHT) {
            delta = FAST_SCROLL;
        }
        delta
    }

    pub fn confirm(self) -> bool {
        self.contains(Self::A)
    }

    pub fn cancel(self) -> bool {
        self.contains(Self::B)
    }

    pub fn quit(self) -> bool {
        self.contains(Self::X)
    }
}
