use chrono::{Local, Timelike};

/// Wall-clock source for the `HH:MM` display.
pub trait Clock {
    /// Current local hour and minute.
    fn hour_minute(&self) -> (u32, u32);
}

/// Local time shifted by a fixed number of hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset_hours: i32,
}

impl SystemClock {
    pub fn new(offset_hours: i32) -> Self {
        Self { offset_hours }
    }
}

impl Clock for SystemClock {
    fn hour_minute(&self) -> (u32, u32) {
        let now = Local::now();
        let hour = (now.hour() as i32 + self.offset_hours).rem_euclid(24) as u32;
        (hour, now.minute())
    }
}

/// Clock frozen at one time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub hour: u32,
    pub minute: u32,
}

impl Clock for FixedClock {
    fn hour_minute(&self) -> (u32, u32) {
        (self.hour, self.minute)
    }
}

pub(crate) fn format_clock(clock: &dyn Clock) -> String {
    let (hour, minute) = clock.hour_minute();
    format!("{:02}:{:02}", hour, minute)
}
