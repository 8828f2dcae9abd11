use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Handle to a value index owned by the embedding application.
///
/// The application keeps one clone and reads it whenever it reacts to
/// `UiResult::SettingsChanged`; the settings model keeps another and is the
/// only writer while the menu is open.
#[derive(Debug, Clone, Default)]
pub struct ValueSlot(Arc<AtomicU32>);

impl ValueSlot {
    pub fn new(initial: u32) -> Self {
        Self(Arc::new(AtomicU32::new(initial)))
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, value: u32) {
        self.0.store(value, Ordering::Relaxed);
    }
}
