//! Settings menu model.
//!
//! Settings are registered once at startup in display order: every persisted
//! toggle first, then [`SettingsModel::finalize_meta_boundary`], then the
//! action entries. Only the toggles before the boundary are written to and
//! read from the settings file.

mod slot;
mod store;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ui::result::UiResult;

pub use slot::ValueSlot;
pub use store::SECTION;

/// Maximum number of registered settings.
pub const MAX_SETTINGS: usize = 128;
/// Label of the action added by [`SettingsModel::finalize_meta_boundary`].
pub const EXIT_LABEL: &str = "Exit";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot register more than {max} settings")]
    CapacityExceeded { max: usize },

    #[error("Setting '{name}' has no values")]
    NoValues { name: String },

    #[error("Persisted setting '{name}' registered after the meta boundary")]
    ToggleAfterBoundary { name: String },

    #[error("Action '{name}' registered before the meta boundary")]
    ActionBeforeBoundary { name: String },

    #[error("Meta boundary already finalized")]
    AlreadyFinalized,

    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub enum SettingKind {
    /// Cycles through `values`; the index lives in `slot`.
    Toggle { slot: ValueSlot, values: Vec<String> },
    /// Activating the entry hands `action` to the application.
    Action { action: UiResult },
}

/// One menu entry.
#[derive(Debug, Clone)]
pub struct Setting {
    name: String,
    kind: SettingKind,
}

impl Setting {
    fn new(name: String, kind: SettingKind) -> Self {
        Self { name, kind }
    }

    /// Display label and persistence key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &SettingKind {
        &self.kind
    }

    /// `"<name>: <value>"` for toggles, `"<name>"` for actions.
    ///
    /// Built from the slot on every call, so values written by the
    /// application show up without going through the menu.
    pub fn label(&self) -> String {
        match &self.kind {
            SettingKind::Toggle { slot, values } => {
                let value = values
                    .get(wrap_index(slot.get(), values.len()) as usize)
                    .map(String::as_str)
                    .unwrap_or_default();
                format!("{}: {}", self.name, value)
            }
            SettingKind::Action { .. } => self.name.clone(),
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self.kind, SettingKind::Action { .. })
    }

    /// Current value index of a toggle, as stored in its slot.
    pub fn value(&self) -> Option<u32> {
        match &self.kind {
            SettingKind::Toggle { slot, .. } => Some(slot.get()),
            SettingKind::Action { .. } => None,
        }
    }

    fn value_count(&self) -> u32 {
        match &self.kind {
            SettingKind::Toggle { values, .. } => values.len() as u32,
            SettingKind::Action { .. } => 0,
        }
    }

    fn set_value(&self, value: u32) {
        if let SettingKind::Toggle { slot, .. } = &self.kind {
            slot.set(value);
        }
    }

    /// Step the value by one, wrapping in both directions. A slot left out
    /// of range by the application is wrapped into range first.
    fn step(&self, forward: bool) {
        let SettingKind::Toggle { slot, values } = &self.kind else {
            return;
        };
        let count = values.len() as u32;
        let current = wrap_index(slot.get(), values.len());
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        slot.set(next);
    }
}

/// `index` reduced into `0..count`. Toggles always have at least one value.
fn wrap_index(index: u32, count: usize) -> u32 {
    index % count.max(1) as u32
}

/// Ordered settings collection with its persisted/meta partition.
pub struct SettingsModel {
    settings: Vec<Setting>,
    meta_start: Option<usize>,
    dirty: bool,
    path: PathBuf,
}

impl SettingsModel {
    /// Empty model persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            settings: Vec::with_capacity(MAX_SETTINGS),
            meta_start: None,
            dirty: false,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a persisted, cyclable setting.
    ///
    /// A slot holding an out-of-range index is reset to the first value.
    pub fn add_toggle<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        slot: ValueSlot,
        values: impl IntoIterator<Item = S>,
    ) -> Result<(), SettingsError> {
        let name = name.into();
        if self.meta_start.is_some() {
            return Err(SettingsError::ToggleAfterBoundary { name });
        }
        self.check_capacity()?;

        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(SettingsError::NoValues { name });
        }
        if slot.get() as usize >= values.len() {
            tracing::warn!(
                "Setting '{}' starts out of range ({} of {}), resetting",
                name,
                slot.get(),
                values.len()
            );
            slot.set(0);
        }

        self.settings
            .push(Setting::new(name, SettingKind::Toggle { slot, values }));
        Ok(())
    }

    /// Register an action entry. Only valid after the meta boundary.
    pub fn add_action(
        &mut self,
        name: impl Into<String>,
        action: UiResult,
    ) -> Result<(), SettingsError> {
        let name = name.into();
        if self.meta_start.is_none() {
            return Err(SettingsError::ActionBeforeBoundary { name });
        }
        self.push_action(name, action)
    }

    /// Close the persisted partition and add the built-in "Exit" action.
    pub fn finalize_meta_boundary(&mut self) -> Result<(), SettingsError> {
        if self.meta_start.is_some() {
            return Err(SettingsError::AlreadyFinalized);
        }
        self.meta_start = Some(self.settings.len());
        self.push_action(EXIT_LABEL.to_string(), UiResult::Close)
    }

    /// Index of the first action entry, once finalized.
    pub fn meta_start(&self) -> Option<usize> {
        self.meta_start
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Setting> {
        self.settings.get(index)
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.settings.get(index).map(Setting::label)
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.settings.iter().map(Setting::label)
    }

    /// True when a value changed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// `(name, value)` of every persisted setting, in order.
    pub fn persisted_values(&self) -> Vec<(&str, u32)> {
        self.persisted()
            .iter()
            .filter_map(|s| s.value().map(|v| (s.name(), v)))
            .collect()
    }

    /// Activate the entry at `index`.
    ///
    /// Actions return their result. Toggles step forward on confirm and
    /// backward on cancel, mark the model dirty and report
    /// [`UiResult::SettingsChanged`].
    pub fn activate(&mut self, index: usize, cancel: bool) -> UiResult {
        let Some(setting) = self.settings.get(index) else {
            return UiResult::None;
        };
        if let SettingKind::Action { action } = setting.kind {
            return action;
        }

        setting.step(!cancel);
        tracing::debug!("Setting changed: {}", setting.label());
        self.dirty = true;
        UiResult::SettingsChanged
    }

    /// Apply stored values from the settings file.
    ///
    /// Keys are matched against persisted setting names; missing keys and a
    /// missing file keep the registered defaults. Returns how many values
    /// were applied.
    pub fn load_persisted(&mut self) -> Result<usize, SettingsError> {
        let Some(section) = store::read_section(&self.path)? else {
            tracing::debug!("No stored settings at '{}'", self.path.display());
            return Ok(0);
        };

        let end = self.persisted_end();
        let mut applied = 0;
        for setting in &self.settings[..end] {
            let Some(raw) = section
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(&setting.name))
                .map(|(_, value)| value)
            else {
                continue;
            };
            match store::as_index(raw) {
                Some(value) if value < setting.value_count() => {
                    setting.set_value(value);
                    applied += 1;
                }
                _ => tracing::warn!(
                    "Ignoring stored value {} for setting '{}'",
                    raw,
                    setting.name
                ),
            }
        }

        tracing::info!(
            "Loaded {} settings from '{}'",
            applied,
            self.path.display()
        );
        Ok(applied)
    }

    /// Write the persisted values if anything changed. Returns whether the
    /// file was written.
    pub fn save_persisted(&mut self) -> Result<bool, SettingsError> {
        if !self.dirty {
            return Ok(false);
        }
        store::write_section(&self.path, &self.persisted_values())?;
        self.dirty = false;
        tracing::info!("Saved settings to '{}'", self.path.display());
        Ok(true)
    }

    fn persisted_end(&self) -> usize {
        self.meta_start.unwrap_or(0)
    }

    fn persisted(&self) -> &[Setting] {
        &self.settings[..self.persisted_end()]
    }

    fn check_capacity(&self) -> Result<(), SettingsError> {
        if self.settings.len() >= MAX_SETTINGS {
            return Err(SettingsError::CapacityExceeded { max: MAX_SETTINGS });
        }
        Ok(())
    }

    fn push_action(&mut self, name: String, action: UiResult) -> Result<(), SettingsError> {
        self.check_capacity()?;
        self.settings
            .push(Setting::new(name, SettingKind::Action { action }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> (SettingsModel, ValueSlot) {
        let mut model = SettingsModel::new("unused.ini");
        let scale = ValueSlot::new(0);
        model
            .add_toggle("Scale", scale.clone(), ["1x", "2x", "3x"])
            .unwrap();
        model.finalize_meta_boundary().unwrap();
        (model, scale)
    }

    #[test]
    fn labels_are_generated() {
        let (model, _) = model();
        assert_eq!(model.labels().collect::<Vec<_>>(), vec!["Scale: 1x", "Exit"]);
    }

    #[test]
    fn cancel_wraps_backwards() {
        let (mut model, scale) = model();
        assert_eq!(model.activate(0, true), UiResult::SettingsChanged);
        assert_eq!(scale.get(), 2);
        assert_eq!(model.label(0).as_deref(), Some("Scale: 3x"));
        assert!(model.is_dirty());
    }

    #[test]
    fn exit_action_closes() {
        let (mut model, _) = model();
        assert_eq!(model.activate(1, false), UiResult::Close);
        assert!(!model.is_dirty());
    }

    #[test]
    fn out_of_range_index_does_nothing() {
        let (mut model, _) = model();
        assert_eq!(model.activate(9, false), UiResult::None);
    }

    #[test]
    fn label_follows_slot_written_elsewhere() {
        let (model, scale) = model();
        scale.set(1);
        assert_eq!(model.label(0).as_deref(), Some("Scale: 2x"));
    }

    #[test]
    fn out_of_range_slot_wraps_before_stepping() {
        let (mut model, scale) = model();
        scale.set(5);
        assert_eq!(model.label(0).as_deref(), Some("Scale: 3x"));

        assert_eq!(model.activate(0, true), UiResult::SettingsChanged);
        assert_eq!(scale.get(), 1);
        assert_eq!(model.label(0).as_deref(), Some("Scale: 2x"));

        scale.set(5);
        model.activate(0, false);
        assert_eq!(scale.get(), 0);
    }

    #[test]
    fn out_of_range_slot_is_reset() {
        let mut model = SettingsModel::new("unused.ini");
        let slot = ValueSlot::new(7);
        model.add_toggle("VSync", slot.clone(), ["Off", "On"]).unwrap();
        assert_eq!(slot.get(), 0);
        assert_eq!(model.label(0).as_deref(), Some("VSync: Off"));
    }
}
