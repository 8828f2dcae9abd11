//! Settings file: an INI `[Misc]` section of `name=index` lines.
//!
//! Reading is line based and forgiving: blank lines, `;`/`#` comments, other
//! sections and lines without `=` are skipped, so one bad line never costs
//! the values around it.

use std::fs;
use std::path::Path;

use crate::settings::SettingsError;

/// Section the persisted values live in. Matched case-insensitively on load.
pub const SECTION: &str = "Misc";

/// Read the settings section as `(key, value)` pairs in file order. A
/// missing file, or a file without the section, yields `None`.
pub(crate) fn read_section(path: &Path) -> Result<Option<Vec<(String, String)>>, SettingsError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_section(&content))
}

fn parse_section(content: &str) -> Option<Vec<(String, String)>> {
    let mut found = false;
    let mut in_section = false;
    let mut entries = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = name.trim().eq_ignore_ascii_case(SECTION);
            found |= in_section;
            continue;
        }
        if !in_section {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => entries.push((key.trim().to_string(), value.trim().to_string())),
            None => tracing::debug!("Skipping settings line '{}'", line),
        }
    }

    found.then_some(entries)
}

/// Write `entries` in order as `name=index` lines, replacing the file.
pub(crate) fn write_section(path: &Path, entries: &[(&str, u32)]) -> Result<(), SettingsError> {
    let mut content = format!("[{}]\n", SECTION);
    for (name, value) in entries {
        content.push_str(&format!("{}={}\n", name, value));
    }

    let write_err = |e| SettingsError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}

/// Stored text as a value index, if it is one.
pub(crate) fn as_index(value: &str) -> Option<u32> {
    value.parse().ok()
}
