//! Shared test utilities and mock collaborators.

#![allow(dead_code, unused_imports)]

use std::collections::HashMap;
use std::path::PathBuf;

use emufront::browser::{DirectorySource, NameArena, PARENT_ENTRY};
use emufront::config::{AssetPaths, FrontendConfig};
use emufront::render::{FixedClock, RecordingSurface};
use emufront::{Buttons, Frontend, UiResult};
use tempfile::TempDir;

/// In-memory directory tree. Paths not registered as directories are files.
#[derive(Debug, Clone, Default)]
pub struct MockDirectory {
    dirs: HashMap<String, Vec<String>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as a directory containing `entries`.
    pub fn dir(mut self, path: &str, entries: &[&str]) -> Self {
        self.dirs.insert(
            path.to_string(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }
}

impl DirectorySource for MockDirectory {
    fn list(&self, path: &str, arena: &mut NameArena) {
        arena.clear();
        arena.push(PARENT_ENTRY);
        for entry in self.dirs.get(path).into_iter().flatten() {
            if !arena.push(entry) {
                break;
            }
        }
    }

    fn is_directory(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }
}

/// The ROM tree used by most browser tests.
pub fn rom_tree() -> MockDirectory {
    MockDirectory::new()
        .dir("", &["roms"])
        .dir("/roms", &["gba", "readme.txt"])
        .dir("/roms/gba", &["game.gba", "other.gba"])
}

/// Config pointing settings and assets into `dir`.
pub fn test_config(dir: &TempDir, start: &str) -> FrontendConfig {
    FrontendConfig {
        start_directory: start.to_string(),
        settings_path: dir.path().join("settings.ini"),
        assets: AssetPaths {
            remap_image: dir.path().join("gba.png"),
            mascot_image: dir.path().join("karpador.png"),
        },
        ..FrontendConfig::default()
    }
}

pub const NOON: FixedClock = FixedClock {
    hour: 12,
    minute: 34,
};

pub fn make_frontend(dir: &TempDir, source: MockDirectory, start: &str) -> Frontend {
    Frontend::new(&test_config(dir, start), Box::new(source), Box::new(NOON))
}

pub fn surface() -> RecordingSurface {
    RecordingSurface::new(1280, 720)
}

/// Run one frame on a fresh surface.
pub fn press(frontend: &mut Frontend, buttons: Buttons) -> (UiResult, RecordingSurface) {
    let mut surface = surface();
    let result = frontend.frame(&mut surface, buttons);
    (result, surface)
}

/// Press `buttons` `times` times, discarding results.
pub fn press_n(frontend: &mut Frontend, buttons: Buttons, times: usize) {
    for _ in 0..times {
        press(frontend, buttons);
    }
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
