use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ui::toast::DEFAULT_TOAST_FRAMES;

/// Root configuration of the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Directory the browser opens in. Empty means the filesystem root.
    #[serde(default)]
    pub start_directory: String,
    /// Where setting values are persisted (default: `emufront-settings.ini`).
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// Hours added to local time on the clock (default: 0).
    #[serde(default)]
    pub clock_offset_hours: i32,
    /// Fade budget of a status message; four units fade per frame (default: 500).
    #[serde(default = "default_toast_frames")]
    pub toast_frames: u32,
    /// Draw the mascot bitmap in the corner of list screens.
    #[serde(default)]
    pub show_mascot: bool,
    #[serde(default)]
    pub assets: AssetPaths,
}

/// Locations of the two bitmap assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPaths {
    /// Full-screen placeholder for the button remap screen.
    #[serde(default = "default_remap_image")]
    pub remap_image: PathBuf,
    #[serde(default = "default_mascot_image")]
    pub mascot_image: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            start_directory: String::new(),
            settings_path: default_settings_path(),
            clock_offset_hours: 0,
            toast_frames: default_toast_frames(),
            show_mascot: false,
            assets: AssetPaths::default(),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            remap_image: default_remap_image(),
            mascot_image: default_mascot_image(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("emufront-settings.ini")
}

fn default_toast_frames() -> u32 {
    DEFAULT_TOAST_FRAMES
}

fn default_remap_image() -> PathBuf {
    PathBuf::from("romfs/gba.png")
}

fn default_mascot_image() -> PathBuf {
    PathBuf::from("romfs/karpador.png")
}
