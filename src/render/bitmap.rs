use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to load image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded RGBA image. Pixel memory is released when dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    name: String,
    image: RgbaImage,
}

impl Bitmap {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path)
            .map_err(|e| AssetError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?
            .to_rgba8();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, image })
    }

    pub fn from_rgba(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Row-major RGBA8 pixels.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }
}
