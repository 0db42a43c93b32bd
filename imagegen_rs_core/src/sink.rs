use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;

/// Flat directory that generated images are written into. No manifest or
/// metadata sidecars, just independently named `*.png` files.
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    /// Create the directory (and any missing parents) if absent. A no-op if
    /// it already exists.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `image` as a PNG at `<dir>/<filename>` with maximum lossless
    /// compression.
    pub fn write_png(&self, filename: &str, image: &DynamicImage) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        let encoder = PngEncoder::new_with_quality(
            BufWriter::new(file),
            CompressionType::Best,
            FilterType::Adaptive,
        );
        image
            .write_with_encoder(encoder)
            .with_context(|| format!("failed to encode {}", path.display()))?;
        Ok(path)
    }
}
