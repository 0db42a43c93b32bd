use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use rand::Rng;

use crate::sink::OutputSink;

/// Per-channel noise amplitude added to each source pixel.
const NOISE_SPAN: i32 = 50;

/// Add uniform per-channel noise of amplitude [`NOISE_SPAN`] to `img`,
/// clamping to the valid range. Alpha is left untouched.
pub fn add_noise<R: Rng + ?Sized>(img: &DynamicImage, rng: &mut R) -> RgbaImage {
    let src = img.to_rgba8();
    let mut out = RgbaImage::new(src.width(), src.height());
    for (x, y, pixel) in src.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        out.put_pixel(
            x,
            y,
            Rgba([
                jitter_channel(r, rng),
                jitter_channel(g, rng),
                jitter_channel(b, rng),
                a,
            ]),
        );
    }
    out
}

fn jitter_channel<R: Rng + ?Sized>(channel: u8, rng: &mut R) -> u8 {
    (channel as i32 + rng.gen_range(-NOISE_SPAN..=NOISE_SPAN)).clamp(0, 255) as u8
}

/// Pick a dimension uniformly within ±50% of `base`.
pub fn jitter_dimension<R: Rng + ?Sized>(base: u32, rng: &mut R) -> u32 {
    let min = base - base / 2;
    let max = base + base / 2;
    rng.gen_range(min..=max)
}

/// Noise-augment every image in `source_dir`, rescale each to a randomly
/// jittered size around `base_size` (independently per axis), and write the
/// result under the source file's name in `sink`. Returns the number of
/// images written.
///
/// An empty or unreadable source directory is an error, as is any entry
/// that does not decode as an image.
pub fn augment_dir<R: Rng + ?Sized>(
    source_dir: &Path,
    sink: &OutputSink,
    base_size: u32,
    rng: &mut R,
) -> Result<usize> {
    let mut entries = fs::read_dir(source_dir)
        .with_context(|| format!("failed to read source directory {}", source_dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    anyhow::ensure!(
        !entries.is_empty(),
        "source directory is empty: {}",
        source_dir.display()
    );
    entries.sort_by_key(|entry| entry.file_name());

    let mut written = 0;
    for entry in entries {
        let path = entry.path();
        let img =
            image::open(&path).with_context(|| format!("failed to open {}", path.display()))?;

        let noisy = add_noise(&img, rng);
        let width = jitter_dimension(base_size, rng);
        let height = jitter_dimension(base_size, rng);
        let resized = imageops::resize(&noisy, width, height, FilterType::CatmullRom);

        let filename = entry.file_name();
        sink.write_png(
            &filename.to_string_lossy(),
            &DynamicImage::ImageRgba8(resized),
        )?;
        written += 1;
    }
    Ok(written)
}
