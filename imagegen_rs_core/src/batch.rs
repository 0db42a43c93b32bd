use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::engine::{SamplingParams, TextToImage};
use crate::filename::random_png_name;
use crate::sink::OutputSink;

/// One batch run: where to write, how many images, and the prompt.
///
/// Built once at startup and never mutated. `num_images` is signed on
/// purpose: zero and negative counts are accepted and yield zero iterations.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub num_images: i64,
    pub prompt: String,
    pub params: SamplingParams,
}

/// Generate `num_images` images sequentially, writing each under a fresh
/// random filename. Returns the number of images written.
///
/// Any engine or filesystem error aborts the batch. Images already written
/// are kept; there is no cleanup and no partial-results manifest.
pub fn run_batch<R: Rng + ?Sized>(
    engine: &mut dyn TextToImage,
    config: &BatchConfig,
    rng: &mut R,
) -> Result<usize> {
    let sink = OutputSink::create(&config.output_dir)?;
    info!(
        "generating {} images into {} (prompt: {})",
        config.num_images,
        sink.dir().display(),
        config.prompt
    );

    let mut written = 0;
    for i in 0..config.num_images {
        let start = Instant::now();

        let image = engine.generate(&config.prompt, config.params)?;
        let filename = random_png_name(rng);
        sink.write_png(&filename, &image)?;

        let elapsed = start.elapsed().as_secs_f32();
        info!("image {}: {filename} ({elapsed:.2}s)", i + 1);
        written += 1;
    }
    Ok(written)
}
