use std::path::PathBuf;

use clap::Parser;
use imagegen_rs_core::{augment_dir, OutputSink};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Produce noise-augmented, randomly resized copies of a directory of
/// images.
#[derive(Parser)]
struct Args {
    /// Output directory for generated images
    #[arg(short, long, default_value = "./data")]
    output: PathBuf,

    /// Directory containing source images for generation
    #[arg(long = "source-dir")]
    source_dir: PathBuf,

    /// Width and height of the generated images
    #[arg(short, long, default_value_t = 3000)]
    width: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sink = OutputSink::create(args.output)?;
    let written = augment_dir(&args.source_dir, &sink, args.width, &mut rand::thread_rng())?;
    info!(
        "successfully generated {written} images in directory: {}",
        sink.dir().display()
    );

    Ok(())
}
