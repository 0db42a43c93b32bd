use std::path::PathBuf;

use clap::Parser;
use imagegen_rs_core::{
    run_batch, BatchConfig, DiffusionEngine, ModelDType, Offloading, SamplingParams,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_PROMPT: &str = "一幅赛博朋克风格的城市夜景，霓虹灯，未来感";

/// Generate a batch of images from a text prompt with a pretrained
/// diffusion model.
#[derive(Parser)]
struct Args {
    /// Output directory for images
    #[arg(long = "output_dir", default_value = "generated_images")]
    output_dir: PathBuf,

    /// Number of images to generate
    #[arg(long = "num_images", default_value_t = 5)]
    num_images: i64,

    /// Prompt for image generation
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Model to load (local path or Hugging Face model ID)
    #[arg(long = "model_id", default_value = "runwayml/stable-diffusion-v1-5")]
    model_id: String,

    /// DType for the model
    #[arg(long, default_value = "f16")]
    dtype: ModelDType,

    /// Offloading setting to use for this model
    #[arg(short, long)]
    offloading: Option<Offloading>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut engine = DiffusionEngine::load(&args.model_id, &args.dtype, args.offloading)?;

    let config = BatchConfig {
        output_dir: args.output_dir,
        num_images: args.num_images,
        prompt: args.prompt,
        params: SamplingParams::default(),
    };
    run_batch(&mut engine, &config, &mut rand::thread_rng())?;

    Ok(())
}
