//! Core crate for imagegen_rs.
//!
//! Loads a pretrained diffusion model once and runs it repeatedly over a
//! single prompt, writing each image to a flat output directory under a
//! random collision-resistant filename and logging per-image generation time.
//!
//! ```rust,no_run
//! use imagegen_rs_core::{
//!     run_batch, BatchConfig, DiffusionEngine, ModelDType, SamplingParams,
//! };
//!
//! let mut engine = DiffusionEngine::load(
//!     "runwayml/stable-diffusion-v1-5",
//!     &ModelDType::F16,
//!     None,
//! )?;
//!
//! let config = BatchConfig {
//!     output_dir: "generated_images".into(),
//!     num_images: 5,
//!     prompt: "A cyberpunk city at night, neon lights".to_string(),
//!     params: SamplingParams::default(),
//! };
//!
//! run_batch(&mut engine, &config, &mut rand::thread_rng())?;
//!
//! # Ok::<(), anyhow::Error>(())
//! ```

mod batch;
mod engine;
mod filename;
mod noise;
mod sink;

pub use batch::{run_batch, BatchConfig};
pub use diffusion_rs_core::{ModelDType, Offloading};
pub use engine::{DiffusionEngine, SamplingParams, TextToImage};
pub use filename::random_png_name;
pub use noise::{add_noise, augment_dir, jitter_dimension};
pub use sink::OutputSink;
