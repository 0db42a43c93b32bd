use anyhow::Result;
use diffusion_rs_core::{
    DiffusionGenerationParams, ModelDType, ModelSource, Offloading, Pipeline, TokenSource,
};
use image::DynamicImage;

/// Sampling parameters passed through to the underlying model. They tune
/// quality versus speed and are otherwise opaque to this crate.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    pub height: usize,
    pub width: usize,
    pub num_steps: usize,
    pub guidance_scale: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            height: 512,
            width: 512,
            num_steps: 50,
            guidance_scale: 7.5,
        }
    }
}

/// A text-to-image model. The generation loop only needs this surface, so
/// tests can substitute a stub for [`DiffusionEngine`].
pub trait TextToImage {
    fn generate(&mut self, prompt: &str, params: SamplingParams) -> Result<DynamicImage>;
}

/// A diffusion pipeline loaded once and reused for every image in a batch.
pub struct DiffusionEngine {
    pipeline: Pipeline,
}

impl DiffusionEngine {
    /// Load the model from a local path or Hugging Face model ID.
    ///
    /// Uses the Hugging Face token at `~/.cache/huggingface/token` for gated
    /// repositories.
    pub fn load(
        model_id: &str,
        dtype: &ModelDType,
        offloading: Option<Offloading>,
    ) -> Result<Self> {
        let pipeline = Pipeline::load(
            ModelSource::from_model_id(model_id),
            false,
            TokenSource::CacheToken,
            None,
            offloading,
            dtype,
        )?;
        Ok(Self { pipeline })
    }
}

impl TextToImage for DiffusionEngine {
    fn generate(&mut self, prompt: &str, params: SamplingParams) -> Result<DynamicImage> {
        let mut images = self.pipeline.forward(
            vec![prompt.to_string()],
            DiffusionGenerationParams {
                height: params.height,
                width: params.width,
                num_steps: params.num_steps,
                guidance_scale: params.guidance_scale,
            },
        )?;
        if images.is_empty() {
            anyhow::bail!("pipeline returned no images for prompt");
        }
        Ok(images.remove(0))
    }
}
