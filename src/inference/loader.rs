use super::{
    caption::{ImageCaptioner, PlaceholderCaptioner},
    sentiment::{DistilBertClassifier, SentimentClassifier},
};
use crate::{Result, config::ModelsConfig};
use candle_core::Device;
use std::sync::Arc;
use tracing::info;

/// The inference pipelines shared by every request. Immutable once loaded.
#[derive(Clone)]
pub struct Pipelines {
    pub sentiment: Arc<dyn SentimentClassifier>,
    pub captioner: Arc<dyn ImageCaptioner>,
}

impl Pipelines {
    pub fn new(
        sentiment: Arc<dyn SentimentClassifier>,
        captioner: Arc<dyn ImageCaptioner>,
    ) -> Self {
        Self {
            sentiment,
            captioner,
        }
    }

    /// Loads both pipelines. Blocks until the weights are in memory; any
    /// failure is returned and the service must not start.
    pub fn load(config: &ModelsConfig) -> Result<Self> {
        info!("Loading models... this may take a moment.");

        let device = select_device(config.sentiment.use_gpu)?;
        info!("Sentiment model device: {:?}", device);

        let sentiment = DistilBertClassifier::load(&config.sentiment, &device)?;

        info!(
            "Image captioner {} running in placeholder mode",
            config.caption.model_id
        );
        let captioner = PlaceholderCaptioner::new(config.caption.placeholder.clone());

        info!("Models loaded.");

        Ok(Self::new(Arc::new(sentiment), Arc::new(captioner)))
    }
}

/// Whether a CUDA device is usable by this process.
///
/// False when the crate was built without the `cuda` feature.
pub fn accelerator_available() -> bool {
    candle_core::utils::cuda_is_available() && Device::new_cuda(0).is_ok()
}

fn select_device(use_gpu: bool) -> Result<Device> {
    if use_gpu && accelerator_available() {
        Ok(Device::new_cuda(0)?)
    } else {
        Ok(Device::Cpu)
    }
}
