use super::types::SentimentPrediction;
use crate::{Error, Result, config::SentimentModelConfig};
use async_trait::async_trait;
use candle_core::{D, DType, Device, IndexOp, Tensor};
use candle_nn::{Linear, Module, VarBuilder, linear};
use candle_transformers::models::distilbert::{self, DistilBertModel};
use hf_hub::{
    Repo, RepoType,
    api::sync::{Api, ApiRepo},
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Scores `text` against every label, highest score first.
    async fn classify(&self, text: &str) -> Result<Vec<SentimentPrediction>>;
}

/// The parts of a Hugging Face `config.json` the classification head needs.
#[derive(Debug, Deserialize)]
struct HeadConfig {
    dim: usize,
    #[serde(default)]
    id2label: HashMap<String, String>,
}

impl HeadConfig {
    fn labels(&self) -> Vec<String> {
        let count = self.id2label.len().max(2);
        (0..count)
            .map(|id| {
                self.id2label
                    .get(&id.to_string())
                    .cloned()
                    .unwrap_or_else(|| format!("LABEL_{}", id))
            })
            .collect()
    }
}

struct ClassificationHead {
    pre_classifier: Linear,
    classifier: Linear,
}

impl ClassificationHead {
    fn load(vb: VarBuilder, dim: usize, num_labels: usize) -> candle_core::Result<Self> {
        Ok(Self {
            pre_classifier: linear(dim, dim, vb.pp("pre_classifier"))?,
            classifier: linear(dim, num_labels, vb.pp("classifier"))?,
        })
    }

    fn forward(&self, pooled: &Tensor) -> candle_core::Result<Tensor> {
        let xs = self.pre_classifier.forward(pooled)?.relu()?;
        self.classifier.forward(&xs)
    }
}

struct Inner {
    model: DistilBertModel,
    head: ClassificationHead,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    device: Device,
}

/// DistilBERT fine-tuned for sequence classification (SST-2 style checkpoints).
pub struct DistilBertClassifier {
    inner: Arc<Inner>,
}

impl DistilBertClassifier {
    /// Downloads (or reuses the cached copy of) the model and builds it on `device`.
    pub fn load(config: &SentimentModelConfig, device: &Device) -> Result<Self> {
        info!(
            "Loading sentiment model {} (revision {})",
            config.model_id, config.revision
        );

        let api = Api::new()?;
        let repo = api.repo(Repo::with_revision(
            config.model_id.clone(),
            RepoType::Model,
            config.revision.clone(),
        ));

        let config_path = repo.get("config.json")?;
        let weights_path = repo.get("model.safetensors")?;
        let tokenizer_path = fetch_tokenizer(&api, &repo, config)?;

        debug!("Weights resolved to {}", weights_path.display());

        Self::from_files(
            &config_path,
            &weights_path,
            &tokenizer_path,
            config.max_length,
            device,
        )
    }

    pub fn from_files(
        config_path: &Path,
        weights_path: &Path,
        tokenizer_path: &Path,
        max_length: usize,
        device: &Device,
    ) -> Result<Self> {
        let raw_config = std::fs::read_to_string(config_path)?;
        let model_config: distilbert::Config = serde_json::from_str(&raw_config)?;
        let head_config: HeadConfig = serde_json::from_str(&raw_config)?;
        let labels = head_config.labels();

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], distilbert::DTYPE, device)?
        };
        let model = DistilBertModel::load(vb.clone(), &model_config).map_err(|e| {
            Error::model(format!(
                "Failed to build DistilBERT from {}: {}",
                weights_path.display(),
                e
            ))
        })?;
        let head = ClassificationHead::load(vb, head_config.dim, labels.len())
            .map_err(|e| Error::model(format!("Missing classification head: {}", e)))?;

        let tokenizer = load_tokenizer(tokenizer_path, max_length)?;

        info!("Sentiment model ready with labels {:?}", labels);

        Ok(Self {
            inner: Arc::new(Inner {
                model,
                head,
                tokenizer,
                labels,
                device: device.clone(),
            }),
        })
    }
}

#[async_trait]
impl SentimentClassifier for DistilBertClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentPrediction>> {
        let inner = Arc::clone(&self.inner);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || inner.classify(&text))
            .await
            .map_err(|e| Error::internal(format!("Sentiment task failed: {}", e)))?
    }
}

impl Inner {
    fn classify(&self, text: &str) -> Result<Vec<SentimentPrediction>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| Error::tokenizer(e.to_string()))?;
        let ids = encoding.get_ids();
        debug!("Classifying {} tokens", ids.len());

        let input_ids = Tensor::new(ids, &self.device)?.unsqueeze(0)?;
        // Single unpadded sequence, so nothing is masked out.
        let attention_mask = Tensor::zeros((1, ids.len()), DType::U8, &self.device)?;

        let hidden = self.model.forward(&input_ids, &attention_mask)?;
        let pooled = hidden.i((.., 0))?;
        let logits = self.head.forward(&pooled)?;
        let probabilities = candle_nn::ops::softmax(&logits, D::Minus1)?
            .squeeze(0)?
            .to_dtype(DType::F32)?
            .to_vec1::<f32>()?;

        if probabilities.is_empty() {
            return Err(Error::inference("Model produced no logits"));
        }

        Ok(rank_predictions(&probabilities, &self.labels))
    }
}

/// Pairs each probability with its label and orders them best first.
pub fn rank_predictions(probabilities: &[f32], labels: &[String]) -> Vec<SentimentPrediction> {
    let mut predictions: Vec<SentimentPrediction> = probabilities
        .iter()
        .enumerate()
        .map(|(id, &p)| {
            let label = labels
                .get(id)
                .cloned()
                .unwrap_or_else(|| format!("LABEL_{}", id));
            SentimentPrediction::new(label, f64::from(p).clamp(0.0, 1.0))
        })
        .collect();

    predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
    predictions
}

fn fetch_tokenizer(api: &Api, repo: &ApiRepo, config: &SentimentModelConfig) -> Result<PathBuf> {
    match repo.get("tokenizer.json") {
        Ok(path) => Ok(path),
        Err(e) => {
            warn!(
                "{} has no tokenizer.json ({}), using {}",
                config.model_id, e, config.tokenizer_fallback
            );
            Ok(api.model(config.tokenizer_fallback.clone()).get("tokenizer.json")?)
        }
    }
}

fn load_tokenizer(path: &Path, max_length: usize) -> Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(path).map_err(|e| Error::tokenizer(e.to_string()))?;
    tokenizer.with_padding(None);
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(|e| Error::tokenizer(e.to_string()))?;
    Ok(tokenizer)
}
