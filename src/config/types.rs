use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default)]
    pub sentiment: SentimentModelConfig,
    #[serde(default)]
    pub caption: CaptionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentModelConfig {
    #[serde(default = "default_sentiment_model")]
    pub model_id: String,
    #[serde(default = "default_revision")]
    pub revision: String,
    #[serde(default = "default_use_gpu")]
    pub use_gpu: bool,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Repository to take `tokenizer.json` from when the model repo has none.
    #[serde(default = "default_tokenizer_fallback")]
    pub tokenizer_fallback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    #[serde(default = "default_caption_model")]
    pub model_id: String,
    #[serde(default = "default_placeholder_caption")]
    pub placeholder: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for SentimentModelConfig {
    fn default() -> Self {
        Self {
            model_id: default_sentiment_model(),
            revision: default_revision(),
            use_gpu: default_use_gpu(),
            max_length: default_max_length(),
            tokenizer_fallback: default_tokenizer_fallback(),
        }
    }
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            model_id: default_caption_model(),
            placeholder: default_placeholder_caption(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sentiment_model() -> String {
    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
}

fn default_revision() -> String {
    "main".to_string()
}

fn default_use_gpu() -> bool {
    true
}

fn default_max_length() -> usize {
    512
}

fn default_tokenizer_fallback() -> String {
    "distilbert-base-uncased".to_string()
}

fn default_caption_model() -> String {
    "nlpconnect/vit-gpt2-image-captioning".to_string()
}

fn default_placeholder_caption() -> String {
    "a person sitting in front of a computer".to_string()
}
