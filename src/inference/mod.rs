mod caption;
mod loader;
mod sentiment;
mod types;

pub use caption::{ImageCaptioner, PlaceholderCaptioner};
pub use loader::{Pipelines, accelerator_available};
pub use sentiment::{DistilBertClassifier, SentimentClassifier, rank_predictions};
pub use types::{Caption, SentimentPrediction};
