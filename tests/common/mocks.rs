use async_trait::async_trait;
use sensemesh_engine::{
    Error, Result,
    error::CaptionError,
    inference::{Caption, ImageCaptioner, SentimentClassifier, SentimentPrediction},
};
use std::sync::{Arc, Mutex};

/// Mock sentiment classifier returning canned predictions
#[derive(Debug, Default)]
pub struct MockSentimentClassifier {
    pub predictions: Vec<SentimentPrediction>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockSentimentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_predictions(mut self, predictions: Vec<SentimentPrediction>) -> Self {
        self.predictions = predictions;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentClassifier for MockSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentPrediction>> {
        self.requests.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.predictions.clone())
    }
}

/// Deterministic stand-in for a binary sentiment model: negative when the
/// text mentions something alarming, positive otherwise
#[derive(Debug, Default)]
pub struct KeywordSentimentClassifier;

#[async_trait]
impl SentimentClassifier for KeywordSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentPrediction>> {
        let lower = text.to_lowercase();
        let negative = ["fire", "terrible", "hurt", "sad"]
            .iter()
            .any(|w| lower.contains(w));

        let (top, rest) = if negative {
            ("NEGATIVE", "POSITIVE")
        } else {
            ("POSITIVE", "NEGATIVE")
        };

        Ok(vec![
            SentimentPrediction::new(top, 0.9987),
            SentimentPrediction::new(rest, 0.0013),
        ])
    }
}

/// Mock captioner that fails with a fixed error
#[derive(Debug)]
pub struct FailingCaptioner {
    pub error: CaptionError,
}

impl FailingCaptioner {
    pub fn decode(msg: &str) -> Self {
        Self {
            error: CaptionError::Decode(msg.to_string()),
        }
    }

    pub fn inference(msg: &str) -> Self {
        Self {
            error: CaptionError::Inference(msg.to_string()),
        }
    }
}

#[async_trait]
impl ImageCaptioner for FailingCaptioner {
    async fn caption(&self, _image_base64: &str) -> std::result::Result<Vec<Caption>, CaptionError> {
        Err(self.error.clone())
    }
}

/// Mock captioner that produces no candidates
#[derive(Debug, Default)]
pub struct EmptyCaptioner;

#[async_trait]
impl ImageCaptioner for EmptyCaptioner {
    async fn caption(&self, _image_base64: &str) -> std::result::Result<Vec<Caption>, CaptionError> {
        Ok(Vec::new())
    }
}
