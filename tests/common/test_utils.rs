use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use sensemesh_engine::{
    config::CaptionConfig,
    inference::{ImageCaptioner, Pipelines, PlaceholderCaptioner, SentimentClassifier},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

use super::mocks::KeywordSentimentClassifier;

pub const PLACEHOLDER_CAPTION: &str = "a person sitting in front of a computer";

/// Build a router backed by the given pipelines
pub fn create_app(
    sentiment: Arc<dyn SentimentClassifier>,
    captioner: Arc<dyn ImageCaptioner>,
    gpu: bool,
) -> Router {
    server::router(AppState {
        pipelines: Pipelines::new(sentiment, captioner),
        gpu,
    })
}

/// Router with a deterministic classifier and the default placeholder captioner
pub fn create_test_app() -> Router {
    create_app(
        Arc::new(KeywordSentimentClassifier),
        Arc::new(PlaceholderCaptioner::new(CaptionConfig::default().placeholder)),
        false,
    )
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

models:
  sentiment:
    model_id: "distilbert-base-uncased-finetuned-sst-2-english"
    revision: "main"
    use_gpu: false
    max_length: 256
  caption:
    placeholder: "a person sitting in front of a computer"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
