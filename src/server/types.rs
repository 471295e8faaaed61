use crate::urgency::Urgency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextPayload {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagePayload {
    pub image_base64: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub gpu: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub emotion: String,
    pub confidence: f64,
    pub urgency: Urgency,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
