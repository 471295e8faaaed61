use super::types::{
    AnalyzeTextResponse, DescribeResponse, ErrorResponse, HealthResponse, ImagePayload,
    TextPayload,
};
use crate::{error::CaptionError, inference::Pipelines, urgency};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, error, info};

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub pipelines: Pipelines,
    pub gpu: bool,
}

fn internal_error(detail: impl Into<String>) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        gpu: state.gpu,
    })
}

pub async fn analyze_text(
    State(state): State<AppState>,
    Json(payload): Json<TextPayload>,
) -> Result<Json<AnalyzeTextResponse>, HandlerError> {
    debug!("Analyzing {} characters of text", payload.text.chars().count());

    let predictions = state
        .pipelines
        .sentiment
        .classify(&payload.text)
        .await
        .map_err(|e| {
            error!("Sentiment classification failed: {}", e);
            internal_error(e.to_string())
        })?;

    let top = predictions.into_iter().next().ok_or_else(|| {
        error!("Sentiment classifier returned no predictions");
        internal_error("Sentiment classifier returned no predictions")
    })?;

    let urgency = urgency::assess(&payload.text);
    info!(
        "Text analyzed: emotion={} confidence={:.4} urgency={}",
        top.label, top.score, urgency
    );

    Ok(Json(AnalyzeTextResponse {
        emotion: top.label,
        confidence: top.score,
        urgency,
    }))
}

pub async fn describe(
    State(state): State<AppState>,
    Json(payload): Json<ImagePayload>,
) -> Result<Json<DescribeResponse>, HandlerError> {
    let captions = state
        .pipelines
        .captioner
        .caption(&payload.image_base64)
        .await
        .map_err(|e| {
            error!("Image description failed: {}", e);
            internal_error(e.to_string())
        })?;

    let caption = captions.into_iter().next().ok_or_else(|| {
        let e = CaptionError::Inference("no caption produced".to_string());
        error!("Image description failed: {}", e);
        internal_error(e.to_string())
    })?;

    info!("Image described: {}", caption.generated_text);

    Ok(Json(DescribeResponse {
        description: caption.generated_text,
    }))
}
