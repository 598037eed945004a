//! Endpoint handlers
//!
//! Required-field validation happens here. Generation failures are logged
//! with their typed cause, then folded into the ordinary success envelope as
//! fixed placeholder text, so callers always receive a well-formed answer
//! body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use concierge_core::GenerateError;

use crate::models::{
    ErrorResponse, ExplainDecisionRequest, ExplanationResponse, GenerateMessageRequest,
    HealthResponse, MessageResponse,
};
use crate::server::AppState;

/// Placeholder when the upstream answered but no candidate text was found
const COULD_NOT_GENERATE: &str = "Error: Could not generate response.";
/// Placeholder when the upstream call itself failed
const FAILED_TO_COMMUNICATE: &str = "Error: Failed to communicate with AI model.";

/// POST /api/generate-message
pub async fn generate_message(
    State(state): State<AppState>,
    Json(req): Json<GenerateMessageRequest>,
) -> Response {
    let Some(prompt) = required_field(req.prompt) else {
        return missing_field("Prompt is required.");
    };

    let message = match state.strategy.generate(&prompt, &req.chat_history).await {
        Ok(text) => text,
        Err(err) => degraded_reply("generate-message", &err),
    };
    Json(MessageResponse { message }).into_response()
}

/// POST /api/explain-decision
pub async fn explain_decision(
    State(state): State<AppState>,
    Json(req): Json<ExplainDecisionRequest>,
) -> Response {
    let Some(query) = required_field(req.query) else {
        return missing_field("Query is required.");
    };

    let explanation = match state.strategy.explain(&query, &req.journey_data).await {
        Ok(text) => text,
        Err(err) => degraded_reply("explain-decision", &err),
    };
    Json(ExplanationResponse { explanation }).into_response()
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        engine: state.strategy.name(),
    })
}

/// Present-and-nonempty check; an empty string counts as absent
fn required_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn missing_field(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a typed failure to the fixed placeholder shown in the answer body
fn degraded_reply(operation: &str, err: &GenerateError) -> String {
    error!("{} generation failed: {}", operation, err);
    match err {
        GenerateError::MalformedResponse => COULD_NOT_GENERATE.to_string(),
        _ => FAILED_TO_COMMUNICATE.to_string(),
    }
}
