//! Request and response bodies for the API endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use concierge_core::ChatTurn;

#[derive(Debug, Deserialize)]
pub struct GenerateMessageRequest {
    /// Required; an empty string counts as absent
    pub prompt: Option<String>,
    /// Prior turns forwarded to the remote payload, never validated further
    #[serde(default, rename = "chatHistory")]
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ExplainDecisionRequest {
    /// Required; an empty string counts as absent
    pub query: Option<String>,
    /// Journey events of arbitrary shape, stringified into the prompt
    #[serde(default, rename = "journeyData")]
    pub journey_data: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub engine: &'static str,
}
