//! Remote generation strategy
//!
//! Appends the prompt to the running conversation, posts it through the
//! retrying client, and pulls the first candidate's text out of the nested
//! response structure.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::ai::client::RemoteClient;
use crate::ai::strategy::GenerationStrategy;
use crate::ai::types::ChatTurn;
use crate::config::RemoteConfig;
use crate::error::GenerateError;

/// Generation backed by the external generateContent API
pub struct RemoteGenerator {
    client: RemoteClient,
}

impl RemoteGenerator {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: RemoteClient::new(config),
        }
    }
}

#[async_trait]
impl GenerationStrategy for RemoteGenerator {
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, GenerateError> {
        let payload = build_payload(prompt, history);
        let response = self.client.post_json(&payload).await?;
        extract_candidate_text(&response).ok_or(GenerateError::MalformedResponse)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// The request body: prior turns followed by the prompt as a new user turn
fn build_payload(prompt: &str, history: &[ChatTurn]) -> Value {
    let mut contents = history.to_vec();
    contents.push(ChatTurn::user(prompt));
    json!({ "contents": contents })
}

/// Extract `candidates[0].content.parts[0].text` from the response
fn extract_candidate_text(json: &Value) -> Option<String> {
    json.get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|arr| arr.first())
        .and_then(|part| part.get("text"))
        .and_then(|t| t.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_appends_user_turn() {
        let history = vec![ChatTurn::user("earlier question")];
        let payload = build_payload("new question", &history);

        let contents = payload["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0]["parts"][0]["text"], "earlier question");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[1]["parts"][0]["text"], "new question");
    }

    #[test]
    fn test_payload_without_history() {
        let payload = build_payload("hello", &[]);
        let contents = payload["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
    }

    #[test]
    fn test_extract_candidate_text() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Generated answer."}]
                }
            }]
        });
        assert_eq!(
            extract_candidate_text(&response).as_deref(),
            Some("Generated answer.")
        );
    }

    #[test]
    fn test_extract_missing_fields() {
        assert_eq!(extract_candidate_text(&json!({})), None);
        assert_eq!(extract_candidate_text(&json!({"candidates": []})), None);
        assert_eq!(
            extract_candidate_text(&json!({"candidates": [{"content": {}}]})),
            None
        );
        assert_eq!(
            extract_candidate_text(&json!({"candidates": [{"content": {"parts": []}}]})),
            None
        );
    }
}
