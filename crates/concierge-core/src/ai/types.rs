//! Conversation types shared by the strategies and the HTTP layer

use serde::{Deserialize, Serialize};

/// One turn of conversation history, in the upstream `contents` shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role tag, e.g. "user"
    pub role: String,
    /// Content fragments for this turn
    pub parts: Vec<Part>,
}

/// A single text fragment inside a turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl ChatTurn {
    /// Build a user turn holding one text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}
