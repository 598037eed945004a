//! Strategy seam shared by the remote and keyword generators

use async_trait::async_trait;
use serde_json::Value;

use crate::ai::explain;
use crate::ai::types::ChatTurn;
use crate::error::GenerateError;

/// A response generator: prompt plus optional history in, text out.
///
/// Implementations are selected at construction time; callers and tests run
/// against either through this trait without conditional branching.
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    /// Produce a response for `prompt`, optionally conditioned on prior turns
    async fn generate(&self, prompt: &str, history: &[ChatTurn])
        -> Result<String, GenerateError>;

    /// Answer a decision question against the member's journey log.
    ///
    /// The default path folds the serialized journey and a fixed concierge
    /// persona into one composite prompt. Strategies that cannot make use of
    /// the context override this and answer from the query alone.
    async fn explain(&self, query: &str, journey: &[Value]) -> Result<String, GenerateError> {
        let prompt = explain::build_prompt(query, journey);
        self.generate(&prompt, &[]).await
    }

    /// Short engine name for logs and the health probe
    fn name(&self) -> &'static str;
}
