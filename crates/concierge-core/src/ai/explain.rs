//! Decision-explanation prompt construction
//!
//! Embeds the serialized journey events and a fixed concierge persona around
//! the member's question. Used by the default
//! [`GenerationStrategy::explain`](crate::ai::GenerationStrategy::explain)
//! path; the keyword strategy bypasses it.

use serde_json::Value;

/// Build the composite prompt for a decision question
pub(crate) fn build_prompt(query: &str, journey: &[Value]) -> String {
    let context = serde_json::to_string_pretty(journey).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"The member is reviewing their health journey. They have a question about a decision made in their plan.
Their question is: "{query}"

Here is a summary of their health journey and relevant events/messages so far:
{context}

Please act as the member's AI concierge. Based on the provided journey data and understanding the member's profile (analytical, data-driven, values efficiency), explain the rationale behind the decision in a clear, concise, and professional manner. If the specific decision isn't clear from the provided context, state that and provide a general explanation of how such decisions are made. Focus on linking the decision to the member's goals or observed health data."#
    )
}
