//! Local generation strategy: static keyword lookup
//!
//! Pure and deterministic. The prompt is lowercased and scanned against the
//! table in insertion order; the first substring match wins, with a default
//! entry when nothing matches.

use async_trait::async_trait;
use serde_json::Value;

use crate::ai::strategy::GenerationStrategy;
use crate::ai::types::ChatTurn;
use crate::error::GenerateError;

/// Ordered keyword-to-response mapping plus a default fallback
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(String, String)>,
    default: String,
}

impl KeywordTable {
    /// Build a table from `(keyword, response)` pairs; keywords are
    /// lowercased on insertion
    pub fn new<K, V, I>(entries: I, default: impl Into<String>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
            default: default.into(),
        }
    }

    /// The built-in health-concierge dictionary
    pub fn builtin() -> Self {
        Self::new(
            [
                (
                    "poor digestion",
                    "For poor digestion, consider incorporating more fiber into your diet through fruits, vegetables, and whole grains. Probiotics might also be helpful. If symptoms persist, consult a nutritionist like Carla.",
                ),
                (
                    "apo b",
                    "ApoB is a key marker for cardiovascular risk. To lower it, focus on reducing saturated fats, increasing soluble fiber, and incorporating regular exercise. Your personalized plan likely includes dietary adjustments from Carla and exercise protocols from Rachel.",
                ),
                (
                    "apob",
                    "ApoB is a key marker for cardiovascular risk. To lower it, focus on reducing saturated fats, increasing soluble fiber, and incorporating regular exercise. Your personalized plan likely includes dietary adjustments from Carla and exercise protocols from Rachel.",
                ),
                (
                    "travel protocol",
                    "The travel protocol is designed to minimize jet lag and maintain your health routine during business trips. It includes precise light exposure schedules, hydration plans, and in-flight mobility routines. Advik and Rachel typically design these.",
                ),
                (
                    "couch stretch",
                    "The couch stretch was recommended to address hip flexor tightness, a common cause of lower back pain, often exacerbated by prolonged sitting during travel. It's a foundational mobility exercise from Rachel to improve your structural health.",
                ),
                (
                    "hrv",
                    "Heart Rate Variability (HRV) is a key indicator of your autonomic nervous system's balance and recovery. A consistent upward trend in HRV indicates improved resilience. Factors like sleep, stress, and exercise consistency significantly impact it.",
                ),
                (
                    "stress",
                    "For stress management, Dr. Evans often recommends techniques like mindful breathing exercises and structured 'shutdown rituals' to help you disengage after demanding periods. Consistent sleep and proper nutrition also play a vital role.",
                ),
                (
                    "exercise",
                    "Your exercise plan is dynamically updated based on your progress and goals. It typically includes a mix of Zone 2 cardio for autonomic health and structured strength training for overall fitness and longevity. Rachel and Advik oversee this.",
                ),
                (
                    "sleep",
                    "Improving sleep quality is crucial. Strategies include optimizing your sleep environment, consistent sleep schedule, and avoiding late-night heavy meals or blue light exposure. Tracking sleep with devices like Whoop helps monitor progress.",
                ),
            ],
            "I'm a simple keyword agent. I can explain decisions related to digestion, ApoB, travel protocols, specific exercises like the couch stretch, or general topics like HRV, stress, exercise, and sleep. Please try rephrasing your question with these keywords.",
        )
    }

    /// First matching entry in table order, or the default
    pub fn lookup(&self, prompt: &str) -> &str {
        let prompt = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| prompt.contains(keyword.as_str()))
            .map(|(_, response)| response.as_str())
            .unwrap_or(&self.default)
    }
}

/// Generation backed by the keyword table; no I/O, no failure mode
pub struct KeywordResponder {
    table: KeywordTable,
}

impl KeywordResponder {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(KeywordTable::builtin())
    }
}

#[async_trait]
impl GenerationStrategy for KeywordResponder {
    async fn generate(
        &self,
        prompt: &str,
        _history: &[ChatTurn],
    ) -> Result<String, GenerateError> {
        Ok(self.table.lookup(prompt).to_string())
    }

    /// Journey context is accepted but ignored; the lookup sees the plain
    /// query, exactly as a direct prompt would
    async fn explain(&self, query: &str, _journey: &[Value]) -> Result<String, GenerateError> {
        self.generate(query, &[]).await
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
