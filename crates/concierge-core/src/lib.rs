//! Core library for Concierge
//!
//! Hosts the generation strategies (remote LLM call and local keyword
//! lookup), the retrying API client, and the decision-explanation prompt
//! path used by the HTTP server.

pub mod ai;
pub mod config;
pub mod error;

pub use ai::{
    ChatTurn, GenerationStrategy, KeywordResponder, KeywordTable, Part, RemoteGenerator,
};
pub use config::RemoteConfig;
pub use error::GenerateError;
