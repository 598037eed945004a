//! Generation strategies and the remote API client
//!
//! Two interchangeable strategies share the [`GenerationStrategy`] trait:
//! - Remote: posts the conversation to an external LLM API with backoff
//! - Keyword: static substring lookup, no I/O

mod client;
mod explain;
mod keyword;
mod remote;
pub mod retry;
mod strategy;
mod types;

pub use client::RemoteClient;
pub use keyword::{KeywordResponder, KeywordTable};
pub use remote::RemoteGenerator;
pub use strategy::GenerationStrategy;
pub use types::{ChatTurn, Part};
