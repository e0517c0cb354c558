//! # gemini-client
//!
//! Minimal client for Google's Gemini `generateContent` API:
//!
//! - [`GeminiClient::generate`] – transcript-bounded chat call (full prior history
//!   plus a new user turn, returns the reply text),
//! - [`GeminiClient::search`] – web search through the `google_search` tool,
//!   returning a text blob of answers and grounded references,
//! - [`GeminiError`] – classification of remote failures (safety block, model not
//!   found, API error, transport, empty reply).
//!
//! The [`ChatModel`] and [`SearchProvider`] traits are the seams handler crates
//! depend on, so tests can substitute in-process fakes.

mod client;
mod error;
mod search;
mod types;

use async_trait::async_trait;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::GeminiError;
pub use types::{Content, Part};

/// Generative chat seam: full prior history plus one new user input.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Calls the model with `history` followed by a new user turn carrying
    /// `input`; returns the reply text. The caller owns transcript bookkeeping.
    async fn generate(&self, history: &[Content], input: &str)
        -> Result<String, GeminiError>;
}

/// Web-search seam: a list of query strings in, one results blob out.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, queries: &[String]) -> Result<String, GeminiError>;
}
