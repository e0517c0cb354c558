use thiserror::Error;

/// Failures surfaced through the [`Bot`](crate::Bot) trait and the handler
/// chain. Store and Gemini failures have their own error types in their crates
/// and are handled (logged or mapped to fixed replies) before reaching here.
#[derive(Error, Debug)]
pub enum GembotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, GembotError>;
