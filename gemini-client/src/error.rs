//! Error taxonomy for Gemini calls. Every remote failure maps to exactly one
//! variant so handlers can pick the user-facing message per variant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    /// The prompt was rejected by the safety filter before generation.
    #[error("Prompt blocked by safety filter: {reason}")]
    PromptBlocked { reason: String },

    /// Generation started but the candidate was blocked for safety.
    #[error("Response blocked by safety filter: {reason}")]
    ResponseBlocked { reason: String },

    /// HTTP 404 referring to the model name.
    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    /// Any other non-success API status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 response that carried no usable candidate text.
    #[error("Empty response from model")]
    EmptyResponse,

    /// A 200 response whose body did not parse as the expected shape.
    #[error("Malformed response: {0}")]
    InvalidResponse(String),
}
