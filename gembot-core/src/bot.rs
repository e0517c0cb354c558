//! Bot abstraction for sending messages and fetching uploaded files.
//!
//! Transport-agnostic; `gembot-telegram` implements it via teloxide. Keeping the
//! trait here lets handler crates be tested with in-process mock bots.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction over the chat transport. Implementations map to e.g. Telegram.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message together with a reply keyboard built from `labels`
    /// (one row per inner slice).
    async fn send_menu(&self, chat: &Chat, text: &str, labels: &[&[&str]]) -> Result<()>;

    /// Sends a text message and removes any reply keyboard from the chat.
    async fn send_and_remove_menu(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Downloads the raw bytes of an uploaded file by its transport file id.
    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>>;
}
