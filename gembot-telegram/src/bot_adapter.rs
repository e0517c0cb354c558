//! Wraps teloxide::Bot and implements [`gembot_core::Bot`]. Production code
//! sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use gembot_core::{Bot as CoreBot, Chat, GembotError, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup},
};

/// Thin wrapper around teloxide::Bot that implements gembot-core's Bot trait.
/// Keeps the raw token because file downloads go through the file API URL,
/// which teloxide does not expose on the Bot type.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
    token: String,
    http: reqwest::Client,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot and its token.
    pub fn new(bot: teloxide::Bot, token: String) -> Self {
        Self {
            bot,
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, labels: &[&[&str]]) -> Result<()> {
        let rows: Vec<Vec<KeyboardButton>> = labels
            .iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(*label)).collect())
            .collect();
        let mut keyboard = KeyboardMarkup::new(rows);
        keyboard.resize_keyboard = true;

        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(ReplyMarkup::Keyboard(keyboard))
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_and_remove_menu(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(ReplyMarkup::KeyboardRemove(KeyboardRemove::new()))
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;

        let url = format!(
            "https://api.telegram.org/file/bot{}/{}",
            self.token, file.path
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        if !response.status().is_success() {
            return Err(GembotError::Bot(format!(
                "File download returned {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GembotError::Bot(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
