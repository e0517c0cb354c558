//! Command handler: /start, /help, /cancel. Non-commands continue down the chain.

use crate::replies;
use crate::session::{MenuState, SessionMap};
use crate::MENU_ROWS;
use async_trait::async_trait;
use gembot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};
use transcript_store::TranscriptStore;

pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn TranscriptStore>,
    sessions: Arc<SessionMap>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn TranscriptStore>,
        sessions: Arc<SessionMap>,
    ) -> Self {
        Self { bot, store, sessions }
    }

    /// /start: fresh transcript, menu keyboard, state → Menu. Re-entry allowed.
    async fn start(&self, message: &Message) -> Result<HandlerResponse> {
        self.clear_transcript(message).await;
        self.sessions
            .transition(message.user.id, message.chat.id, MenuState::Menu)
            .await;
        self.bot
            .send_menu(&message.chat, replies::WELCOME, MENU_ROWS)
            .await?;
        info!(user_id = message.user.id, "Conversation started");
        Ok(HandlerResponse::Stop)
    }

    /// /cancel: clear transcript, drop the keyboard, state → Idle.
    async fn cancel(&self, message: &Message) -> Result<HandlerResponse> {
        self.clear_transcript(message).await;
        self.sessions
            .transition(message.user.id, message.chat.id, MenuState::Idle)
            .await;
        self.bot
            .send_and_remove_menu(&message.chat, replies::GOODBYE)
            .await?;
        info!(user_id = message.user.id, "Conversation ended");
        Ok(HandlerResponse::Stop)
    }

    async fn clear_transcript(&self, message: &Message) {
        if let Err(e) = self.store.clear(message.user.id, message.chat.id).await {
            error!(error = %e, user_id = message.user.id, "Failed to clear transcript");
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.content.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }
        // Strip an optional @botname suffix, as sent in group chats.
        let command = message
            .content
            .split_whitespace()
            .next()
            .unwrap_or("")
            .split('@')
            .next()
            .unwrap_or("");

        match command {
            "/start" => self.start(message).await,
            "/cancel" => self.cancel(message).await,
            "/help" => {
                self.bot.send_message(&message.chat, replies::HELP).await?;
                Ok(HandlerResponse::Stop)
            }
            _ => {
                info!(user_id = message.user.id, command = %command, "Unknown command");
                self.bot
                    .send_message(&message.chat, replies::UNKNOWN_COMMAND)
                    .await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
