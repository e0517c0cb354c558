//! Free-text chat handler: the terminal handler in the chain. Expands
//! quick-prompt labels, passes everything else through unchanged, and runs the
//! transcript-bounded model call.

use crate::exchange::run_exchange;
use crate::menu::expand_label;
use crate::replies;
use crate::session::{MenuState, SessionMap};
use async_trait::async_trait;
use gembot_core::{Bot, Handler, HandlerResponse, Message, Result};
use gemini_client::ChatModel;
use std::sync::Arc;
use tracing::{info, instrument};
use transcript_store::TranscriptStore;

pub struct ChatHandler {
    bot: Arc<dyn Bot>,
    model: Arc<dyn ChatModel>,
    store: Arc<dyn TranscriptStore>,
    sessions: Arc<SessionMap>,
    message_limit: usize,
}

impl ChatHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        model: Arc<dyn ChatModel>,
        store: Arc<dyn TranscriptStore>,
        sessions: Arc<SessionMap>,
        message_limit: usize,
    ) -> Self {
        Self { bot, model, store, sessions, message_limit }
    }
}

#[async_trait]
impl Handler for ChatHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.document.is_some() || message.content.trim().is_empty() {
            return Ok(HandlerResponse::Continue);
        }

        let state = self.sessions.get(message.user.id, message.chat.id).await;
        match state {
            MenuState::Idle => {
                self.bot
                    .send_message(&message.chat, replies::START_HINT)
                    .await?;
                return Ok(HandlerResponse::Stop);
            }
            MenuState::AwaitingDocument => {
                // Text arrived where a file was expected.
                self.bot
                    .send_message(&message.chat, replies::DOCUMENT_HINT)
                    .await?;
                return Ok(HandlerResponse::Stop);
            }
            MenuState::AwaitingSearch => {
                // SearchHandler runs earlier in the chain; reaching here means
                // the chain is miswired, so fall back to plain chat.
                info!(user_id = message.user.id, "AwaitingSearch text reached ChatHandler");
            }
            MenuState::Menu | MenuState::Chat => {}
        }

        // Free text from the menu starts chatting.
        self.sessions
            .transition(message.user.id, message.chat.id, MenuState::Chat)
            .await;

        let input = match expand_label(&message.content) {
            Some(expanded) => {
                info!(user_id = message.user.id, label = %message.content, "Quick prompt expanded");
                expanded.to_string()
            }
            None => message.content.clone(),
        };

        run_exchange(
            &self.bot,
            &self.model,
            &self.store,
            self.message_limit,
            message,
            &input,
        )
        .await
    }
}
