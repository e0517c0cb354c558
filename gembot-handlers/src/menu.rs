//! Fixed menu: mode buttons that move the session state, and quick-prompt
//! labels that expand deterministically into predefined prompt texts. Free text
//! matching no label passes through to the chat handler unchanged.

use crate::replies;
use crate::session::{MenuState, SessionMap};
use async_trait::async_trait;
use gembot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

pub(crate) const LABEL_CHAT: &str = "💬 Free chat";
pub(crate) const LABEL_DOCUMENT: &str = "📄 Summarize a document";
pub(crate) const LABEL_SEARCH: &str = "🔎 Web search";
pub(crate) const LABEL_FUN_FACT: &str = "💡 Fun fact";
pub(crate) const LABEL_RECAP: &str = "🧾 Recap";

const PROMPT_FUN_FACT: &str =
    "Tell me one interesting fact I probably don't know, in a couple of sentences.";
const PROMPT_RECAP: &str =
    "Summarize our conversation so far in a few short bullet points.";

/// Keyboard layout sent with /start: one row of modes, one row of quick prompts.
pub const MENU_ROWS: &[&[&str]] = &[
    &[LABEL_CHAT, LABEL_DOCUMENT, LABEL_SEARCH],
    &[LABEL_FUN_FACT, LABEL_RECAP],
];

/// Expands a quick-prompt label into its predefined prompt text; `None` means the
/// text is not a quick-prompt label and passes through unchanged.
pub fn expand_label(text: &str) -> Option<&'static str> {
    match text {
        LABEL_FUN_FACT => Some(PROMPT_FUN_FACT),
        LABEL_RECAP => Some(PROMPT_RECAP),
        _ => None,
    }
}

/// Claims the three mode buttons: switches the session state and prompts for the
/// mode's input. Everything else continues down the chain.
pub struct MenuHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<SessionMap>,
}

impl MenuHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<SessionMap>) -> Self {
        Self { bot, sessions }
    }
}

#[async_trait]
impl Handler for MenuHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let (next, prompt) = match message.content.as_str() {
            LABEL_CHAT => (MenuState::Chat, replies::CHAT_MODE_PROMPT),
            LABEL_DOCUMENT => (MenuState::AwaitingDocument, replies::DOCUMENT_PROMPT),
            LABEL_SEARCH => (MenuState::AwaitingSearch, replies::SEARCH_PROMPT),
            _ => return Ok(HandlerResponse::Continue),
        };

        let state = self
            .sessions
            .transition(message.user.id, message.chat.id, next)
            .await;
        info!(
            user_id = message.user.id,
            state = ?state,
            "Menu button pressed"
        );
        if state != next {
            // Mode buttons only work from the menu; nudge the user back to it.
            self.bot
                .send_message(&message.chat, replies::START_HINT)
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        self.bot.send_message(&message.chat, prompt).await?;
        Ok(HandlerResponse::Stop)
    }
}
