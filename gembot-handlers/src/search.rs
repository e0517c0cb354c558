//! Web-search handler: in `AwaitingSearch`, the message is a list of queries
//! (one per line). The search results blob is embedded in a follow-up prompt and
//! sent through the transcript-bounded call.

use crate::exchange::run_exchange;
use crate::replies::{self, gemini_error_reply};
use crate::session::{MenuState, SessionMap};
use async_trait::async_trait;
use gembot_core::{Bot, Handler, HandlerResponse, Message, Result};
use gemini_client::{ChatModel, SearchProvider};
use std::sync::Arc;
use tracing::{error, info, instrument};
use transcript_store::TranscriptStore;

pub struct SearchHandler {
    bot: Arc<dyn Bot>,
    model: Arc<dyn ChatModel>,
    search: Arc<dyn SearchProvider>,
    store: Arc<dyn TranscriptStore>,
    sessions: Arc<SessionMap>,
    message_limit: usize,
}

impl SearchHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        model: Arc<dyn ChatModel>,
        search: Arc<dyn SearchProvider>,
        store: Arc<dyn TranscriptStore>,
        sessions: Arc<SessionMap>,
        message_limit: usize,
    ) -> Self {
        Self {
            bot,
            model,
            search,
            store,
            sessions,
            message_limit,
        }
    }
}

#[async_trait]
impl Handler for SearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.document.is_some() {
            return Ok(HandlerResponse::Continue);
        }
        let state = self.sessions.get(message.user.id, message.chat.id).await;
        if state != MenuState::AwaitingSearch {
            return Ok(HandlerResponse::Continue);
        }

        let queries: Vec<String> = message
            .content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if queries.is_empty() {
            self.bot
                .send_message(&message.chat, replies::SEARCH_EMPTY)
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        info!(
            user_id = message.user.id,
            query_count = queries.len(),
            "Running web search"
        );

        let blob = match self.search.search(&queries).await {
            Ok(blob) => blob,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Web search failed");
                self.bot
                    .send_message(&message.chat, &gemini_error_reply(&e))
                    .await?;
                // State stays AwaitingSearch so the user can retry the queries.
                return Ok(HandlerResponse::Stop);
            }
        };

        let prompt = format!(
            "Answer the following queries using the web search results below.\n\
             Queries:\n{}\n\nSearch results:\n{}",
            queries.join("\n"),
            blob
        );

        let response = run_exchange(
            &self.bot,
            &self.model,
            &self.store,
            self.message_limit,
            message,
            &prompt,
        )
        .await?;

        self.sessions
            .transition(message.user.id, message.chat.id, MenuState::Chat)
            .await;
        Ok(response)
    }
}
