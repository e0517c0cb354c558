//! The transcript-bounded model call shared by the chat, document, and search
//! handlers: prior transcript + new input → model; on success both turns are
//! appended and the reply is sent in length-bounded chunks; on failure the user
//! gets the fixed error text and the transcript is left unmodified.

use crate::replies::gemini_error_reply;
use gembot_core::{split_message, Bot, HandlerResponse, Message, Result, Role};
use gemini_client::{ChatModel, Content};
use std::sync::Arc;
use tracing::{error, info};
use transcript_store::TranscriptStore;

pub(crate) async fn run_exchange(
    bot: &Arc<dyn Bot>,
    model: &Arc<dyn ChatModel>,
    store: &Arc<dyn TranscriptStore>,
    message_limit: usize,
    message: &Message,
    input: &str,
) -> Result<HandlerResponse> {
    let user_id = message.user.id;
    let chat_id = message.chat.id;

    // A transcript that fails to load degrades to a fresh context rather than
    // blocking the exchange.
    let transcript = match store.load(user_id, chat_id).await {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, user_id, "Failed to load transcript; using empty context");
            Default::default()
        }
    };

    let history: Vec<Content> = transcript
        .turns()
        .iter()
        .map(|turn| match turn.role {
            Role::User => Content::user(turn.text.clone()),
            Role::Model => Content::model(turn.text.clone()),
        })
        .collect();

    info!(
        user_id,
        chat_id,
        history_len = history.len(),
        input_len = input.len(),
        "Submitting transcript-bounded model call"
    );

    let answer = match model.generate(&history, input).await {
        Ok(answer) => answer,
        Err(e) => {
            error!(error = %e, user_id, "Model call failed; transcript unchanged");
            bot.send_message(&message.chat, &gemini_error_reply(&e)).await?;
            return Ok(HandlerResponse::Stop);
        }
    };

    if let Err(e) = store.append_exchange(user_id, chat_id, input, &answer).await {
        // The reply is still worth delivering; the exchange is just not replayable.
        error!(error = %e, user_id, "Failed to append exchange to transcript");
    }

    for chunk in split_message(&answer, message_limit) {
        bot.send_message(&message.chat, &chunk).await?;
    }

    info!(user_id, chat_id, reply_len = answer.len(), "Model reply sent");
    Ok(HandlerResponse::Reply(answer))
}
