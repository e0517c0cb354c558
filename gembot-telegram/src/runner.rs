//! REPL runner: receives Telegram updates and drives the handler chain.

use anyhow::Result;
use gembot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info};

use crate::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL. Each update is converted to a core message and
/// run through the chain; the chain call is awaited so messages from one chat
/// are handled in arrival order.
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot connected");
        }
    }

    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let wrapper = TelegramMessageWrapper(&msg);
                let core_msg = wrapper.to_core();

                if core_msg.content.is_empty() && core_msg.document.is_none() {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Ignoring unsupported update"
                    );
                    return Ok(());
                }

                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_type = %core_msg.message_type,
                    "Received message"
                );

                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
