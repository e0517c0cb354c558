//! Assembly: builds the Gemini client, transcript store, session map, and the
//! handler chain, then hands off to the Telegram runner.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument};

use gembot_core::{init_tracing, Bot, TELEGRAM_MESSAGE_LIMIT};
use gembot_handlers::{
    AuditHandler, ChatHandler, CommandHandler, DocumentHandler, MenuHandler, SearchHandler,
    SessionMap,
};
use gembot_telegram::{run_repl, TelegramBotAdapter};
use gemini_client::{ChatModel, GeminiClient, SearchProvider};
use handler_chain::HandlerChain;
use transcript_store::{SqliteTranscriptStore, TranscriptStore};

use crate::config::AppConfig;

/// Main entry: init logging, connect the store, build the chain, run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: AppConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    info!(
        database_path = %config.database_path,
        model = config.gemini_model.as_deref().unwrap_or("default"),
        "Initializing bot"
    );

    let store: Arc<dyn TranscriptStore> =
        Arc::new(SqliteTranscriptStore::new(&config.database_path).await?);

    let mut client = GeminiClient::new(config.gemini_api_key.clone());
    if let Some(base_url) = &config.gemini_base_url {
        client = client.with_base_url(base_url.clone());
    }
    if let Some(model) = &config.gemini_model {
        client = client.with_model(model.clone());
    }
    let client = Arc::new(client);
    let model: Arc<dyn ChatModel> = client.clone();
    let search: Arc<dyn SearchProvider> = client;

    let teloxide_bot = teloxide::Bot::new(config.bot_token.clone());
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(
        teloxide_bot.clone(),
        config.bot_token.clone(),
    ));

    let sessions = Arc::new(SessionMap::new());

    let chain = build_handler_chain(&config, bot, model, search, store, sessions);

    info!("Bot started successfully");
    run_repl(teloxide_bot, chain).await
}

/// Chain order: audit logs everything first; command and menu claim control
/// messages; document and search claim their modes; chat is the terminal
/// handler for free text.
fn build_handler_chain(
    config: &AppConfig,
    bot: Arc<dyn Bot>,
    model: Arc<dyn ChatModel>,
    search: Arc<dyn SearchProvider>,
    store: Arc<dyn TranscriptStore>,
    sessions: Arc<SessionMap>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(AuditHandler::new()))
        .add_handler(Arc::new(CommandHandler::new(
            bot.clone(),
            store.clone(),
            sessions.clone(),
        )))
        .add_handler(Arc::new(MenuHandler::new(bot.clone(), sessions.clone())))
        .add_handler(Arc::new(DocumentHandler::new(
            bot.clone(),
            model.clone(),
            store.clone(),
            sessions.clone(),
            config.doc_char_limit,
            TELEGRAM_MESSAGE_LIMIT,
        )))
        .add_handler(Arc::new(SearchHandler::new(
            bot.clone(),
            model.clone(),
            search,
            store.clone(),
            sessions.clone(),
            TELEGRAM_MESSAGE_LIMIT,
        )))
        .add_handler(Arc::new(ChatHandler::new(
            bot,
            model,
            store,
            sessions,
            TELEGRAM_MESSAGE_LIMIT,
        )))
}
