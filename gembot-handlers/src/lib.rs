//! # gembot-handlers
//!
//! Domain handlers for the Gemini Telegram bot, run inside the handler chain in
//! this order:
//!
//! 1. [`AuditHandler`] – logs every incoming update (before hook only),
//! 2. [`CommandHandler`] – /start, /help, /cancel,
//! 3. [`MenuHandler`] – mode buttons that switch the session state,
//! 4. [`DocumentHandler`] – PDF/TXT summarization, fixed rejection otherwise,
//! 5. [`SearchHandler`] – per-line web-search queries in `AwaitingSearch`,
//! 6. [`ChatHandler`] – everything else: the transcript-bounded model call.

mod audit;
mod chat;
mod commands;
mod document;
mod exchange;
mod menu;
mod replies;
mod search;
mod session;

pub use audit::AuditHandler;
pub use chat::ChatHandler;
pub use commands::CommandHandler;
pub use document::{DocumentHandler, DEFAULT_DOC_CHAR_LIMIT};
pub use menu::{expand_label, MenuHandler, MENU_ROWS};
pub use replies::gemini_error_reply;
pub use search::SearchHandler;
pub use session::{MenuState, SessionMap};
