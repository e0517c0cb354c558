//! # gembot-telegram
//!
//! Telegram framework layer: adapters from teloxide types, the
//! [`gembot_core::Bot`] implementation, and the REPL runner. Handles only
//! Telegram connectivity and handler-chain execution; no persistence or AI
//! logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
