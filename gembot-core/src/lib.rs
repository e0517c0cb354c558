//! # gembot-core
//!
//! Core types and traits for the Gemini Telegram bot: [`Bot`], [`Handler`], message and
//! user types, the conversation transcript model, message chunking, and tracing
//! initialization. Transport-agnostic; used by gembot-telegram and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod split;
pub mod transcript;
pub mod types;

pub use bot::Bot;
pub use error::{GembotError, Result};
pub use logger::init_tracing;
pub use split::{split_message, TELEGRAM_MESSAGE_LIMIT};
pub use transcript::{Role, Transcript, Turn};
pub use types::{
    Chat, Document, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage,
    ToCoreUser, User,
};
