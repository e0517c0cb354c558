//! # gembot
//!
//! Entry-point crate: CLI, environment config, and assembly of the handler
//! chain over the Telegram runner.

mod assembly;
mod cli;
mod config;

pub use assembly::run_bot;
pub use cli::{Cli, Commands};
pub use config::AppConfig;
