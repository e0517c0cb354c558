//! gembot CLI: run the Telegram bot. Config from env and optional CLI args.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gembot")]
#[command(about = "Gemini-backed Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
