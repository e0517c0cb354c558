//! gembot binary: Gemini-backed Telegram bot entry point.

use anyhow::Result;
use clap::Parser;
use gembot::{run_bot, AppConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = AppConfig::load(token)?;
            run_bot(config).await
        }
    }
}
