//! App config: Telegram token, Gemini access, persistence, logging. Loaded from
//! env. Both secrets are required; startup aborts when either is missing.

use anyhow::Result;
use std::env;

use gembot_handlers::DEFAULT_DOC_CHAR_LIMIT;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TELEGRAM_BOT_TOKEN (or BOT_TOKEN)
    pub bot_token: String,
    /// GEMINI_API_KEY
    pub gemini_api_key: String,
    /// GEMINI_MODEL, default gemini-1.5-flash
    pub gemini_model: Option<String>,
    /// GEMINI_BASE_URL, default the public endpoint
    pub gemini_base_url: Option<String>,
    /// Transcript database file path
    pub database_path: String,
    /// Log file path
    pub log_file: String,
    /// Max characters of extracted document text fed to the model
    pub doc_char_limit: usize,
}

impl AppConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if
    /// provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| {
                    anyhow::anyhow!("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set; refusing to start")
                })?,
        };
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY not set; refusing to start"))?;

        let gemini_model = env::var("GEMINI_MODEL").ok().filter(|s| !s.is_empty());
        let gemini_base_url = env::var("GEMINI_BASE_URL").ok().filter(|s| !s.is_empty());
        let database_path =
            env::var("DATABASE_URL").unwrap_or_else(|_| "gembot.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/gembot.log".to_string());
        let doc_char_limit = env::var("DOC_CHAR_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DOC_CHAR_LIMIT);

        Ok(Self {
            bot_token,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            database_path,
            log_file,
            doc_char_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "TELEGRAM_BOT_TOKEN",
            "BOT_TOKEN",
            "GEMINI_API_KEY",
            "GEMINI_MODEL",
            "GEMINI_BASE_URL",
            "DATABASE_URL",
            "LOG_FILE",
            "DOC_CHAR_LIMIT",
        ] {
            env::remove_var(key);
        }
    }

    /// **Test: load fails without the bot token.**
    #[test]
    fn missing_bot_token_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("GEMINI_API_KEY", "key");

        let result = AppConfig::load(None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    /// **Test: load fails without the Gemini key even when a token is passed.**
    #[test]
    fn missing_gemini_key_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let result = AppConfig::load(Some("123:abc".to_string()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("GEMINI_API_KEY"));
    }

    /// **Test: defaults apply when only the secrets are set.**
    #[test]
    fn defaults_apply() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("GEMINI_API_KEY", "key");

        let config = AppConfig::load(Some("123:abc".to_string())).unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.database_path, "gembot.db");
        assert_eq!(config.log_file, "logs/gembot.log");
        assert_eq!(config.doc_char_limit, DEFAULT_DOC_CHAR_LIMIT);
        assert!(config.gemini_model.is_none());
        assert!(config.gemini_base_url.is_none());
    }

    /// **Test: the CLI token overrides the env token.**
    #[test]
    fn cli_token_overrides_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "env-token");
        env::set_var("GEMINI_API_KEY", "key");

        let config = AppConfig::load(Some("cli-token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli-token");
    }
}
