//! Telegram bot credentials.

use crate::error::ConfigError;

/// Telegram bot configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN`. The token has no usable default, so a
    /// missing or empty variable is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            ConfigError::MissingEnv {
                name: "TELEGRAM_BOT_TOKEN",
            }
        })?;

        if bot_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "TELEGRAM_BOT_TOKEN",
                reason: "cannot be empty".into(),
            });
        }

        Ok(Self { bot_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_missing_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TELEGRAM_BOT_TOKEN");

        assert!(matches!(
            TelegramConfig::from_env(),
            Err(ConfigError::MissingEnv { name }) if name == "TELEGRAM_BOT_TOKEN"
        ));
    }

    #[test]
    fn from_env_empty_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "");

        assert!(matches!(
            TelegramConfig::from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
    }

    #[test]
    fn from_env_valid() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "test-token");

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
    }
}
