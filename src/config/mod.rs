//! Application configuration.
//!
//! Settings are loaded from a TOML file with serde defaults for every field,
//! so a missing file runs the bot on pure defaults. The Telegram bot token is
//! sourced from the environment and is required at startup.

mod logging;
mod settings;
mod telegram;

pub use logging::LoggingConfig;
pub use settings::{Config, MarketConfig};
pub use telegram::TelegramConfig;
