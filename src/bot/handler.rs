//! Command handling and the Telegram dispatch loop.
//!
//! Each command triggers one fresh candle fetch followed by a pure
//! evaluation; nothing is shared between invocations. Fetch and analysis
//! failures are logged with their cause and surfaced to the chat as a fixed
//! not-enough-data reply.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tracing::{error, info, warn};

use super::command::{bot_commands, parse_command, Command, CommandParseError};
use super::format;
use crate::analysis::{analyze, short_trend};
use crate::config::{MarketConfig, TelegramConfig};
use crate::market::{closes, Candle, CandleSource};

/// Builds the reply text for each bot command.
///
/// Holds the candle source behind a trait object so tests can substitute a
/// mock without any network access.
pub struct CommandResponder {
    source: Arc<dyn CandleSource>,
    market: MarketConfig,
}

impl CommandResponder {
    pub fn new(source: Arc<dyn CandleSource>, market: MarketConfig) -> Self {
        Self { source, market }
    }

    /// Produce the reply for a parsed command.
    ///
    /// Always returns a sendable `MarkdownV2` message; errors along the way
    /// are logged and mapped to user-visible fallback replies.
    pub async fn respond(&self, command: Command) -> String {
        match command {
            Command::Start | Command::Help => super::command::command_help().to_string(),
            Command::Version => format::version_message(),
            Command::Analysis => self.analysis_reply().await,
            Command::Trend => self.trend_reply().await,
        }
    }

    async fn analysis_reply(&self) -> String {
        let Some(candles) = self.fetch_candles().await else {
            return format::NOT_ENOUGH_DATA.to_string();
        };

        match analyze(&closes(&candles)) {
            Ok(report) => {
                let as_of = candles[candles.len() - 1].open_time;
                format::analysis_message(&self.market.symbol, as_of, &report)
            }
            Err(e) => {
                warn!(error = %e, "Analysis skipped");
                format::NOT_ENOUGH_DATA.to_string()
            }
        }
    }

    async fn trend_reply(&self) -> String {
        let Some(candles) = self.fetch_candles().await else {
            return format::NO_DATA.to_string();
        };

        match short_trend(&closes(&candles)) {
            Ok(direction) => format::trend_message(direction),
            Err(e) => {
                warn!(error = %e, "Trend comparison skipped");
                format::NO_DATA.to_string()
            }
        }
    }

    /// One fresh fetch; `None` means the failure was logged and the caller
    /// should reply with its fallback message.
    async fn fetch_candles(&self) -> Option<Vec<Candle>> {
        match self
            .source
            .recent_candles(
                &self.market.symbol,
                &self.market.interval,
                self.market.candle_limit,
            )
            .await
        {
            Ok(candles) => Some(candles),
            Err(e) => {
                error!(error = %e, symbol = %self.market.symbol, "Candle fetch failed");
                None
            }
        }
    }
}

/// Run the Telegram dispatch loop until the process is stopped.
pub async fn run(telegram: TelegramConfig, responder: CommandResponder) {
    let bot = Bot::new(&telegram.bot_token);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    let responder = Arc::new(responder);

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let responder = Arc::clone(&responder);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            let reply = match parse_command(text) {
                Ok(command) => {
                    info!(chat_id = msg.chat.id.0, ?command, "Command received");
                    responder.respond(command).await
                }
                Err(CommandParseError::NotACommand) => return respond(()),
                Err(err) => {
                    warn!(error = %err, "Unrecognized command");
                    format::unknown_command_reply()
                }
            };

            if let Err(e) = bot
                .send_message(msg.chat.id, reply)
                .parse_mode(ParseMode::MarkdownV2)
                .await
            {
                error!(error = %e, "Failed to send Telegram reply");
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
