//! Telegram command parsing.

/// Supported Telegram commands.
///
/// All commands take no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Analysis,
    Trend,
    Version,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Accepts an optional `@botname` mention suffix, as sent from group chats.
/// Arguments after the command are ignored.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(Command::Start),
        "/help" => Ok(Command::Help),
        "/analysis" => Ok(Command::Analysis),
        "/trend" => Ok(Command::Trend),
        "/version" => Ok(Command::Version),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/start` and `/help`, MarkdownV2-escaped.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 *Commands*\n\n\
    /analysis \\- 📊 Price vs MA20 and EMA50/EMA200 bias\n\
    /trend \\- 📈 Direction of the last two hourly closes\n\
    /version \\- 🔖 Build version\n\
    /help \\- Show all commands"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("analysis", "Price vs MA20 and EMA crossover bias"),
        ("trend", "Direction of the last two closes"),
        ("version", "Build version"),
        ("help", "Show all commands"),
    ]
}
