//! Telegram command parsing, handling, and reply formatting.

mod command;
mod format;
mod handler;

pub use command::{bot_commands, command_help, parse_command, Command, CommandParseError};
pub use format::{
    analysis_message, trend_message, unknown_command_reply, version_message, NOT_ENOUGH_DATA,
    NO_DATA,
};
pub use handler::{run, CommandResponder};
