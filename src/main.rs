use std::sync::Arc;

use tokio::signal;
use tracing::info;

use marketpulse::bot::{self, CommandResponder};
use marketpulse::config::{Config, TelegramConfig};
use marketpulse::market::BinanceClient;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load("config.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    let telegram = match TelegramConfig::from_env() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load Telegram credentials: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("marketpulse starting");

    let client = match BinanceClient::new(&config.market) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build exchange client: {e}");
            std::process::exit(1);
        }
    };

    let responder = CommandResponder::new(Arc::new(client), config.market.clone());

    tokio::select! {
        () = bot::run(telegram, responder) => {
            info!("Telegram dispatch loop exited");
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("marketpulse stopped");
}
