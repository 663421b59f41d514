use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors produced while fetching or decoding exchange candle data.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("exchange request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("exchange returned an error object: {0}")]
    Exchange(String),

    #[error("exchange returned an empty candle list")]
    EmptyResponse,

    #[error("no valid candles in exchange response")]
    NoValidCandles,
}

/// Errors produced by trend evaluation over a closing-price sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("not enough data: have {have} closes, need {need}")]
    InsufficientData { have: usize, need: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
