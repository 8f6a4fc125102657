use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Unknown option '{value}' for {field}")]
    UnknownOption { field: String, value: String },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("No route for path: {0}")]
    RouteNotFound(String),
    #[error("A payout submission is already in flight")]
    SubmissionInFlight,
}

pub type Result<T> = std::result::Result<T, PayoutError>;
