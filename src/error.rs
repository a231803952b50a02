use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyAnnealError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout Error: {0}")]
    Layout(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type KaResult<T> = Result<T, KeyAnnealError>;
