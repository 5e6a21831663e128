use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Ledger Data Format Error: {0}")]
    DataFormat(String),
}

pub type EcoResult<T> = Result<T, EcoError>;
