use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Input was not an integer literal. Surfaced as HTTP 400 with the raw
    /// string echoed back; never a server-side fault.
    #[error("Invalid number: {raw}")]
    InvalidNumber { raw: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
