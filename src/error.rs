use thiserror::Error;

#[derive(Error, Debug)]
pub enum VpError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid offset '{0}': expected an integer")]
    InvalidOffset(String),

    #[error("Invalid key range {min}..={max}: keys must satisfy 0 <= min <= max <= 60")]
    InvalidRange { min: i64, max: i64 },

    #[error("Wrap policy needs at least one octave of range, got {min}..={max}")]
    WrapRangeTooNarrow { min: usize, max: usize },

    #[error("Invalid search window {min}..={max}: min must not exceed max")]
    InvalidWindow { min: i32, max: i32 },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type VpResult<T> = Result<T, VpError>;
