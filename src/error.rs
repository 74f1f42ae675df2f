use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structural level of the payload at which a schema check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaLevel {
    TopLevel,
    Month,
    Day,
}

impl fmt::Display for SchemaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaLevel::TopLevel => f.write_str("top-level"),
            SchemaLevel::Month => f.write_str("month-level"),
            SchemaLevel::Day => f.write_str("day-level"),
        }
    }
}

/// Errors produced while fetching, validating, persisting or analyzing visitor data.
#[derive(Error, Debug)]
pub enum ZooError {
    /// Network failure or a non-success HTTP status.
    #[error("API request failed: {0}")]
    Transport(String),

    /// The response body could not be parsed as JSON.
    #[error("malformed API response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The payload is missing required fields.
    #[error("missing {level} fields: {detail}")]
    Schema { level: SchemaLevel, detail: String },

    /// The payload has the right shape but a field carries the wrong value type.
    #[error("failed to decode visitor data: {0}")]
    Decode(#[source] serde_json::Error),

    /// The snapshot file could not be written or read.
    #[error("failed to access {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("insufficient data: need at least {needed} day records, found {found}")]
    InsufficientData { needed: usize, found: usize },

    #[error("month {month} has no day records")]
    EmptyMonth { month: u32 },

    #[error("month index {index} is out of range (expected 0-11)")]
    MonthOutOfRange { index: u32 },

    #[error("month {month} appears more than once")]
    DuplicateMonth { month: u32 },

    /// Month-name lookup with a number outside 1..=12.
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZooError>;
