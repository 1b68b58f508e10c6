use std::io;

use thiserror::Error;

/// Main error type for ringo operations.
///
/// Derivation and data-source problems are contained inside the catalog layer
/// and never reach this type during a normal lookup; only caller-facing
/// failures (bad input, bad config, empty query) are surfaced here.
#[derive(Error, Debug)]
pub enum RingoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Enter a search condition (model number, name, or a filter)")]
    EmptyQuery,

    #[error("Data source for {category} unavailable: {reason}")]
    DataSource { category: String, reason: String },
}

impl RingoError {
    /// Stable machine-readable code for JSON error output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_INVALID",
            Self::MissingConfig(_) => "CONFIG_MISSING",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::EmptyQuery => "EMPTY_QUERY",
            Self::DataSource { .. } => "DATA_SOURCE_UNAVAILABLE",
        }
    }
}

pub type Result<T> = std::result::Result<T, RingoError>;
