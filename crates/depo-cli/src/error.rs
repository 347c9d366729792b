//! Error types for the CLI application.

use depo_export::ExportError;
use depo_extractor::AnalysisError;
use depo_ingest::IngestError;
use depo_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis pipeline error
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// Document could not be read
    #[error("{0}")]
    Ingest(#[from] IngestError),

    /// Export failed
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<LlmError> for CliError {
    fn from(e: LlmError) -> Self {
        CliError::Analysis(AnalysisError::from(e))
    }
}
