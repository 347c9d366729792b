//! Error types for transcript analysis

use depo_ingest::IngestError;
use depo_llm::LlmError;
use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while analyzing a transcript
///
/// Every variant renders as a message fit to show a user. `Service` keeps its
/// underlying cause as the error source rather than in the message.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Missing or placeholder credential, or an unusable setting
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document could not be read or parsed
    #[error("Failed to extract text: {0}")]
    Extraction(#[from] IngestError),

    /// Extracted text is empty or whitespace only
    #[error("The file is empty or text could not be extracted.")]
    EmptyContent,

    /// Transport or service-side failure
    #[error("Failed to get an analysis from the extraction service. Please try again.")]
    Service(#[source] Box<dyn StdError + Send + Sync>),

    /// The service replied, but the payload violates the schema
    #[error("The extraction service returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl AnalysisError {
    /// Wrap a provider failure
    pub fn service<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AnalysisError::Service(Box::new(cause))
    }
}

impl From<LlmError> for AnalysisError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Configuration(msg) => AnalysisError::Configuration(msg),
            other => AnalysisError::service(other),
        }
    }
}
