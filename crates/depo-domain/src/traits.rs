//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use serde_json::Value;
use std::future::Future;

/// Default sampling temperature for extraction requests
///
/// Kept low so the service favors factual consistency over variation.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// A single structured-generation request
///
/// The response format is always JSON; `response_schema` declares the exact
/// shape the service's output must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System-level framing for the model
    pub system_instruction: String,

    /// Task text, including any embedded document
    pub prompt: String,

    /// Output-shape constraint
    pub response_schema: Value,

    /// Sampling temperature
    pub temperature: f32,
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (depo-llm). One call is one
/// outbound request; implementations do not retry.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate structured output and return the raw textual payload
    fn generate_structured(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
