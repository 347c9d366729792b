//! Depo LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `depo-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing and offline runs
//! - `GeminiProvider`: Google Gemini `generateContent` API integration
//!
//! # Examples
//!
//! ```
//! use depo_domain::{GenerationRequest, LlmProvider};
//! use depo_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new("{}");
//! let request = GenerationRequest {
//!     system_instruction: "system".to_string(),
//!     prompt: "task".to_string(),
//!     response_schema: serde_json::json!({}),
//!     temperature: 0.2,
//! };
//! let payload = provider.generate_structured(&request).await.unwrap();
//! assert_eq!(payload, "{}");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use depo_domain::{GenerationRequest, LlmProvider as LlmProviderTrait};
use std::future::{self, Future};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Missing or placeholder credential, or other unusable settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message reported by the service
        message: String,
    },

    /// The service reply could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service replied without any text payload
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured payloads without making any network calls, and
/// records every request it receives.
///
/// # Examples
///
/// ```
/// use depo_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("Exhibit 7", r#"{"exhibitsReferenced": []}"#);
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, String>,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed payload for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Ok(response.into()),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a MockProvider whose every call fails with a communication error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            default_response: Err(message.into()),
            ..Self::new("")
        }
    }

    /// Return `response` for any request whose prompt contains `needle`
    ///
    /// Earlier registrations win when several needles match.
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((needle.into(), response.into()));
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) = 0;
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        *self.last_request.lock().unwrap_or_else(PoisonError::into_inner) = Some(request.clone());

        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, response)) = responses
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
        {
            return Ok(response.clone());
        }

        self.default_response
            .clone()
            .map_err(LlmError::Communication)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(r#"{"keyFactsAndAdmissions":[],"exhibitsReferenced":[],"objectionsLog":[]}"#)
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate_structured(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        future::ready(self.respond(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            system_instruction: "system".to_string(),
            prompt: prompt.to_string(),
            response_schema: json!({"type": "OBJECT"}),
            temperature: 0.2,
        }
    }

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate_structured(&request("any prompt")).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::new("fallback");
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate_structured(&request("say hello")).await.unwrap(), "world");
        assert_eq!(provider.generate_structured(&request("foo!")).await.unwrap(), "bar");
        assert_eq!(provider.generate_structured(&request("unknown")).await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate_structured(&request("prompt1")).await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate_structured(&request("prompt2")).await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing("connection reset");
        let result = provider.generate_structured(&request("anything")).await;
        assert!(matches!(result, Err(LlmError::Communication(msg)) if msg == "connection reset"));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_records_last_request() {
        let provider = MockProvider::default();
        assert!(provider.last_request().is_none());

        provider.generate_structured(&request("transcript body")).await.unwrap();
        let recorded = provider.last_request().unwrap();
        assert_eq!(recorded.prompt, "transcript body");
        assert_eq!(recorded.temperature, 0.2);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate_structured(&request("test")).await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
