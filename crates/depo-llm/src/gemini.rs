//! Gemini Provider Implementation
//!
//! Provides integration with Google's Gemini `generateContent` API using
//! JSON-mode structured output.
//!
//! # Features
//!
//! - Async HTTP communication via `reqwest`
//! - Configurable endpoint, model and timeout
//! - Credential validation before any request is built
//! - Single attempt per call; retry policy belongs to the caller
//!
//! # Examples
//!
//! ```no_run
//! use depo_llm::{GeminiConfig, GeminiProvider};
//!
//! let config = GeminiConfig::new("my-api-key");
//! let provider = GeminiProvider::new(config).unwrap();
//! assert_eq!(provider.model(), "gemini-2.5-pro");
//! ```

use crate::LlmError;
use depo_domain::{GenerationRequest, LlmProvider as LlmProviderTrait};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default timeout for a single request (5 minutes; long transcripts are slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Value shipped in sample `.env` files; treated as an absent key
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Connection settings for [`GeminiProvider`]
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`
    pub api_key: String,

    /// Model name (e.g. "gemini-2.5-pro")
    pub model: String,

    /// API base URL, without the `/models/...` suffix
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create a config with default model, endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration
    ///
    /// A blank key or the placeholder value counts as missing.
    pub fn validate(&self) -> Result<(), LlmError> {
        let key = self.api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_API_KEY {
            return Err(LlmError::Configuration(
                "Gemini API key is not configured. Set GEMINI_API_KEY in the environment or a .env file."
                    .to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(LlmError::Configuration("model must not be empty".to_string()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(LlmError::Configuration("endpoint must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
    temperature: f32,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Error envelope returned with non-success statuses
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
                temperature: request.temperature,
            },
        }
    }
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate
    fn into_text(self) -> Result<String, LlmError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse("no candidates returned".to_string()))?;

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(LlmError::EmptyResponse(format!("finish reason: {}", reason)));
        }
        Ok(text)
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if the config does not validate or
    /// the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model,
            api_key: config.api_key.trim().to_string(),
            client,
        })
    }

    /// Name of the model requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one generateContent request and return the text payload
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The network request fails
    /// - The service answers with a non-success status
    /// - The reply envelope cannot be parsed or carries no text
    pub async fn generate_content(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let body = GenerateContentRequest::from_request(request);

        debug!(
            model = %self.model,
            prompt_chars = request.prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Status {
                status: status.as_u16(),
                message: error_message(&error_text),
            });
        }

        let reply = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = reply.into_text()?;
        debug!(response_chars = text.len(), "Received generateContent response");
        Ok(text)
    }
}

/// Pull the message out of a Gemini error envelope, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate_structured(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        self.generate_content(request)
    }
}
