//! Analysis client: transcript text in, structured result out

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use depo_domain::{AnalysisResult, LlmProvider};
use std::error::Error as StdError;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Sends a transcript to the extraction service and validates the reply
///
/// Each call to [`analyze`](Self::analyze) makes at most one outbound request
/// and never retries.
pub struct AnalysisClient<P>
where
    P: LlmProvider,
{
    provider: P,
    config: AnalyzerConfig,
    model_name: String,
}

impl<P> AnalysisClient<P>
where
    P: LlmProvider,
    P::Error: StdError + Send + Sync + 'static,
{
    /// Create a new client, rejecting an invalid configuration
    pub fn new(provider: P, config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Configuration)?;
        Ok(Self {
            provider,
            config,
            model_name: "llm".to_string(),
        })
    }

    /// Label the model in log output
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze transcript text
    ///
    /// Blank text fails with [`AnalysisError::EmptyContent`] before any request
    /// is made. Otherwise the text is embedded verbatim in the prompt.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyContent);
        }

        let request = PromptBuilder::new(text).request(self.config.temperature);
        info!(
            "Requesting analysis from {} ({} chars of transcript)",
            self.model_name,
            text.len()
        );
        debug!("Prompt length: {} chars", request.prompt.len());

        let start = Instant::now();
        let payload = self
            .provider
            .generate_structured(&request)
            .await
            .map_err(|e| {
                error!("Extraction service call failed: {}", e);
                AnalysisError::service(e)
            })?;

        debug!(
            "Response length: {} chars after {}ms",
            payload.len(),
            start.elapsed().as_millis()
        );

        let result = parse_response(&payload).inspect_err(|e| warn!("{}", e))?;

        info!(
            "Analysis complete: {} key facts, {} exhibits, {} objections",
            result.key_facts_and_admissions().len(),
            result.exhibits_referenced().len(),
            result.objections_log().len()
        );

        Ok(result)
    }
}
