//! One-document-at-a-time analysis session

use crate::analyzer::AnalysisClient;
use crate::error::AnalysisError;
use depo_domain::{AnalysisResult, LlmProvider};
use depo_ingest::{InputDocument, TextExtractor};
use std::error::Error as StdError;
use tracing::info;

/// Drives a document through extraction and analysis, holding the latest result
///
/// Starting a new analysis discards the previous result before any work is
/// done, so a failure never leaves stale findings behind. Runs are exclusive
/// because every entry point takes `&mut self`.
pub struct Session<P>
where
    P: LlmProvider,
{
    extractor: TextExtractor,
    client: AnalysisClient<P>,
    current: Option<AnalysisResult>,
}

impl<P> Session<P>
where
    P: LlmProvider,
    P::Error: StdError + Send + Sync + 'static,
{
    /// Create a session around an analysis client
    pub fn new(client: AnalysisClient<P>) -> Self {
        Self {
            extractor: TextExtractor::new(),
            client,
            current: None,
        }
    }

    /// The analysis client
    pub fn client(&self) -> &AnalysisClient<P> {
        &self.client
    }

    /// The result of the last successful run, if the most recent run succeeded
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    /// Take ownership of the current result, leaving the session empty
    pub fn take_result(&mut self) -> Option<AnalysisResult> {
        self.current.take()
    }

    /// Discard any held result
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Extract text from a document and analyze it
    pub async fn analyze_document(
        &mut self,
        document: InputDocument,
    ) -> Result<&AnalysisResult, AnalysisError> {
        self.current = None;

        info!("Reading {} transcript ({} bytes)", document.media_type(), document.len());
        let text = self.extractor.extract(document).await?;
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyContent);
        }

        self.run(&text).await
    }

    /// Analyze transcript text that is already in memory
    pub async fn analyze_text(&mut self, text: &str) -> Result<&AnalysisResult, AnalysisError> {
        self.current = None;
        self.run(text).await
    }

    async fn run(&mut self, text: &str) -> Result<&AnalysisResult, AnalysisError> {
        info!("Analyzing transcript");
        let result = self.client.analyze(text).await?;
        let stored: &AnalysisResult = self.current.insert(result);
        Ok(stored)
    }
}
