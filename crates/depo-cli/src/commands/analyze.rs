//! Analyze command implementation.

use super::{load_document, write_outputs};
use crate::cli::AnalyzeArgs;
use crate::config::{resolve_api_key, Config};
use crate::error::Result;
use crate::output::Formatter;
use depo_domain::LlmProvider;
use depo_extractor::{AnalysisClient, Session};
use depo_llm::{GeminiProvider, MockProvider};
use std::error::Error as StdError;
use std::fs;
use tracing::info;

/// Execute the analyze command.
///
/// The credential is resolved and checked before the document is read, so a
/// missing key fails without doing any work.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    match &args.mock_response {
        Some(path) => {
            info!("Using canned reply from {}", path.display());
            let payload = fs::read_to_string(path)?;
            run_analysis(MockProvider::new(payload), "mock", &args, config, formatter).await
        }
        None => {
            let api_key = resolve_api_key(args.api_key.as_deref())?;
            let provider = GeminiProvider::new(config.gemini_config(api_key))?;
            let model = provider.model().to_string();
            run_analysis(provider, &model, &args, config, formatter).await
        }
    }
}

async fn run_analysis<P>(
    provider: P,
    model: &str,
    args: &AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: StdError + Send + Sync + 'static,
{
    let client = AnalysisClient::new(provider, config.analyzer_config())?.with_model_name(model);
    let mut session = Session::new(client);

    let document = load_document(&args.input, args.media_type, config).await?;
    eprintln!(
        "{}",
        formatter.info(&format!("Analyzing {}...", args.input.display()))
    );

    let result = session.analyze_document(document).await?;

    println!("{}", formatter.format_result(result)?);
    eprintln!("{}", formatter.analysis_summary(result));
    write_outputs(result, &args.output, formatter)?;

    Ok(())
}
