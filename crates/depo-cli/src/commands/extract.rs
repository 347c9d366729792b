//! Extract command implementation.

use super::load_document;
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use depo_ingest::TextExtractor;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let document = load_document(&args.input, args.media_type, config).await?;
    let text = TextExtractor::new().extract(document).await?;

    if text.trim().is_empty() {
        eprintln!("{}", formatter.warning("No text could be extracted."));
        return Ok(());
    }

    print!("{}", text);
    Ok(())
}
