//! Command implementations.

pub mod analyze;
pub mod config;
pub mod export;
pub mod extract;
pub mod schema;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::export::execute_export;
pub use self::extract::execute_extract;
pub use self::schema::execute_schema;

use crate::cli::{MediaTypeArg, OutputArgs};
use crate::clipboard::copy_to_clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use depo_domain::AnalysisResult;
use depo_export::{to_clipboard_text, write_exports, ExportFormats};
use depo_ingest::InputDocument;
use std::path::{Path, PathBuf};

/// Apply the configured size limits, then read the document.
///
/// Oversized files are rejected from their metadata without being read.
pub(crate) async fn load_document(
    path: &Path,
    media_type: Option<MediaTypeArg>,
    config: &Config,
) -> Result<InputDocument> {
    config.input_policy().check_file(path).await?;
    Ok(InputDocument::read(path, media_type.map(Into::into)).await?)
}

/// Write export files and copy to the clipboard as requested.
///
/// Returns the paths of the files written.
pub(crate) fn write_outputs(
    result: &AnalysisResult,
    output: &OutputArgs,
    formatter: &Formatter,
) -> Result<Vec<PathBuf>> {
    let formats = ExportFormats {
        json: output.json,
        csv: output.csv,
    };

    let dir = output.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let written = write_exports(&dir, result, formats)?;
    for path in &written {
        eprintln!("{}", formatter.success(&format!("Saved {}", path.display())));
    }

    if output.copy {
        copy_to_clipboard(&to_clipboard_text(result)?)?;
        eprintln!("{}", formatter.success("Copied JSON to clipboard"));
    }

    Ok(written)
}
