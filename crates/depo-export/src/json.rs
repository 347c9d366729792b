//! JSON and clipboard text

use crate::ExportError;
use depo_domain::AnalysisResult;

/// Serialize a result as indented JSON
pub fn to_json(result: &AnalysisResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Text placed on the clipboard; identical to [`to_json`]
pub fn to_clipboard_text(result: &AnalysisResult) -> Result<String, ExportError> {
    to_json(result)
}

/// Parse JSON produced by [`to_json`] back into a result
pub fn from_json(text: &str) -> Result<AnalysisResult, ExportError> {
    Ok(serde_json::from_str(text)?)
}
