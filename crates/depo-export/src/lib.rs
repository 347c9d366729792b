//! Depo Export
//!
//! Deterministic serializations of an [`AnalysisResult`]:
//!
//! - [`to_json`]: pretty-printed JSON, field order matching the data model
//! - [`to_csv`]: three labeled sections in a fixed order
//! - [`to_clipboard_text`]: same text as [`to_json`]
//!
//! All three are total over any result, including one with every section
//! empty.

#![warn(missing_docs)]

mod csv;
mod files;
mod json;

use thiserror::Error;

pub use csv::{quote_field, to_csv, EXHIBIT_COLUMNS, KEY_FACT_COLUMNS, OBJECTION_COLUMNS};
pub use files::{write_exports, ExportFormats, CSV_FILE_NAME, JSON_FILE_NAME};
pub use json::{from_json, to_clipboard_text, to_json};

#[doc(no_inline)]
pub use depo_domain::AnalysisResult;

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while writing an export file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
