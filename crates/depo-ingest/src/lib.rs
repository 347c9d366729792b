//! Depo Ingest
//!
//! Turns an input document (PDF or plain text) into one normalized text blob.
//!
//! # Architecture
//!
//! ```text
//! bytes + MediaType → TextExtractor → text
//!                      ├─ PlainText: UTF-8 decode, unmodified
//!                      └─ Pdf: pages 1..=N, fragments joined by " ",
//!                              each page followed by a blank line
//! ```
//!
//! Extraction is all-or-nothing: any page failure aborts the whole document.
//! Rejecting blank output is the consumer's job, not this crate's.

#![warn(missing_docs)]

mod document;
mod extractor;
pub mod pdf;
mod policy;

use thiserror::Error;

pub use document::{InputDocument, MediaType};
pub use extractor::TextExtractor;
pub use policy::{InputPolicy, DEFAULT_MAX_BYTES, DEFAULT_WARN_BYTES};

/// Errors that can occur while reading or extracting a document
#[derive(Error, Debug)]
pub enum IngestError {
    /// Declared type is neither PDF nor plain text
    #[error("Unsupported media type '{0}'. Please provide a PDF or TXT file.")]
    UnsupportedMediaType(String),

    /// Document exceeds the caller's hard size limit
    #[error("File size exceeds the {limit}-byte limit (file is {size} bytes)")]
    TooLarge {
        /// Document size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// I/O error while reading the document
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes could not be parsed as a PDF
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// Text retrieval failed for one page
    #[error("Failed to extract text from page {page}: {reason}")]
    Page {
        /// 1-based page number
        page: u32,
        /// Underlying failure
        reason: String,
    },

    /// Plain-text document is not valid UTF-8
    #[error("Text document is not valid UTF-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// Background extraction task panicked or was cancelled
    #[error("Extraction task failed: {0}")]
    Task(String),
}
