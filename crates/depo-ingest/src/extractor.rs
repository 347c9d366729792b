//! Document-to-text extraction

use crate::{pdf, IngestError, InputDocument, MediaType};
use tracing::{debug, info};

/// Converts an input document into a single text blob
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract text, running PDF parsing on the blocking thread pool
    pub async fn extract(&self, document: InputDocument) -> Result<String, IngestError> {
        match document.media_type() {
            MediaType::PlainText => self.extract_blocking(&document),
            MediaType::Pdf => {
                let extractor = *self;
                tokio::task::spawn_blocking(move || extractor.extract_blocking(&document))
                    .await
                    .map_err(|e| IngestError::Task(e.to_string()))?
            }
        }
    }

    /// Extract text on the current thread
    pub fn extract_blocking(&self, document: &InputDocument) -> Result<String, IngestError> {
        let text = match document.media_type() {
            MediaType::PlainText => {
                debug!("Reading plain-text transcript ({} bytes)", document.len());
                String::from_utf8(document.bytes().to_vec())?
            }
            MediaType::Pdf => {
                info!("Extracting text from PDF ({} bytes)", document.len());
                pdf::extract_text(document.bytes())?
            }
        };

        debug!("Extracted {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_is_verbatim() {
        let raw = "  Q. State your name.\r\n  A. John \"Jack\" Doe.\n\n\t";
        let document = InputDocument::new(raw.as_bytes(), MediaType::PlainText);
        let text = TextExtractor::new().extract(document).await.unwrap();
        assert_eq!(text, raw);
    }

    #[tokio::test]
    async fn test_plain_text_whitespace_is_not_rejected_here() {
        let document = InputDocument::new("   \n", MediaType::PlainText);
        let text = TextExtractor::new().extract(document).await.unwrap();
        assert_eq!(text, "   \n");
    }

    #[tokio::test]
    async fn test_plain_text_invalid_utf8() {
        let document = InputDocument::new(vec![0x51, 0xff, 0xfe], MediaType::PlainText);
        let result = TextExtractor::new().extract(document).await;
        assert!(matches!(result, Err(IngestError::InvalidText(_))));
    }

    #[tokio::test]
    async fn test_plain_text_bytes_declared_as_pdf_fail() {
        let document = InputDocument::new("Q. Hello?", MediaType::Pdf);
        let result = TextExtractor::new().extract(document).await;
        assert!(matches!(result, Err(IngestError::InvalidPdf(_))));
    }
}
