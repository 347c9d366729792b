//! Input documents and their declared media types

use crate::IngestError;
use std::fmt;
use std::path::Path;

/// Declared type of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `application/pdf`
    Pdf,
    /// `text/plain`
    PlainText,
}

impl MediaType {
    /// MIME string for this type
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::PlainText => "text/plain",
        }
    }

    /// Parse a MIME type, ignoring parameters such as `charset`
    pub fn from_mime(mime: &str) -> Result<Self, IngestError> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "application/pdf" => Ok(MediaType::Pdf),
            "text/plain" => Ok(MediaType::PlainText),
            _ => Err(IngestError::UnsupportedMediaType(mime.to_string())),
        }
    }

    /// Infer the type from a file extension (`.pdf` or `.txt`)
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Ok(MediaType::Pdf),
            "txt" => Ok(MediaType::PlainText),
            _ => Err(IngestError::UnsupportedMediaType(format!(
                "{} (extension '.{}')",
                path.display(),
                ext
            ))),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Raw document bytes plus their declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    bytes: Vec<u8>,
    media_type: MediaType,
}

impl InputDocument {
    /// Wrap bytes with a declared type
    pub fn new(bytes: impl Into<Vec<u8>>, media_type: MediaType) -> Self {
        Self {
            bytes: bytes.into(),
            media_type,
        }
    }

    /// Read a file, inferring its type from the extension unless one is given
    pub async fn read(path: &Path, media_type: Option<MediaType>) -> Result<Self, IngestError> {
        let media_type = match media_type {
            Some(media_type) => media_type,
            None => MediaType::from_path(path)?,
        };
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { bytes, media_type })
    }

    /// Raw content
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared type
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Size in bytes
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// True for a zero-byte document
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
