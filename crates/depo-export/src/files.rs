//! Writing export files to disk

use crate::{to_csv, to_json, ExportError};
use depo_domain::AnalysisResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the JSON export
pub const JSON_FILE_NAME: &str = "transcript_analysis.json";

/// File name of the CSV export
pub const CSV_FILE_NAME: &str = "transcript_analysis.csv";

/// Which export files to write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportFormats {
    /// Write `transcript_analysis.json`
    pub json: bool,
    /// Write `transcript_analysis.csv`
    pub csv: bool,
}

impl ExportFormats {
    /// Both formats
    pub fn all() -> Self {
        Self {
            json: true,
            csv: true,
        }
    }

    /// True when no format is selected
    pub fn is_empty(&self) -> bool {
        !self.json && !self.csv
    }
}

/// Write the selected exports into `dir`, creating it if needed
///
/// Existing files with the same names are overwritten. Returns the paths
/// written, JSON first.
pub fn write_exports(
    dir: &Path,
    result: &AnalysisResult,
    formats: ExportFormats,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();
    if formats.is_empty() {
        return Ok(written);
    }

    fs::create_dir_all(dir)?;

    if formats.json {
        let path = dir.join(JSON_FILE_NAME);
        fs::write(&path, to_json(result)?)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    if formats.csv {
        let path = dir.join(CSV_FILE_NAME);
        fs::write(&path, to_csv(result))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
