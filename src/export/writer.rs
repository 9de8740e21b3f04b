//! Export file output
//!
//! One record per file, named after the variant and the record timestamp.

use super::record::ExportRecord;
use crate::session::Variant;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV results: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write `record` into `dir` (created if missing) and return the file path
pub fn write_record(
    dir: &Path,
    variant: Variant,
    record: &ExportRecord,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;

    let file_name = format!(
        "results_{}_{}.{}",
        variant.slug(),
        record.timestamp.format("%Y%m%d_%H%M%S"),
        format.extension()
    );
    let path = dir.join(file_name);

    match format {
        ExportFormat::Csv => {
            // Header row comes from the record's field names
            let mut writer = csv::Writer::from_path(&path)?;
            writer.serialize(record)?;
            writer.flush()?;
        }
        ExportFormat::Json => fs::write(&path, serde_json::to_string_pretty(record)?)?,
    }

    info!(path = %path.display(), "results exported");
    Ok(path)
}
