//! Text and JSON export of generated variations.

use crate::techniques::StackedVariation;
use crate::variation::VariationRecord;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Errors raised while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the export file failed.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding the entries failed.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An exportable result entry.
pub trait ExportEntry {
    /// One-based position in the batch.
    fn id(&self) -> usize;

    /// Short label naming how the entry was produced.
    fn label(&self) -> String;

    /// Final prompt text.
    fn prompt(&self) -> &str;
}

impl ExportEntry for VariationRecord {
    fn id(&self) -> usize {
        self.id
    }

    fn label(&self) -> String {
        self.approach_name.to_string()
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl ExportEntry for StackedVariation {
    fn id(&self) -> usize {
        self.id
    }

    fn label(&self) -> String {
        self.technique_names.join(", ")
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Renders all entries as one plain-text document.
pub fn to_text<E: ExportEntry>(entries: &[E]) -> String {
    entries
        .iter()
        .map(|e| format!("Variation {} ({}):\n{}", e.id(), e.label(), e.prompt()))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Renders entries as pretty-printed JSON.
pub fn to_json<T: Serialize>(entries: &[T]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Timestamped export file name.
pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("quantum_prompts_{}.txt", at.format("%Y%m%d_%H%M%S"))
}

/// Writes the text export into `dir`, returning the file path.
pub fn write_text<E: ExportEntry>(dir: &Path, entries: &[E]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(Local::now()));
    std::fs::write(&path, to_text(entries))?;

    tracing::info!(path = %path.display(), entries = entries.len(), "Exported variations");
    Ok(path)
}
