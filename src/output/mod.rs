//! Output of a generation run
//!
//! This module provides:
//! - Writing the repository document as indented JSON
//! - Human-readable run summary for the terminal

mod text;

pub use text::SummaryFormatter;

use crate::domain::RepositoryDocument;
use crate::error::OutputError;
use std::fs;
use std::path::Path;

/// Serialize a document with 2-space indentation
pub fn to_json(document: &RepositoryDocument) -> Result<String, OutputError> {
    serde_json::to_string_pretty(document).map_err(|source| OutputError::SerializeError { source })
}

/// Write the document to `path`, creating parent directories and
/// overwriting any existing file
pub fn write_document(document: &RepositoryDocument, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDirError {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = to_json(document)?;
    fs::write(path, json).map_err(|e| OutputError::write_error(path, e))?;
    log::info!("Wrote {} app(s) to {}", document.apps.len(), path.display());

    Ok(())
}
