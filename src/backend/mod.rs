//! Output backends.
//!
//! A backend turns a finished [`Sheet`] into document bytes. The sheet is
//! fully laid out in points with a top-left origin; backends handle any
//! coordinate flip their format needs.

pub mod pdf;

pub use pdf::PdfBackend;

use std::path::Path;

use tracing::info;

use crate::error::BackendError;
use crate::layout::Sheet;

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title.
    pub title: String,
    /// Producing application.
    pub producer: String,
}

impl DocumentInfo {
    /// Metadata with `title` and this crate as producer.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            producer: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Serialises a sheet to a document format.
pub trait SheetBackend {
    /// Serialises every page of `sheet` in order.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Serialize`] when a page cannot be encoded.
    fn write_sheet(&self, sheet: &Sheet, info: &DocumentInfo) -> Result<Vec<u8>, BackendError>;
}

/// Writes document bytes to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`BackendError::WriteError`] if the directory or file cannot be
/// written.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), BackendError> {
    let write_error = |source| BackendError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, bytes).map_err(write_error)?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote document");
    Ok(())
}
