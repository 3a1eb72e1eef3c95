//! Error types for parts-labels.
//!
//! Errors are split by blast radius: [`ConfigError`] and [`BackendError`]
//! abort a run, [`ResolveError`] and [`LabelError`] only drop one label.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a job document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },

    /// The layout identifier names no built-in template.
    #[error("unknown layout template: {name}")]
    UnknownLayout {
        /// The identifier as given.
        name: String,
    },

    /// The layout template does not fit on its page.
    #[error("invalid layout template {name}: {message}")]
    InvalidLayout {
        /// Template name.
        name: String,
        /// Which constraint failed.
        message: String,
    },
}

impl ConfigError {
    /// Whether this error came from the filesystem rather than the content.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::ReadError { .. } | Self::NotFound { .. })
    }
}

/// Errors turning one component specification into a label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The component kind is not in the taxonomy.
    #[error("unknown component kind: {kind}")]
    UnknownKind {
        /// The kind as given.
        kind: String,
    },

    /// The subtype is not valid for the kind.
    #[error("unknown {kind} subtype: {subtype}")]
    UnknownSubtype {
        /// Resolved kind.
        kind: &'static str,
        /// The subtype as given.
        subtype: String,
    },

    /// The package identifier is not in the geometry library.
    #[error("unknown package: {package}")]
    UnknownPackage {
        /// The package identifier as given.
        package: String,
    },

    /// The catalog has no definition for the selected symbol.
    #[error("symbol not in catalog: {symbol}")]
    MissingSymbol {
        /// Symbol name.
        symbol: &'static str,
    },

    /// A field the kind needs is absent.
    #[error("{kind} requires field `{field}`")]
    MissingField {
        /// Resolved kind.
        kind: &'static str,
        /// Missing field name.
        field: &'static str,
    },

    /// A field is present but unusable.
    #[error("invalid value for `{field}`: {message}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Why a label was left off the sheet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// Resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The text block cannot show even its first line.
    #[error("text does not fit the label even after truncation ({dropped_lines} lines dropped)")]
    TextOverflow {
        /// Number of lines that could not be placed.
        dropped_lines: usize,
    },
}

/// Errors producing the output document.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The sheet cannot be serialised.
    #[error("failed to serialise page {page}: {message}")]
    Serialize {
        /// One-based page number.
        page: usize,
        /// What went wrong.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write output file: {path}")]
    WriteError {
        /// Output path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Fatal errors of a whole render run.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The job document is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The output could not be produced.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/labels.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("labels.json"));
        assert!(error.is_io());
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "labels must be an array".to_string(),
        };
        assert!(error.to_string().contains("labels must be an array"));
        assert!(!error.is_io());
    }

    #[test]
    fn resolve_error_display() {
        let error = ResolveError::UnknownSubtype {
            kind: "diode",
            subtype: "laser".to_string(),
        };
        assert_eq!(error.to_string(), "unknown diode subtype: laser");

        let error = ResolveError::UnknownPackage {
            package: "DO-999".to_string(),
        };
        assert!(error.to_string().contains("DO-999"));
    }

    #[test]
    fn label_error_is_transparent_over_resolution() {
        let error: LabelError = ResolveError::UnknownKind {
            kind: "relay".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "unknown component kind: relay");
    }

    #[test]
    fn render_error_wraps_layers() {
        let error: RenderError = ConfigError::UnknownLayout {
            name: "AVERY_0000".to_string(),
        }
        .into();
        assert!(matches!(error, RenderError::Config(_)));
        assert!(error.to_string().contains("AVERY_0000"));
    }
}
