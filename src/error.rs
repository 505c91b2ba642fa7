//! Error types for outline extraction

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::path::PathError;

/// Errors that abort an extraction run
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed SVG document: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed SVG document: {reason}")]
    MalformedDocument { reason: String },

    #[error("path '{label}' has no path data")]
    MissingPathData { label: String },

    #[error("outline '{label}': {source}")]
    Path {
        label: String,
        /// The path data the error spans point into
        data: String,
        source: PathError,
    },

    #[error("duplicate outline label '{label}'")]
    DuplicateLabel { label: String },

    #[error("label '{label}' is not a valid C identifier")]
    InvalidLabel { label: String },

    #[error("label '{label}' generates '{identifier}', which the generated code reserves")]
    ReservedLabel { label: String, identifier: String },

    #[error("labels '{first}' and '{second}' both generate identifier '{identifier}'")]
    IdentifierClash {
        first: String,
        second: String,
        identifier: String,
    },

    #[error("'{}' is out of date", path.display())]
    OutOfDate { path: PathBuf },

    #[error("failed to load config '{}': {source}", path.display())]
    Config { path: PathBuf, source: ConfigError },
}

impl ExtractError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Format the error for the terminal
    ///
    /// Path data errors are rendered with the offending data underlined.
    pub fn format(&self) -> String {
        match self {
            ExtractError::Path {
                label,
                data,
                source,
            } => source.format(data, label),
            other => format!("Error: {}", other),
        }
    }
}
