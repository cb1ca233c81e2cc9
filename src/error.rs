//! Error types and handling for ocpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ocpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum OcpackError {
    // Bundle source errors
    #[error("Bundle source not found: {path}")]
    #[diagnostic(
        code(ocpack::bundle::source_not_found),
        help("Check that the path exists and points to a bundle source directory")
    )]
    BundleSourceNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(ocpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(ocpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(ocpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ocpack::fs::io_error))]
    IoError { message: String },
}

/// Creates a bundle source not found error
pub fn bundle_source_not_found(path: impl Into<String>) -> OcpackError {
    OcpackError::BundleSourceNotFound { path: path.into() }
}

/// Creates a configuration parse error
pub fn config_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> OcpackError {
    OcpackError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read error
pub fn file_read_failed(path: impl Into<String>, reason: impl Into<String>) -> OcpackError {
    OcpackError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn file_write_failed(path: impl Into<String>, reason: impl Into<String>) -> OcpackError {
    OcpackError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for OcpackError {
    fn from(err: std::io::Error) -> Self {
        OcpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for OcpackError {
    fn from(err: serde_json::Error) -> Self {
        OcpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, OcpackError>;
