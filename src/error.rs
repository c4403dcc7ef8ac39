//! Error handling for waste record reading.
//!
//! Every precondition failure is a distinct variant carrying the offending
//! path, so callers can decide how to react. The CLI maps variants to process
//! exit codes through [`ReaderError::exit_code`].

use crate::constants::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("File {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File {} cannot be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {} is not a {expected} file", .path.display())]
    InvalidExtension { path: PathBuf, expected: String },

    #[error("File {} is empty. Use a valid CSV file", .path.display())]
    MissingHeader { path: PathBuf },

    #[error(
        "File {} has an incorrect format: expected header [{}], found [{}]",
        .path.display(),
        .expected.join(", "),
        .found.join(", ")
    )]
    HeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("File {}'s content is empty. Use a valid CSV file", .path.display())]
    EmptyBody { path: PathBuf },

    #[error("Malformed record in file {} at line {line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ReaderError {
    /// Create a file not found error
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a malformed record error for a 1-based line number
    pub fn malformed_record(path: impl AsRef<Path>, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.as_ref().to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Process exit code the CLI reports for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ReaderError::InvalidExtension { .. } => exit_codes::INVALID_EXTENSION,
            ReaderError::Unreadable { .. } => exit_codes::UNREADABLE,
            ReaderError::FileNotFound { .. } => exit_codes::FILE_NOT_FOUND,
            ReaderError::MissingHeader { .. } => exit_codes::MISSING_HEADER,
            ReaderError::HeaderMismatch { .. } => exit_codes::HEADER_MISMATCH,
            ReaderError::EmptyBody { .. } => exit_codes::EMPTY_BODY,
            ReaderError::MalformedRecord { .. }
            | ReaderError::Io { .. }
            | ReaderError::Configuration { .. } => exit_codes::GENERAL_FAILURE,
        }
    }

    /// Whether this error is one of the file precondition failures
    pub fn is_precondition_failure(&self) -> bool {
        self.exit_code() != exit_codes::GENERAL_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, ReaderError>;
