//! Configuration management and validation.
//!
//! Holds the delimiters, file conventions and per-record-shape validation
//! policies used by [`DelimitedRecordReader`](crate::reader::DelimitedRecordReader).

use crate::constants::{
    CONTAINER_SPLIT_DELIMITER, DEFAULT_DELIMITER, EXPECTED_EXTENSION, MISSING_FIELD_PLACEHOLDER,
};
use crate::error::{ReaderError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How much checking a file gets before its rows are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// Existence, readability, extension, header presence, header shape
    /// (when the record shape defines one) and a non-empty body
    Strict,
    /// Only that the file exists
    ExistenceOnly,
}

/// Reader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Field delimiter for waste files and for the container sanitizing pass
    pub delimiter: String,

    /// Required file name suffix under [`ValidationPolicy::Strict`]
    pub expected_extension: String,

    /// Delimiter container rows are split on after sanitizing
    pub container_split_delimiter: String,

    /// Validation applied to waste record files
    pub waste_validation: ValidationPolicy,

    /// Validation applied to container record files
    pub container_validation: ValidationPolicy,

    /// Skip body lines that are empty or whitespace only
    pub skip_blank_lines: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            expected_extension: EXPECTED_EXTENSION.to_string(),
            container_split_delimiter: CONTAINER_SPLIT_DELIMITER.to_string(),
            waste_validation: ValidationPolicy::Strict,
            container_validation: ValidationPolicy::ExistenceOnly,
            skip_blank_lines: true,
        }
    }
}

impl ReaderConfig {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the required file extension
    pub fn with_expected_extension(mut self, extension: impl Into<String>) -> Self {
        self.expected_extension = extension.into();
        self
    }

    /// Set the delimiter container rows are split on
    pub fn with_container_split_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.container_split_delimiter = delimiter.into();
        self
    }

    /// Set the validation policy for waste files
    pub fn with_waste_validation(mut self, policy: ValidationPolicy) -> Self {
        self.waste_validation = policy;
        self
    }

    /// Set the validation policy for container files
    pub fn with_container_validation(mut self, policy: ValidationPolicy) -> Self {
        self.container_validation = policy;
        self
    }

    /// Treat blank body lines as rows instead of skipping them
    pub fn keeping_blank_lines(mut self) -> Self {
        self.skip_blank_lines = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(ReaderError::configuration("Field delimiter cannot be empty"));
        }

        if self.container_split_delimiter.is_empty() {
            return Err(ReaderError::configuration(
                "Container split delimiter cannot be empty",
            ));
        }

        if self.delimiter.contains('\n') || self.delimiter.contains('\r') {
            return Err(ReaderError::configuration(
                "Field delimiter cannot contain line breaks",
            ));
        }

        self.delimiter_byte()?;
        self.container_split_byte()?;

        debug!("Validated reader configuration: {:?}", self);
        Ok(())
    }

    /// Check that the delimiter can be used to fill empty container fields
    ///
    /// A delimiter that occurs inside [`MISSING_FIELD_PLACEHOLDER`] would make
    /// the inserted placeholder form new empty fields.
    pub fn validate_sanitizer_delimiter(&self) -> Result<()> {
        if MISSING_FIELD_PLACEHOLDER.contains(self.delimiter.as_str()) {
            return Err(ReaderError::configuration(format!(
                "Field delimiter '{}' overlaps the missing field placeholder '{}'",
                self.delimiter, MISSING_FIELD_PLACEHOLDER
            )));
        }
        Ok(())
    }

    /// Field delimiter as the single byte rows are split on
    pub fn delimiter_byte(&self) -> Result<u8> {
        single_byte(&self.delimiter, "Field delimiter")
    }

    /// Container split delimiter as a single byte
    pub fn container_split_byte(&self) -> Result<u8> {
        single_byte(&self.container_split_delimiter, "Container split delimiter")
    }
}

fn single_byte(delimiter: &str, name: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(ReaderError::configuration(format!(
            "{name} '{delimiter}' must be a single ASCII character"
        ))),
    }
}
