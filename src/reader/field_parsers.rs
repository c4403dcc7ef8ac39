//! Field parsing utilities for delimited rows
//!
//! A [`Row`] is one body line split into positional fields by the `csv`
//! crate. Accessors report failures as [`ReaderError::MalformedRecord`] with
//! the file and line number.

use crate::error::{ReaderError, Result};
use csv::StringRecord;
use std::path::Path;

/// Split a single line into fields on `delimiter`
///
/// Quotes carry no meaning and rows may have any number of fields. An empty
/// line gives an empty record.
pub fn split_record(text: &str, delimiter: u8) -> csv::Result<StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

/// One body line split into positional fields
#[derive(Debug)]
pub struct Row<'a> {
    path: &'a Path,
    line: usize,
    record: StringRecord,
}

impl<'a> Row<'a> {
    /// Split `text` on `delimiter`, requiring at least `min_fields` fields
    pub fn split(
        path: &'a Path,
        line: usize,
        text: &str,
        delimiter: u8,
        min_fields: usize,
    ) -> Result<Self> {
        let record = split_record(text, delimiter).map_err(|e| {
            ReaderError::malformed_record(path, line, format!("cannot split row: {e}"))
        })?;

        if record.len() < min_fields {
            return Err(ReaderError::malformed_record(
                path,
                line,
                format!(
                    "expected at least {} fields, found {}",
                    min_fields,
                    record.len()
                ),
            ));
        }

        Ok(Self { path, line, record })
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.record.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Raw field value at `index`
    pub fn field(&self, index: usize) -> Result<&str> {
        self.record.get(index).ok_or_else(|| {
            ReaderError::malformed_record(
                self.path,
                self.line,
                format!("no field at position {index}"),
            )
        })
    }

    /// Field value at `index` as an owned string
    pub fn string(&self, index: usize) -> Result<String> {
        self.field(index).map(str::to_string)
    }

    /// Field value at `index` parsed as an integer
    pub fn integer(&self, index: usize, field_name: &str) -> Result<i32> {
        let value = self.field(index)?;
        parse_integer(value).map_err(|reason| {
            ReaderError::malformed_record(
                self.path,
                self.line,
                format!("invalid {field_name} '{value}': {reason}"),
            )
        })
    }

    /// Field value at `index` parsed as a decimal-comma number
    pub fn decimal(&self, index: usize, field_name: &str) -> Result<f64> {
        let value = self.field(index)?;
        parse_decimal_comma(value).map_err(|reason| {
            ReaderError::malformed_record(
                self.path,
                self.line,
                format!("invalid {field_name} '{value}': {reason}"),
            )
        })
    }
}

/// Parse an integer, ignoring surrounding whitespace
pub fn parse_integer(value: &str) -> std::result::Result<i32, std::num::ParseIntError> {
    value.trim().parse::<i32>()
}

/// Parse a number written with a decimal comma, e.g. `"12,5"`
pub fn parse_decimal_comma(value: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    value.trim().replace(',', ".").parse::<f64>()
}
