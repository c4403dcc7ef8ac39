//! Delimited record reader for waste and container files
//!
//! This module turns delimited text files into typed records. It is organized
//! into logical components:
//! - [`validation`] - file precondition checks and line loading
//! - [`field_parsers`] - positional field access and numeric parsing
//! - [`stats`] - read statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use waste_records::reader::DelimitedRecordReader;
//! use waste_records::config::ReaderConfig;
//!
//! # fn example() -> waste_records::Result<()> {
//! let reader = DelimitedRecordReader::new(ReaderConfig::default())?;
//! let records = reader.read_waste_records("data/residuos.csv")?;
//!
//! println!("Read {} waste records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use stats::{ReadResult, ReadStats};

use self::field_parsers::Row;
use self::validation::{FileCheck, LoadedFile};
use crate::config::ReaderConfig;
use crate::constants::{WASTE_HEADER, container_fields, waste_fields};
use crate::error::Result;
use crate::models::{ContainerRecord, ContainerType, WasteRecord, WasteType};
use crate::sanitize::sanitize_doubled_delimiters;
use std::path::Path;
use tracing::{info, warn};

/// Reader for waste tonnage and container inventory files
#[derive(Debug, Clone)]
pub struct DelimitedRecordReader {
    config: ReaderConfig,
    delimiter: u8,
    container_split: u8,
}

impl DelimitedRecordReader {
    /// Create a reader from a validated configuration
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            delimiter: config.delimiter_byte()?,
            container_split: config.container_split_byte()?,
            config,
        })
    }

    /// Create a reader using the default configuration with `delimiter`
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self> {
        Self::new(ReaderConfig::default().with_delimiter(delimiter))
    }

    /// Read all waste records from `path` in file order
    pub fn read_waste_records(&self, path: impl AsRef<Path>) -> Result<Vec<WasteRecord>> {
        self.read_waste_records_with_stats(path)
            .map(|result| result.records)
    }

    /// Read all waste records from `path` together with read statistics
    pub fn read_waste_records_with_stats(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ReadResult<WasteRecord>> {
        let path = path.as_ref();
        info!("Reading waste records from {}", path.display());

        let check = FileCheck {
            policy: self.config.waste_validation,
            expected_extension: &self.config.expected_extension,
            expected_header: Some(WASTE_HEADER),
            delimiter: self.delimiter,
            skip_blank_lines: self.config.skip_blank_lines,
        };
        let loaded = check.load(path)?;
        let mut stats = initial_stats(&loaded);

        let mut records = Vec::with_capacity(loaded.body.len());
        for line in &loaded.body {
            let row = Row::split(
                path,
                line.number,
                &line.text,
                self.delimiter,
                waste_fields::COUNT,
            )?;
            let record = parse_waste_row(&row)?;

            if !record.waste_type.is_recognized() {
                warn!(
                    "Unrecognized waste type '{}' at {}:{}",
                    row.field(waste_fields::WASTE_TYPE)?,
                    path.display(),
                    line.number
                );
                stats.unrecognized_labels += 1;
            }
            records.push(record);
        }

        stats.records_parsed = records.len();
        info!(
            "Read {} waste records from {} ({} unrecognized waste types)",
            stats.records_parsed,
            path.display(),
            stats.unrecognized_labels
        );

        Ok(ReadResult { records, stats })
    }

    /// Read all container records from `path` in file order
    pub fn read_container_records(&self, path: impl AsRef<Path>) -> Result<Vec<ContainerRecord>> {
        self.read_container_records_with_stats(path)
            .map(|result| result.records)
    }

    /// Read all container records from `path` together with read statistics
    ///
    /// Each line is sanitized with the configured delimiter and then split on
    /// the container split delimiter, which stays `;` unless configured.
    pub fn read_container_records_with_stats(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ReadResult<ContainerRecord>> {
        let path = path.as_ref();
        info!("Reading container records from {}", path.display());
        self.config.validate_sanitizer_delimiter()?;

        let check = FileCheck {
            policy: self.config.container_validation,
            expected_extension: &self.config.expected_extension,
            expected_header: None,
            delimiter: self.delimiter,
            skip_blank_lines: self.config.skip_blank_lines,
        };
        let loaded = check.load(path)?;
        let mut stats = initial_stats(&loaded);

        let mut records = Vec::with_capacity(loaded.body.len());
        for line in &loaded.body {
            let sanitized = sanitize_doubled_delimiters(&line.text, &self.config.delimiter);
            let row = Row::split(
                path,
                line.number,
                &sanitized,
                self.container_split,
                container_fields::COUNT,
            )?;
            let record = parse_container_row(&row)?;

            if !record.container_type.is_recognized() {
                warn!(
                    "Unknown container type '{}' at {}:{}",
                    row.field(container_fields::CONTAINER_TYPE)?,
                    path.display(),
                    line.number
                );
                stats.unrecognized_labels += 1;
            }
            records.push(record);
        }

        stats.records_parsed = records.len();
        info!(
            "Read {} container records from {}",
            stats.records_parsed,
            path.display()
        );

        Ok(ReadResult { records, stats })
    }
}

/// Read waste records from `path` using the default configuration with `delimiter`
pub fn read_waste_records(path: impl AsRef<Path>, delimiter: &str) -> Result<Vec<WasteRecord>> {
    DelimitedRecordReader::with_delimiter(delimiter)?.read_waste_records(path)
}

/// Read container records from `path` using the default configuration with `delimiter`
pub fn read_container_records(
    path: impl AsRef<Path>,
    delimiter: &str,
) -> Result<Vec<ContainerRecord>> {
    DelimitedRecordReader::with_delimiter(delimiter)?.read_container_records(path)
}

fn initial_stats(loaded: &LoadedFile) -> ReadStats {
    ReadStats {
        total_lines: loaded.total_lines,
        blank_lines_skipped: loaded.blank_lines_skipped,
        ..ReadStats::default()
    }
}

/// Build a waste record from a row with at least seven fields
fn parse_waste_row(row: &Row<'_>) -> Result<WasteRecord> {
    Ok(WasteRecord {
        year: row.string(waste_fields::YEAR)?,
        month: row.string(waste_fields::MONTH)?,
        batch_id: row.integer(waste_fields::BATCH, "batch")?,
        waste_type: WasteType::from(row.field(waste_fields::WASTE_TYPE)?),
        district_id: row.integer(waste_fields::DISTRICT_ID, "district id")?,
        district_name: row.string(waste_fields::DISTRICT_NAME)?,
        tonnage: row.decimal(waste_fields::TONNAGE, "tonnage")?,
    })
}

/// Build a container record from a row with at least sixteen fields
fn parse_container_row(row: &Row<'_>) -> Result<ContainerRecord> {
    Ok(ContainerRecord {
        site_code: row.string(container_fields::SITE_CODE)?,
        container_type: ContainerType::from(row.field(container_fields::CONTAINER_TYPE)?),
        model: row.string(container_fields::MODEL)?,
        model_description: row.string(container_fields::MODEL_DESCRIPTION)?,
        quantity: row.integer(container_fields::QUANTITY, "quantity")?,
        batch_id: row.integer(container_fields::BATCH, "batch")?,
        district: row.string(container_fields::DISTRICT)?,
        neighborhood: row.string(container_fields::NEIGHBORHOOD)?,
        street_type: row.string(container_fields::STREET_TYPE)?,
        street_name: row.string(container_fields::STREET_NAME)?,
        street_number: row.string(container_fields::STREET_NUMBER)?,
        address: row.string(container_fields::ADDRESS)?,
    })
}
