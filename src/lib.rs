//! Waste Records Library
//!
//! A Rust library for reading municipal waste collection data from delimited
//! text files into strongly-typed records.
//!
//! This library provides tools for:
//! - Verifying file preconditions (existence, readability, extension, header, body)
//! - Parsing waste tonnage rows with decimal-comma numbers
//! - Parsing container inventory rows with empty fields filled by a placeholder
//! - Mapping categorical labels into closed enumerations with explicit fallbacks
//! - Reporting every failure as a typed error with a process exit code

pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod models;
pub mod reader;
pub mod sanitize;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ReaderConfig, ValidationPolicy};
pub use error::{ReaderError, Result};
pub use models::{ContainerRecord, ContainerType, WasteRecord, WasteType};
pub use reader::{DelimitedRecordReader, read_container_records, read_waste_records};
pub use sanitize::sanitize_doubled_delimiters;
