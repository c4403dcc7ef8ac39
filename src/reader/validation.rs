//! File precondition checks and line loading
//!
//! Checks run in a fixed order so the first violated precondition is the one
//! reported: existence, readability, extension, header presence, header shape
//! and finally a non-empty body.

use crate::config::ValidationPolicy;
use crate::constants::UTF8_BOM;
use crate::error::{ReaderError, Result};
use crate::header::verify_header;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// A body line together with its 1-based line number in the file
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLine {
    pub number: usize,
    pub text: String,
}

/// Body lines of a file that passed its checks
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub body: Vec<BodyLine>,
    /// Total number of lines in the file, header included
    pub total_lines: usize,
    pub blank_lines_skipped: usize,
}

/// Requirements a file must meet before its rows are parsed
#[derive(Debug, Clone, Copy)]
pub struct FileCheck<'a> {
    pub policy: ValidationPolicy,
    pub expected_extension: &'a str,
    /// Header columns to verify, `None` when the record shape has no fixed header
    pub expected_header: Option<&'a [&'a str]>,
    /// Delimiter the header is split on
    pub delimiter: u8,
    pub skip_blank_lines: bool,
}

impl FileCheck<'_> {
    /// Run the checks for `path` and load its lines
    pub fn load(&self, path: &Path) -> Result<LoadedFile> {
        check_exists(path)?;

        let content = match self.policy {
            ValidationPolicy::Strict => {
                let file = open_readable(path)?;
                check_extension(path, self.expected_extension)?;
                read_content(path, file)?
            }
            ValidationPolicy::ExistenceOnly => {
                let file = File::open(path).map_err(|source| ReaderError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                read_content(path, file)?
            }
        };

        let mut lines = content.lines();
        let header = lines.next();

        if self.policy == ValidationPolicy::Strict {
            let Some(header_line) = header else {
                return Err(ReaderError::MissingHeader {
                    path: path.to_path_buf(),
                });
            };

            if let Some(expected) = self.expected_header {
                verify_header(path, header_line, self.delimiter, expected)?;
            }
        }

        let mut body = Vec::new();
        let mut blank_lines_skipped = 0;
        // Line 1 is the header
        for (index, text) in lines.enumerate() {
            if self.skip_blank_lines && text.trim().is_empty() {
                blank_lines_skipped += 1;
                continue;
            }
            body.push(BodyLine {
                number: index + 2,
                text: text.to_string(),
            });
        }

        if self.policy == ValidationPolicy::Strict && body.is_empty() {
            return Err(ReaderError::EmptyBody {
                path: path.to_path_buf(),
            });
        }

        let total_lines = usize::from(header.is_some()) + body.len() + blank_lines_skipped;
        debug!(
            "Loaded {}: {} body lines, {} blank lines skipped",
            path.display(),
            body.len(),
            blank_lines_skipped
        );

        Ok(LoadedFile {
            body,
            total_lines,
            blank_lines_skipped,
        })
    }
}

/// Fail with [`ReaderError::FileNotFound`] when nothing exists at `path`
pub fn check_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReaderError::file_not_found(path));
    }
    Ok(())
}

/// Open `path` for reading, reporting failures as [`ReaderError::Unreadable`]
///
/// Directories and other non-regular files are unreadable even when the
/// platform lets them be opened.
pub fn open_readable(path: &Path) -> Result<File> {
    let unreadable = |source: io::Error| ReaderError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    if !file.metadata().map_err(unreadable)?.is_file() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(file)
}

/// Fail with [`ReaderError::InvalidExtension`] unless the file name ends in `expected`
pub fn check_extension(path: &Path, expected: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    if !file_name.ends_with(expected) {
        return Err(ReaderError::InvalidExtension {
            path: path.to_path_buf(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}

/// Read the whole file, replacing invalid UTF-8 and dropping a leading BOM
fn read_content(path: &Path, mut file: File) -> Result<String> {
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| ReaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let content = String::from_utf8_lossy(&bytes);
    Ok(content.trim_start_matches(UTF8_BOM).to_string())
}
