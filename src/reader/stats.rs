//! Read statistics and result structures
//!
//! Counts gathered while reading a file, returned next to the records by the
//! `*_with_stats` reader methods.

/// Records read from one file together with read statistics
#[derive(Debug, Clone)]
pub struct ReadResult<T> {
    /// Parsed records in file order
    pub records: Vec<T>,

    pub stats: ReadStats,
}

/// Simple read statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadStats {
    /// Lines in the file, header included
    pub total_lines: usize,

    /// Records successfully parsed
    pub records_parsed: usize,

    /// Blank body lines that were skipped
    pub blank_lines_skipped: usize,

    /// Records whose category label fell back to the unrecognized variant
    pub unrecognized_labels: usize,
}

impl ReadStats {
    /// Share of records with an unrecognized category label, as a percentage
    pub fn unrecognized_rate(&self) -> f64 {
        if self.records_parsed == 0 {
            0.0
        } else {
            (self.unrecognized_labels as f64 / self.records_parsed as f64) * 100.0
        }
    }
}
