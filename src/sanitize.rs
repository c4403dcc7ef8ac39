//! Delimiter sanitizing for ragged rows
//!
//! Container inventory files leave optional fields empty, which shows up as two
//! adjacent delimiters or a trailing delimiter. Filling those gaps with an
//! explicit placeholder keeps every row positionally indexable.

use crate::constants::MISSING_FIELD_PLACEHOLDER;

/// Insert a placeholder into every empty field of `line`
///
/// Every pair of adjacent delimiters gets [`MISSING_FIELD_PLACEHOLDER`] between
/// them, and a trailing delimiter gets one appended. A leading empty field is
/// left alone. An empty delimiter returns the line unchanged.
///
/// ```rust
/// use waste_records::sanitize::sanitize_doubled_delimiters;
///
/// assert_eq!(sanitize_doubled_delimiters(";a;;b;", ";"), ";a;N/A;b;N/A");
/// ```
pub fn sanitize_doubled_delimiters(line: &str, delimiter: &str) -> String {
    if delimiter.is_empty() {
        return line.to_string();
    }

    let doubled = delimiter.repeat(2);
    let mut result = line.to_string();
    let mut cursor = 0;

    // The cursor always moves past the inserted placeholder, so each pass
    // consumes at least one delimiter of the input text.
    while let Some(offset) = result[cursor..].find(&doubled) {
        let insert_at = cursor + offset + delimiter.len();
        result.insert_str(insert_at, MISSING_FIELD_PLACEHOLDER);
        cursor = insert_at + MISSING_FIELD_PLACEHOLDER.len();
    }

    if result.ends_with(delimiter) {
        result.push_str(MISSING_FIELD_PLACEHOLDER);
    }

    result
}
