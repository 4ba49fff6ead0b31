//! Collapses a raw book transcription into one logical line per record.
//!
//! Transcriptions wrap long descriptions over several physical lines.
//! Only lines starting a person record (`..3 John Smith`) or a spouse
//! record (`  + Mary Jones`) begin a new logical line; every other line is
//! appended to the current one, separated by a single space.

use crate::book::defs::{PERSON_RECORD_START, SPOUSE_RECORD_START};
use tracing::{debug, warn};

/// Classification of a physical line of a raw transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a person record (`^\.*[0-9]+`)
    PersonRecord,
    /// Starts a spouse record (`^[.\s]*\+`)
    SpouseRecord,
    /// Continues the description of the current record
    Continuation,
}

/// Classifies a physical line by its leading characters.
///
/// # Examples
/// ```
/// use genbook::book::{LineKind, classify_line};
///
/// assert_eq!(classify_line("..2 John Smith"), LineKind::PersonRecord);
/// assert_eq!(classify_line(" . + Mary Jones"), LineKind::SpouseRecord);
/// assert_eq!(classify_line("moved to Ohio in 1850"), LineKind::Continuation);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    if PERSON_RECORD_START.is_match(line) {
        LineKind::PersonRecord
    } else if SPOUSE_RECORD_START.is_match(line) {
        LineKind::SpouseRecord
    } else {
        LineKind::Continuation
    }
}

/// Normalizes physical lines into logical lines, one per person or spouse record.
///
/// - Record lines are kept with trailing whitespace removed.
/// - Continuation lines are trimmed and appended to the current record,
///   separated by a single space; blank ones are skipped.
/// - Continuation text before the first record has nothing to attach to
///   and is discarded with a warning.
///
/// # Arguments
/// * `lines` - Physical lines of the raw transcription
///
/// # Returns
/// Logical lines in document order
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        match classify_line(line) {
            LineKind::PersonRecord | LineKind::SpouseRecord => {
                records.push(line.trim_end().to_string());
            }
            LineKind::Continuation => {
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                match records.last_mut() {
                    Some(record) => {
                        record.push(' ');
                        record.push_str(text);
                    }
                    None => warn!(text, "discarding text before first record"),
                }
            }
        }
    }

    debug!(records = records.len(), "normalized transcription");
    records
}

/// Normalizes a raw transcription given as a single string.
///
/// # Example
/// ```
/// use genbook::book::normalize_str;
///
/// let raw = "1 John Smith b: 1800\nfarmer in\n  Ohio\n+ Mary Jones\n.2 Ann Smith";
/// assert_eq!(
///     normalize_str(raw),
///     vec!["1 John Smith b: 1800 farmer in Ohio", "+ Mary Jones", ".2 Ann Smith"]
/// );
/// ```
pub fn normalize_str(raw: &str) -> Vec<String> {
    normalize_lines(raw.lines())
}

/// Joins logical lines into the cleaned transcription text, one record per line.
pub fn to_cleaned_text<S: AsRef<str>>(records: &[S]) -> String {
    let mut cleaned = String::with_capacity(records.iter().map(|r| r.as_ref().len() + 1).sum());
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            cleaned.push('\n');
        }
        cleaned.push_str(record.as_ref());
    }
    cleaned
}
