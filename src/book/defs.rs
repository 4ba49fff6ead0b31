//! Patterns and constants for the book transcription format.
//!
//! Each book record starts with either a generation number (optionally
//! preceded by dots indicating depth) or a `+` marking a spouse.
//! Lines starting otherwise continue the description of the previous record.

use once_cell::sync::Lazy;
use regex::Regex;

/// Start of a person record: optional dots, then the generation number.
pub(crate) static PERSON_RECORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.*[0-9]+").unwrap());

/// Start of a spouse record: optional dots and whitespace, then `+`.
pub(crate) static SPOUSE_RECORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.\s]*\+").unwrap());

/// Full person record: dots, generation number, space, name and properties.
pub(crate) static PERSON_RECORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.*([0-9]+) (.*)$").unwrap());

/// Full spouse record: marker, optional explicit generation, name and properties.
pub(crate) static SPOUSE_RECORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.\s]*\++\s*(?:([0-9]+)\s+)?(.*)$").unwrap());

/// Delimiter between a property label and its value.
pub(crate) const PROPERTY_DELIMITER: &str = ": ";

/// Default maximal generation accepted by the parser.
pub const DEFAULT_MAX_GENERATION: usize = 64;
