//! Book transcription normalizer and parser.
//!
//! A book transcription lists a family top-down, one record per person,
//! each prefixed with its generation number. Spouses follow their partner
//! on lines starting with `+`. Long descriptions wrap onto unmarked lines.
//!
//! Parsing is done in two passes:
//! 1. [normalize_lines] merges wrapped lines into one logical line per record,
//! 2. [BookParser] rebuilds the [FamilyTree] from the logical lines.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [normalize_file] - reads a raw transcription, returns logical lines
//! * [parse_file] - parses a cleaned transcription file
//! * [parse_str] - parses a cleaned transcription string
//! * [parse_raw_str] - normalizes and parses a raw transcription string
//!
//! # Full API
//! For more control, configure a [BookParser] (generation limit, id sequence).
//!
//! # Format
//! * `person ::= '.'* DIGIT+ ' ' name { ' ' label ': ' value }*`
//! * `spouse ::= ('.' | ' ')* '+' [DIGIT+ ' '] name { ' ' label ': ' value }*`
//! * `name ::= first [middle ...] [last]`

mod defs;
mod normalizer;
mod parser;
mod record;

pub use self::defs::DEFAULT_MAX_GENERATION;
pub use self::normalizer::{LineKind, classify_line, normalize_lines, normalize_str, to_cleaned_text};
pub use self::parser::BookParser;
pub use self::record::{parse_record, split_name, split_properties};

use crate::model::FamilyTree;
use crate::parser::ParsingError;
use std::fs;
use std::path::Path;

// ============================================================================
// QUICK API (pub)
// ============================================================================
/// Reads a raw transcription file (UTF-8) and normalizes it into logical lines.
///
/// # Errors
/// Returns an `IoError` if the file cannot be read.
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ParsingError> {
    let raw = fs::read_to_string(path)?;
    Ok(normalize_str(&raw))
}

/// Parses a cleaned transcription file using default settings.
///
/// # Arguments
/// * `path` - Path to the file with one record per line
///
/// # Returns
/// * [FamilyTree] - Tree rooted at the single generation-1 person
/// * [ParsingError] - If reading fails or a record is malformed
///
/// # Example
/// ```ignore
/// use genbook::book::parse_file;
///
/// let tree = parse_file("res/wallicks_cleaned.txt")?;
/// println!("Parsed {} persons", tree.num_persons());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<FamilyTree, ParsingError> {
    BookParser::new().parse_file(path)
}

/// Parses a cleaned transcription string using default settings.
///
/// # Example
/// ```
/// use genbook::book::parse_str;
///
/// let tree = parse_str("1 John Smith\n.2 Ann Smith b: 1830").unwrap();
/// let ann = &tree[tree.root().children()[0]];
/// assert_eq!(ann.generation(), 2);
/// assert_eq!(ann.property("b"), Some("1830"));
/// ```
pub fn parse_str(cleaned: &str) -> Result<FamilyTree, ParsingError> {
    BookParser::new().parse_str(cleaned)
}

/// Normalizes and parses a raw transcription string using default settings.
pub fn parse_raw_str(raw: &str) -> Result<FamilyTree, ParsingError> {
    BookParser::new().parse_lines(normalize_str(raw))
}
