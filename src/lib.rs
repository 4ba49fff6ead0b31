//! Genbook is a library to turn book-format genealogy transcriptions into
//! family trees, and family trees into DOT graphs and GEDCOM documents.
//!
//! A book transcription lists a family top-down, one numbered record per
//! person (`..3 John Smith b: 1850`), spouses on `+` lines, and long
//! descriptions wrapped onto unmarked lines.
//! Core functionality provided:
//! - Book: Normalize wrapped transcriptions and parse them into a tree.
//! - Tree model: [FamilyTree] stores [Person]s in an arena; ids come from a
//!   per-parser [IdSequence](model::IdSequence).
//! - DOT: Full graph or ancestry spine of an anchor person.
//! - GEDCOM: Minimal lineage-linked document, in the same two views.
//! - Conversion: The fixed batch pipeline writing all outputs atomically.
//!
//! Limitations:
//! - Grammar specific to one transcription convention
//! - At most one spouse per person
//! - No conversion back into book format
//!
//! # Usage patterns
//! 1. Quick access with default settings: [parse_book_str],
//!    [parse_book_file], [normalize_book_str].
//! 2. Configure a [BookParser](book::BookParser) or
//!    [Conversion](convert::Conversion) for full control.
//!
//! ## Example
//! ```
//! use genbook::{normalize_book_str, parse_book_str};
//! use genbook::dot::to_dot;
//! use genbook::gedcom::to_gedcom;
//! use genbook::model::{Anchor, View};
//!
//! let raw = "1 John Smith b: 1800\n  farmer\n+ Mary Jones\n.2 Ann Smith\n..3 Kerby Lee";
//! let cleaned = normalize_book_str(raw).join("\n");
//! let tree = parse_book_str(&cleaned).unwrap();
//!
//! let anchor = tree.resolve_anchor(&Anchor::first_name("Kerby")).unwrap();
//! let dot = to_dot(&tree, View::Ancestry(anchor));
//! assert!(dot.contains("color=\"blue\""));
//!
//! let gedcom = to_gedcom(&tree, View::Full);
//! assert!(gedcom.contains("1 NOTE b: 1800 farmer"));
//! ```

pub mod book;
pub mod convert;
pub mod dot;
pub mod gedcom;
pub mod model;
mod output;
pub mod parser;

use crate::model::{FamilyTree, Person};
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Book API
// ============================================================================
/// Parses a cleaned book transcription (one record per line) using
/// default settings.
///
/// See [`book::parse_str`] for full documentation.
pub fn parse_book_str<S: AsRef<str>>(cleaned: S) -> Result<FamilyTree, ParsingError> {
    book::parse_str(cleaned.as_ref())
}

/// Parses a cleaned book transcription file using default settings.
///
/// See [`book::parse_file`] for full documentation.
pub fn parse_book_file<P: AsRef<Path>>(path: P) -> Result<FamilyTree, ParsingError> {
    book::parse_file(path)
}

/// Normalizes a raw transcription into one logical line per record.
///
/// See [`book::normalize_str`] for full documentation.
pub fn normalize_book_str<S: AsRef<str>>(raw: S) -> Vec<String> {
    book::normalize_str(raw.as_ref())
}

/// Finds the first person in pre-order with the given first name.
///
/// See [`FamilyTree::find_by_first_name`] for full documentation.
pub fn find_by_first_name<'a>(tree: &'a FamilyTree, first_name: &str) -> Option<&'a Person> {
    tree.find_by_first_name(first_name).map(|index| &tree[index])
}
