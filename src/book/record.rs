//! Parsing of the `name label: value ...` part of a book record.
//!
//! A record text consists of a name followed by any number of trailing
//! `label: value` properties, e.g. `Jane Doe b: 1900 d: 1950`.
//! Values may contain spaces, so the only reliable anchor is the `": "`
//! delimiter; properties are therefore peeled off from the right.

use crate::book::defs::PROPERTY_DELIMITER;
use crate::model::{Name, Properties};

/// Splits trailing `label: value` properties off a record text.
///
/// Repeatedly finds the rightmost `": "`:
/// - the value is everything after it (kept verbatim),
/// - the label is the run of non-space characters directly before it,
/// - everything before the space preceding the label is scanned further.
///
/// Once no delimiter remains, the rest is returned as name text.
///
/// This greedy right-to-left policy is kept for compatibility with existing
/// transcriptions. It has two quirks worth knowing:
/// - A value containing `": "` is itself split, its left part ending up
///   as an earlier property.
/// - If a label occurs twice, the leftmost occurrence wins.
///
/// A delimiter without any space before it makes the whole prefix the
/// label and leaves an empty name text.
///
/// # Examples
/// ```
/// use genbook::book::split_properties;
///
/// let (name, properties) = split_properties("Jane Doe b: 1900 d: 1950");
/// assert_eq!(name, "Jane Doe");
/// assert_eq!(properties.get("b").map(String::as_str), Some("1900"));
/// assert_eq!(properties.get("d").map(String::as_str), Some("1950"));
///
/// // Only the last word before the delimiter forms the label
/// let (name, properties) = split_properties("Jane Doe birth year: 1900");
/// assert_eq!(name, "Jane Doe birth");
/// assert_eq!(properties.get("year").map(String::as_str), Some("1900"));
/// ```
pub fn split_properties(text: &str) -> (&str, Properties) {
    let mut properties = Properties::new();
    let mut rest = text;

    while let Some(delimiter_index) = rest.rfind(PROPERTY_DELIMITER) {
        let value = &rest[delimiter_index + PROPERTY_DELIMITER.len()..];
        let before = &rest[..delimiter_index];
        let (label, remaining) = match before.rfind(' ') {
            Some(space_index) => (&before[space_index + 1..], &before[..space_index]),
            None => (before, ""),
        };
        properties.insert(label.to_string(), value.to_string());
        rest = remaining;
    }

    (rest, properties)
}

/// Splits name text into first, middle and last name.
///
/// - No internal space: first name only
/// - Exactly one internal space: first and last name
/// - More spaces: first token is the first name, last token the last name,
///   everything in between (verbatim) the middle name
///
/// Surrounding whitespace is ignored. Returns `None` for blank text.
///
/// # Examples
/// ```
/// use genbook::book::split_name;
///
/// let name = split_name("John Michael Smith").unwrap();
/// assert_eq!(name.first(), "John");
/// assert_eq!(name.middle(), Some("Michael"));
/// assert_eq!(name.last(), Some("Smith"));
///
/// assert_eq!(split_name("John").unwrap().last(), None);
/// assert!(split_name("  ").is_none());
/// ```
pub fn split_name(text: &str) -> Option<Name> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let name = match (text.find(' '), text.rfind(' ')) {
        (Some(first_space), Some(last_space)) if first_space == last_space => Name::new(
            &text[..first_space],
            None,
            Some(text[last_space + 1..].to_string()),
        ),
        (Some(first_space), Some(last_space)) => Name::new(
            &text[..first_space],
            Some(text[first_space + 1..last_space].to_string()),
            Some(text[last_space + 1..].to_string()),
        ),
        _ => Name::first_only(text),
    };

    Some(name)
}

/// Parses a full record text into a name and its properties.
///
/// Returns `None` if no name remains once properties are split off.
pub fn parse_record(text: &str) -> Option<(Name, Properties)> {
    let (name_text, properties) = split_properties(text);
    split_name(name_text).map(|name| (name, properties))
}
