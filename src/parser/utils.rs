//! Utility functions for escaping text in the output formats.
//!
//! This module provides functions for safely embedding names and property
//! values in DOT string literals and GEDCOM lines.

/// Escapes a label for use inside a double-quoted DOT string.
///
/// Backslashes and double quotes are prefixed with a backslash;
/// everything else is kept as-is.
///
/// # Arguments
/// * `label` - The label string to escape
///
/// # Returns
/// An escaped label string safe to wrap in double quotes
///
/// # Examples
/// ```
/// # use genbook::parser::utils::escape_dot_label;
/// assert_eq!(escape_dot_label("Mary Ann Smith"), "Mary Ann Smith");
/// assert_eq!(escape_dot_label("John \"Jack\" Doe"), "John \\\"Jack\\\" Doe");
/// assert_eq!(escape_dot_label("C:\\dir"), "C:\\\\dir");
/// ```
pub fn escape_dot_label(label: &str) -> String {
    if !label.contains(['"', '\\']) {
        return label.to_string();
    }

    let mut escaped = String::with_capacity(label.len() + 4);
    for ch in label.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Collapses line breaks into single spaces, as GEDCOM line values
/// must not span several lines.
///
/// # Examples
/// ```
/// # use genbook::parser::utils::single_line;
/// assert_eq!(single_line("born 1900"), "born 1900");
/// assert_eq!(single_line("born\r\nin Ohio\n"), "born in Ohio");
/// ```
pub fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prepares free text for a GEDCOM line value: line breaks are collapsed
/// (see [single_line]) and every `@` is doubled, as a single `@` would
/// start a cross-reference pointer.
///
/// # Examples
/// ```
/// # use genbook::parser::utils::escape_gedcom_value;
/// assert_eq!(escape_gedcom_value("Ann Smith"), "Ann Smith");
/// assert_eq!(escape_gedcom_value("ann@smith.org\nhome"), "ann@@smith.org home");
/// ```
pub fn escape_gedcom_value(text: &str) -> String {
    single_line(text).replace('@', "@@")
}
