//! Person names split into first, middle and last components.

use std::fmt;

// =#========================================================================#=
// NAME
// =#========================================================================#=
/// Name of a person as transcribed in the book.
///
/// Middle and last name are optional: "no last name" is kept distinct
/// from an empty last name, since writers render the two differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    first: String,
    middle: Option<String>,
    last: Option<String>,
}

impl Name {
    /// Creates a name from its components.
    pub fn new<S: Into<String>>(first: S, middle: Option<String>, last: Option<String>) -> Self {
        Self {
            first: first.into(),
            middle,
            last,
        }
    }

    /// Creates a name consisting of a first name only.
    pub fn first_only<S: Into<String>>(first: S) -> Self {
        Self::new(first, None, None)
    }

    /// Returns the first name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the middle name(s), if any.
    pub fn middle(&self) -> Option<&str> {
        self.middle.as_deref()
    }

    /// Returns the last name, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Returns first and middle name(s) joined by a space.
    pub fn given_names(&self) -> String {
        match &self.middle {
            Some(middle) => format!("{} {}", self.first, middle),
            None => self.first.clone(),
        }
    }

    /// Returns all present components joined by single spaces.
    ///
    /// # Example
    /// ```
    /// use genbook::model::Name;
    ///
    /// let name = Name::new("John", Some("Michael".to_string()), Some("Smith".to_string()));
    /// assert_eq!(name.full_name(), "John Michael Smith");
    /// assert_eq!(Name::first_only("John").full_name(), "John");
    /// ```
    pub fn full_name(&self) -> String {
        let mut name = self.given_names();
        if let Some(last) = &self.last {
            name.push(' ');
            name.push_str(last);
        }
        name
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
