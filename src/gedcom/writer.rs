//! GEDCOM format writing for family trees.

use crate::gedcom::defs::*;
use crate::model::{FamilyTree, Person, PersonId, PersonIndex, View};
use crate::output::write_atomically;
use crate::parser::utils::escape_gedcom_value;
use std::io;
use std::path::Path;

/// Writes the GEDCOM representation of a tree (or part of it) to a file.
///
/// The file is first written to a temporary file in the same directory and
/// then renamed, so an existing file is never left half-written.
///
/// # Errors
/// Returns an I/O error if writing or renaming fails.
pub fn write_gedcom_file<P: AsRef<Path>>(path: P, tree: &FamilyTree, view: View) -> io::Result<()> {
    write_atomically(path, &to_gedcom(tree, view))
}

/// Returns the GEDCOM representation of the tree.
///
/// The document starts with a header block, followed by per person (in view
/// order) its individual record and, if married, the spouse's individual
/// record and their family record, and ends with the trailer.
///
/// * [View::Full] includes every person in pre-order.
/// * [View::Ancestry] includes the persons on the anchor's ancestry spine and
///   their children, each once, in spine order.
///
/// `CHIL` references are only written for children included in the output.
///
/// # Example
/// ```
/// use genbook::book::parse_str;
/// use genbook::gedcom::to_gedcom;
/// use genbook::model::View;
///
/// let tree = parse_str("1 John Smith\n+ Mary Jones").unwrap();
/// let gedcom = to_gedcom(&tree, View::Full);
/// assert!(gedcom.starts_with("0 HEAD\n"));
/// assert!(gedcom.contains("0 @I1@ INDI\n1 NAME John /Smith/\n"));
/// assert!(gedcom.contains("0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n"));
/// assert!(gedcom.ends_with("0 TRLR\n"));
/// ```
pub fn to_gedcom(tree: &FamilyTree, view: View) -> String {
    let included = included_persons(tree, view);
    let mut is_included = vec![false; tree.num_persons()];
    for &index in &included {
        is_included[index] = true;
    }

    let mut builder = GedcomBuilder::with_capacity(included.len() * 128);
    builder.header();
    for &index in &included {
        let person = &tree[index];
        let children: Vec<PersonId> = person
            .children()
            .iter()
            .filter(|&&child| is_included[child])
            .map(|&child| tree[child].id())
            .collect();

        match tree.spouse_of(index) {
            Some(spouse) => {
                builder
                    .individual(person, Some(person.id()), &children)
                    .individual(spouse, Some(person.id()), &[])
                    .family(person.id(), person.id(), spouse.id());
            }
            None => {
                builder.individual(person, None, &children);
            }
        }
    }
    builder.trailer();

    builder.finish()
}

/// Returns the blood relatives included in the given view, in output order.
fn included_persons(tree: &FamilyTree, view: View) -> Vec<PersonIndex> {
    match view {
        View::Full => tree.pre_order_iter().map(Person::index).collect(),
        View::Ancestry(anchor) => {
            let mut seen = vec![false; tree.num_persons()];
            let mut included = Vec::new();
            for (index, children) in tree.ancestry_spine(anchor) {
                for &person in std::iter::once(&index).chain(children) {
                    if !seen[person] {
                        seen[person] = true;
                        included.push(person);
                    }
                }
            }
            included
        }
    }
}

// =#========================================================================#=
// GEDCOM BUILDER
// =#========================================================================#=
/// Line-oriented builder for GEDCOM documents with chainable record writers.
struct GedcomBuilder {
    out: String,
}

// ============================================================================
// Records
// ============================================================================
impl GedcomBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    /// Writes the header block declaring version, form and character set.
    fn header(&mut self) -> &mut Self {
        self.line(0, HEAD, None)
            .line(1, GEDC, None)
            .line(2, VERS, Some(GEDCOM_VERSION))
            .line(2, FORM, Some(GEDCOM_FORM))
            .line(1, CHAR, Some(GEDCOM_CHARSET))
    }

    /// Writes the trailer closing the document.
    fn trailer(&mut self) -> &mut Self {
        self.line(0, TRLR, None)
    }

    /// Writes an individual record, with its family link and child references.
    fn individual(&mut self, person: &Person, family: Option<PersonId>, children: &[PersonId]) -> &mut Self {
        let name = person.name();
        let given = escape_gedcom_value(&name.given_names());

        self.record(INDIVIDUAL_PREFIX, person.id(), INDI);
        match name.last() {
            Some(last) => {
                let last = escape_gedcom_value(last);
                self.line(1, NAME, Some(&format!("{given} /{last}/")))
                    .line(2, GIVN, Some(&given))
                    .line(2, SURN, Some(&last));
            }
            None => {
                self.line(1, NAME, Some(&given)).line(2, GIVN, Some(&given));
            }
        }

        for (label, value) in person.properties() {
            self.line(1, NOTE, Some(&escape_gedcom_value(&format!("{label}: {value}"))));
        }
        if let Some(family) = family {
            self.line(1, FAMS, Some(&xref(FAMILY_PREFIX, family)));
        }
        for &child in children {
            self.line(1, CHIL, Some(&xref(INDIVIDUAL_PREFIX, child)));
        }

        self
    }

    /// Writes a family record linking husband and wife.
    fn family(&mut self, family: PersonId, husband: PersonId, wife: PersonId) -> &mut Self {
        self.record(FAMILY_PREFIX, family, FAM)
            .line(1, HUSB, Some(&xref(INDIVIDUAL_PREFIX, husband)))
            .line(1, WIFE, Some(&xref(INDIVIDUAL_PREFIX, wife)))
    }
}

// ============================================================================
// Lines
// ============================================================================
impl GedcomBuilder {
    /// Writes `0 @<prefix><id>@ <tag>`.
    fn record(&mut self, prefix: char, id: PersonId, tag: &str) -> &mut Self {
        self.out.push_str("0 ");
        self.out.push_str(&xref(prefix, id));
        self.out.push(' ');
        self.out.push_str(tag);
        self.out.push('\n');
        self
    }

    /// Writes `<level> <tag> [<value>]`.
    fn line(&mut self, level: u8, tag: &str, value: Option<&str>) -> &mut Self {
        self.out.push_str(&level.to_string());
        self.out.push(' ');
        self.out.push_str(tag);
        if let Some(value) = value {
            self.out.push(' ');
            self.out.push_str(value);
        }
        self.out.push('\n');
        self
    }
}

/// Formats a cross-reference pointer, e.g. `@I12@`.
fn xref(prefix: char, id: PersonId) -> String {
    format!("@{prefix}{id}@")
}
