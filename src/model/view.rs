//! Selection of the part of a family tree a writer renders.

use crate::model::family_tree::{FamilyTree, PersonIndex};
use crate::parser::ParsingError;

// =#========================================================================#=
// VIEW
// =#========================================================================#=
/// Traversal mode shared by the DOT and GEDCOM writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Whole tree in pre-order from the root.
    Full,
    /// Ancestry spine from the given anchor up to the root,
    /// exposing the immediate children of every person on the spine.
    Ancestry(PersonIndex),
}

impl FamilyTree {
    /// Returns the sequence of persons on the ancestry spine of `anchor`,
    /// each paired with its children, from the anchor up to the root.
    pub fn ancestry_spine(&self, anchor: PersonIndex) -> Vec<(PersonIndex, &[PersonIndex])> {
        self.ancestors_iter(anchor)
            .map(|person| (person.index(), person.children()))
            .collect()
    }
}

// =#========================================================================#=
// ANCHOR
// =#========================================================================#=
/// Description of how to locate the anchor person of an [View::Ancestry].
///
/// The anchor is found by a pre-order first-name search, optionally followed
/// by descending into children by position.
///
/// # Example
/// ```
/// use genbook::model::Anchor;
///
/// // First child of the first person named "Kerby"
/// let anchor = Anchor::first_name("Kerby").then_child(0);
/// assert_eq!(anchor.name(), "Kerby");
/// assert_eq!(anchor.child_path(), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    first_name: String,
    child_path: Vec<usize>,
}

impl Anchor {
    /// Anchors at the first person (pre-order) with the given first name.
    pub fn first_name<S: Into<String>>(first_name: S) -> Self {
        Self {
            first_name: first_name.into(),
            child_path: Vec::new(),
        }
    }

    /// Descends further into the child at `position` (0-based) of the current match.
    pub fn then_child(mut self, position: usize) -> Self {
        self.child_path.push(position);
        self
    }

    /// Returns the first name searched for.
    pub fn name(&self) -> &str {
        &self.first_name
    }

    /// Returns the child positions descended into after the name match.
    pub fn child_path(&self) -> &[usize] {
        &self.child_path
    }
}

impl FamilyTree {
    /// Resolves an [Anchor] to the index of the person it describes.
    ///
    /// # Errors
    /// Returns an `AnchorNotFound` error if no person has the first name,
    /// or if a child position along the path does not exist.
    pub fn resolve_anchor(&self, anchor: &Anchor) -> Result<PersonIndex, ParsingError> {
        let mut index = self
            .find_by_first_name(anchor.name())
            .ok_or_else(|| ParsingError::anchor_not_found(format!("no person named '{}'", anchor.name())))?;

        for &position in anchor.child_path() {
            index = *self[index].children().get(position).ok_or_else(|| {
                ParsingError::anchor_not_found(format!(
                    "'{}' has no child at position {position}",
                    self[index].name()
                ))
            })?;
        }

        Ok(index)
    }
}
