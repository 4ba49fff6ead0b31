//! Person module for family tree representation.

use crate::model::family_tree::PersonIndex;
use crate::model::id_sequence::PersonId;
use crate::model::name::Name;
use std::collections::BTreeMap;

/// Free-text properties of a person, keyed by their label (e.g. `b` or `d`).
pub type Properties = BTreeMap<String, String>;

// =#========================================================================#=
// PERSON
// =#========================================================================#=
/// Represents a person (node) in a family tree.
///
/// A person is either:
/// - **Blood relative**: Placed in the tree through a numbered book record,
///   has a parent (except for the root) and an ordered list of children
/// - **Spouse**: Attached to a blood relative through a `+` record,
///   has no parent and no children of its own
///
/// # Invariants
/// - `index` is index in arena of the owning [FamilyTree](crate::model::FamilyTree)
/// - `id` is unique within the tree and increasing in construction order
/// - blood relatives have `generation == parent.generation + 1`
/// - spouses share the `generation` of their partner, the link is symmetric
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Index of this person in the tree arena
    index: PersonIndex,
    /// Cross-reference id used by writers
    id: PersonId,
    /// Depth in the family tree; 1 for the root person
    generation: usize,
    name: Name,
    properties: Properties,
    /// Arena index of the parent; `None` for the root and spouses
    parent: Option<PersonIndex>,
    /// Arena index of the spouse (symmetric link)
    spouse: Option<PersonIndex>,
    /// Arena indices of children in document order
    children: Vec<PersonIndex>,
    /// Whether this person entered the tree through a spouse record
    is_spouse: bool,
}

impl Person {
    /// Creates a new person not yet linked to any other person.
    pub(crate) fn new(
        index: PersonIndex,
        id: PersonId,
        generation: usize,
        name: Name,
        properties: Properties,
        is_spouse: bool,
    ) -> Self {
        Self {
            index,
            id,
            generation,
            name,
            properties,
            parent: None,
            spouse: None,
            children: Vec::new(),
            is_spouse,
        }
    }

    /// Returns the index of this person in its tree.
    pub fn index(&self) -> PersonIndex {
        self.index
    }

    /// Returns the cross-reference id of this person.
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the generation (depth) of this person.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the name of this person.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the first name of this person.
    pub fn first_name(&self) -> &str {
        self.name.first()
    }

    /// Returns the properties of this person, ordered by label.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the value of the property with the given label, if present.
    pub fn property(&self, label: &str) -> Option<&str> {
        self.properties.get(label).map(String::as_str)
    }

    /// Returns the index of the parent, or `None` for the root and spouses.
    pub fn parent_index(&self) -> Option<PersonIndex> {
        self.parent
    }

    /// Returns whether a parent is set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the index of the spouse, if any.
    pub fn spouse_index(&self) -> Option<PersonIndex> {
        self.spouse
    }

    /// Returns the children indices in document order.
    pub fn children(&self) -> &[PersonIndex] {
        &self.children
    }

    /// Returns whether this person has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this person was attached as a spouse.
    pub fn is_spouse(&self) -> bool {
        self.is_spouse
    }

    pub(crate) fn set_parent(&mut self, parent: Option<PersonIndex>) {
        self.parent = parent;
    }

    pub(crate) fn set_spouse(&mut self, spouse: Option<PersonIndex>) {
        self.spouse = spouse;
    }

    pub(crate) fn push_child(&mut self, child: PersonIndex) {
        self.children.push(child);
    }
}
