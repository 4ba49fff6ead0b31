//! Provides the family tree representation.
//!
//! Provides core data structures for representing a family tree:
//! * [FamilyTree] - Main tree structure using the arena pattern
//! * [PersonIndex] as type used to index persons in the tree
//! * [PreOrderIter] and [AncestorIter] for read-only traversals

use crate::model::id_sequence::PersonId;
use crate::model::name::Name;
use crate::model::person::{Person, Properties};

/// Index of a person in a tree (arena).
pub type PersonIndex = usize;

// =$========================================================================$=
// FAMILY TREE
// =$========================================================================$=
/// A rooted family tree represented using the arena pattern on [Person].
///
/// Persons are stored in a contiguous vector and referenced by
/// [PersonIndex]. Parent, spouse and child links are indices into this arena,
/// so a child refers to its parent without owning it.
///
/// # Structure
/// - Blood relatives form the tree proper: each has exactly one parent,
///   except for the root, and children in document order.
/// - Spouses live in the same arena, are linked symmetrically to their
///   partner and never take part in parent/child links.
/// - Indices follow construction order, and so do ids.
///
/// # Construction
/// Add persons with [FamilyTree::add_person], link them with
/// [FamilyTree::add_child] and [FamilyTree::add_spouse], and finally
/// declare the root with [FamilyTree::set_root].
/// Test validity with [FamilyTree::is_valid].
///
/// # Example
/// ```
/// use genbook::model::{FamilyTree, Name, Properties};
///
/// let mut tree = FamilyTree::new();
/// let anna = tree.add_person(1, 1, Name::first_only("Anna"), Properties::new());
/// let ben = tree.add_person(2, 2, Name::first_only("Ben"), Properties::new());
/// tree.add_child(anna, ben);
/// tree.add_spouse(anna, 3, Name::first_only("Carl"), Properties::new());
/// tree.set_root(anna);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.num_persons(), 3);
/// assert_eq!(tree.num_blood_relatives(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    /// Persons of this tree (arena pattern)
    persons: Vec<Person>,

    /// Index of the root person, once set
    root_index: Option<PersonIndex>,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl FamilyTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty tree with room for `capacity` persons.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            persons: Vec::with_capacity(capacity),
            root_index: None,
        }
    }

    /// Adds an unlinked blood relative to the tree, returning its index.
    ///
    /// # Arguments
    /// * `id` - Cross-reference id; must exceed all ids added before
    /// * `generation` - Depth of the person in the tree
    /// * `name` - Parsed name
    /// * `properties` - Parsed `label: value` properties
    pub fn add_person(
        &mut self,
        id: PersonId,
        generation: usize,
        name: Name,
        properties: Properties,
    ) -> PersonIndex {
        let index = self.persons.len();
        self.persons
            .push(Person::new(index, id, generation, name, properties, false));
        index
    }

    /// Appends `child` to the children of `parent` and sets its parent.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn add_child(&mut self, parent: PersonIndex, child: PersonIndex) {
        self[child].set_parent(Some(parent));
        self[parent].push_child(child);
    }

    /// Creates a spouse for `partner` sharing its generation, returning the
    /// spouse's index.
    ///
    /// # Panics
    /// Panics if `partner` is out of bounds or already has a spouse.
    pub fn add_spouse(
        &mut self,
        partner: PersonIndex,
        id: PersonId,
        name: Name,
        properties: Properties,
    ) -> PersonIndex {
        assert!(
            self[partner].spouse_index().is_none(),
            "person {partner} already has a spouse"
        );

        let index = self.persons.len();
        let generation = self[partner].generation();
        let mut spouse = Person::new(index, id, generation, name, properties, true);
        spouse.set_spouse(Some(partner));
        self.persons.push(spouse);
        self[partner].set_spouse(Some(index));

        index
    }

    /// Declares `index` as the root of this tree, clearing its parent link.
    pub fn set_root(&mut self, index: PersonIndex) {
        self[index].set_parent(None);
        self.root_index = Some(index);
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl FamilyTree {
    /// Returns whether the root of the tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index.is_some()
    }

    /// Returns the index of the root.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn root_index(&self) -> PersonIndex {
        self.root_index.expect("root of family tree not set")
    }

    /// Returns a reference to the root person.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn root(&self) -> &Person {
        &self[self.root_index()]
    }

    /// Returns the person at the given index, or `None` if out of bounds.
    pub fn get(&self, index: PersonIndex) -> Option<&Person> {
        self.persons.get(index)
    }

    /// Returns all persons, including spouses, in construction order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Returns the number of persons in this tree, including spouses.
    pub fn num_persons(&self) -> usize {
        self.persons.len()
    }

    /// Returns the number of blood relatives, i.e. persons that are not spouses.
    pub fn num_blood_relatives(&self) -> usize {
        self.persons.iter().filter(|p| !p.is_spouse()).count()
    }

    /// Returns the number of spouses in this tree.
    pub fn num_spouses(&self) -> usize {
        self.persons.iter().filter(|p| p.is_spouse()).count()
    }

    /// Returns the spouse of the person at `index`, if any.
    pub fn spouse_of(&self, index: PersonIndex) -> Option<&Person> {
        self[index].spouse_index().map(|spouse| &self[spouse])
    }

    /// Returns the parent of the person at `index`, if any.
    pub fn parent_of(&self, index: PersonIndex) -> Option<&Person> {
        self[index].parent_index().map(|parent| &self[parent])
    }

    /// Returns the largest generation present in the tree (0 if empty).
    pub fn max_generation(&self) -> usize {
        self.persons
            .iter()
            .map(Person::generation)
            .max()
            .unwrap_or(0)
    }

    /// Finds the first blood relative in pre-order (depth-first,
    /// children left to right) whose first name equals `first_name`.
    pub fn find_by_first_name(&self, first_name: &str) -> Option<PersonIndex> {
        self.pre_order_iter()
            .find(|person| person.first_name() == first_name)
            .map(Person::index)
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl FamilyTree {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root is set, is a blood relative and has no parent
    /// - All person indices match their position in the arena
    /// - Ids are strictly increasing in construction order
    /// - Every non-root blood relative has a parent listing it as a child,
    ///   and is exactly one generation deeper than that parent
    /// - Children point back to their parent and are no spouses
    /// - Spouse links are symmetric, spouses share the partner's generation
    ///   and have neither parent nor children
    /// - Every blood relative is reachable from the root exactly once
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let Some(root_index) = self.root_index else {
            return false;
        };
        let Some(root) = self.persons.get(root_index) else {
            return false;
        };
        if root.is_spouse() || root.has_parent() {
            return false;
        }

        let mut previous_id = None;
        for (index, person) in self.persons.iter().enumerate() {
            if person.index() != index {
                return false;
            }

            if previous_id.is_some_and(|id| person.id() <= id) {
                return false;
            }
            previous_id = Some(person.id());

            // Children references
            for &child in person.children() {
                let Some(child) = self.persons.get(child) else {
                    return false;
                };
                if child.is_spouse()
                    || child.parent_index() != Some(index)
                    || child.generation() != person.generation() + 1
                {
                    return false;
                }
            }

            // Spouse references
            if let Some(spouse) = person.spouse_index() {
                let Some(spouse) = self.persons.get(spouse) else {
                    return false;
                };
                if spouse.spouse_index() != Some(index)
                    || spouse.generation() != person.generation()
                    || spouse.is_spouse() == person.is_spouse()
                {
                    return false;
                }
            }

            if person.is_spouse() {
                if person.has_parent() || !person.is_leaf() || person.spouse_index().is_none() {
                    return false;
                }
            } else if index != root_index {
                match person.parent_index().and_then(|parent| self.persons.get(parent)) {
                    None => return false,
                    Some(parent) => {
                        if !parent.children().contains(&index) {
                            return false;
                        }
                    }
                }
            }
        }

        // Reachability: each blood relative visited exactly once
        let mut visited = vec![false; self.persons.len()];
        for person in self.pre_order_iter() {
            if visited[person.index()] {
                return false;
            }
            visited[person.index()] = true;
        }
        self.persons
            .iter()
            .all(|person| person.is_spouse() || visited[person.index()])
    }
}

impl std::ops::Index<PersonIndex> for FamilyTree {
    type Output = Person;

    fn index(&self, index: PersonIndex) -> &Self::Output {
        &self.persons[index]
    }
}

impl std::ops::IndexMut<PersonIndex> for FamilyTree {
    fn index_mut(&mut self, index: PersonIndex) -> &mut Self::Output {
        &mut self.persons[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl FamilyTree {
    /// Returns an iterator over the blood relatives in pre-order
    /// (parents before children, children in document order).
    ///
    /// Spouses are not part of the traversal. Yields nothing if no root is set.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self, self.root_index)
    }

    /// Returns an iterator over the subtree rooted at `index` in pre-order.
    pub fn subtree_iter(&self, index: PersonIndex) -> PreOrderIter<'_> {
        PreOrderIter::new(self, Some(index))
    }

    /// Returns an iterator from the person at `index` up to the root,
    /// both inclusive.
    pub fn ancestors_iter(&self, index: PersonIndex) -> AncestorIter<'_> {
        AncestorIter {
            tree: self,
            current: Some(index),
        }
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Uses a stack instead of recursion, so deep trees cannot overflow the call stack.
pub struct PreOrderIter<'a> {
    tree: &'a FamilyTree,
    stack: Vec<PersonIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a FamilyTree, start: Option<PersonIndex>) -> Self {
        PreOrderIter {
            tree,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let person = &self.tree[index];

        // Push children in reverse, so the first child is visited first
        self.stack.extend(person.children().iter().rev());

        Some(person)
    }
}

/// Iterator walking from a person up through its ancestors to the root.
pub struct AncestorIter<'a> {
    tree: &'a FamilyTree,
    current: Option<PersonIndex>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        let person = &self.tree[self.current?];
        self.current = person.parent_index();
        Some(person)
    }
}
