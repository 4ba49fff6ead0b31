//! Data model for family trees.
//!
//! # Tree representation
//! Trees are represented by [FamilyTree], which uses the arena pattern to
//! store [Person] nodes referenced by [PersonIndex]. Each person is either a
//! blood relative, placed by a numbered book record, or a spouse attached to
//! one.
//!
//! Persons carry two identifiers:
//!
//! | Identifier | Type | Purpose |
//! |------------|------|---------|
//! | [PersonIndex] | position in arena | navigating links inside the tree |
//! | [PersonId] | drawn from [IdSequence] | cross-references in DOT/GEDCOM output |
//!
//! # Views
//! Writers render either the whole tree or the ancestry spine of an
//! anchor person, selected through [View]. Anchors are located by an
//! [Anchor] description.

pub mod family_tree;
pub mod id_sequence;
pub mod name;
pub mod person;
pub mod view;

pub use family_tree::{AncestorIter, FamilyTree, PersonIndex, PreOrderIter};
pub use id_sequence::{FIRST_PERSON_ID, IdSequence, PersonId};
pub use name::Name;
pub use person::{Person, Properties};
pub use view::{Anchor, View};
