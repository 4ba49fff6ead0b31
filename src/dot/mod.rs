//! DOT (Graphviz) writer for family trees.
//!
//! Renders a [FamilyTree](crate::model::FamilyTree) as a directed graph with
//! one node per blood relative, labelled `<generation>. <full name>`, and one
//! edge from each parent to each child.
//!
//! # Format
//! * `graph ::= 'digraph G {' { node | edge } '}'`
//! * `node ::= id ' [label="' generation '. ' name '"' [' color="blue"'] ']'`
//! * `edge ::= parent_id ' -> ' child_id`

mod defs;
pub mod writer;

pub use self::writer::{to_dot, write_dot_file};
