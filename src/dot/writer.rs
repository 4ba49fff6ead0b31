//! DOT format writing for family trees.

use crate::dot::defs::{DOT_EDGE, DOT_FOOTER, DOT_HEADER, HIGHLIGHT_ATTRIBUTE};
use crate::model::{FamilyTree, Person, PersonId, PersonIndex, View};
use crate::output::write_atomically;
use crate::parser::utils::escape_dot_label;
use std::io;
use std::path::Path;

/// Extra buffer in DOT string length/capacity estimate
const BUFFER_CHARS: usize = 32;

/// Writes the DOT representation of a tree (or part of it) to a file.
///
/// The file is first written to a temporary file in the same directory and
/// then renamed, so an existing file is never left half-written.
///
/// # Arguments
/// * `path` - Destination file
/// * `tree` - The tree to write
/// * `view` - Which part of the tree to write, see [View]
///
/// # Errors
/// Returns an I/O error if writing or renaming fails.
///
/// # Example
/// ```ignore
/// use genbook::dot::write_dot_file;
/// use genbook::model::View;
///
/// write_dot_file("family.dot", &tree, View::Full)?;
/// ```
pub fn write_dot_file<P: AsRef<Path>>(path: P, tree: &FamilyTree, view: View) -> io::Result<()> {
    write_atomically(path, &to_dot(tree, view))
}

/// Returns the DOT representation of the tree as a directed graph.
///
/// * [View::Full] declares every blood relative in pre-order. The edge from a
///   person's parent follows right after the person's own subtree.
/// * [View::Ancestry] walks from the anchor up to the root. Each person on this
///   spine is declared highlighted, followed by declarations of and edges to
///   all its children. Spine persons are thus declared twice, which DOT merges.
///
/// Spouses are not drawn.
///
/// # Example
/// ```
/// use genbook::book::parse_str;
/// use genbook::dot::to_dot;
/// use genbook::model::View;
///
/// let tree = parse_str("1 John Smith\n.2 Ann Smith").unwrap();
/// assert_eq!(
///     to_dot(&tree, View::Full),
///     "digraph G {\n1 [label=\"1. John Smith\"]\n2 [label=\"2. Ann Smith\"]\n1 -> 2\n}\n"
/// );
/// ```
pub fn to_dot(tree: &FamilyTree, view: View) -> String {
    // Pre-order with an explicit stack: node on first visit,
    // edge from the parent once the subtree is done
    fn build_full(tree: &FamilyTree, dot: &mut String, root: PersonIndex) {
        let mut stack: Vec<(PersonIndex, bool)> = vec![(root, false)];

        while let Some((index, visited)) = stack.pop() {
            let person = &tree[index];
            if visited {
                if let Some(parent) = person.parent_index() {
                    push_edge(dot, tree[parent].id(), person.id());
                }
                continue;
            }

            push_node(dot, person, false);
            stack.push((index, true));
            stack.extend(person.children().iter().rev().map(|&child| (child, false)));
        }
    }

    let mut dot = String::with_capacity(estimate_dot_len(tree));
    dot.push_str(DOT_HEADER);

    match view {
        View::Full => {
            if tree.is_root_set() {
                build_full(tree, &mut dot, tree.root_index());
            }
        }
        View::Ancestry(anchor) => {
            for (index, children) in tree.ancestry_spine(anchor) {
                let person = &tree[index];
                push_node(&mut dot, person, true);
                for &child in children {
                    push_node(&mut dot, &tree[child], false);
                    push_edge(&mut dot, person.id(), tree[child].id());
                }
            }
        }
    }

    dot.push_str(DOT_FOOTER);
    dot
}

/// Appends the node statement `<id> [label="<generation>. <name>"]`.
fn push_node(dot: &mut String, person: &Person, highlight: bool) {
    dot.push_str(&person.id().to_string());
    dot.push_str(" [label=\"");
    dot.push_str(&person.generation().to_string());
    dot.push_str(". ");
    dot.push_str(&escape_dot_label(&person.name().full_name()));
    dot.push('"');
    if highlight {
        dot.push(' ');
        dot.push_str(HIGHLIGHT_ATTRIBUTE);
    }
    dot.push_str("]\n");
}

/// Appends the edge statement `<parent> -> <child>`.
fn push_edge(dot: &mut String, parent: PersonId, child: PersonId) {
    dot.push_str(&parent.to_string());
    dot.push_str(DOT_EDGE);
    dot.push_str(&child.to_string());
    dot.push('\n');
}

/// Estimates the length of the full DOT output for a given tree,
/// used to pre-allocate the output string.
pub(crate) fn estimate_dot_len(tree: &FamilyTree) -> usize {
    // Per node: id, generation, quotes and brackets ~= 24 chars
    const NODE_CHARS: usize = 24;
    // Per edge: two ids and arrow ~= 16 chars
    const EDGE_CHARS: usize = 16;

    let name_capacity: usize = tree
        .persons()
        .iter()
        .filter(|person| !person.is_spouse())
        .map(|person| person.name().full_name().len())
        .sum();
    let num_nodes = tree.num_blood_relatives();

    DOT_HEADER.len() + num_nodes * (NODE_CHARS + EDGE_CHARS) + name_capacity + BUFFER_CHARS
}
