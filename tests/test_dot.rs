use genbook::book::{BookParser, parse_str};
use genbook::dot::{to_dot, write_dot_file};
use genbook::model::{Anchor, View};
use std::fs;

const WALLICKS: &str = "\
1 Adam Wallick b: 1790 d: 1860
+ Eve Brown b: 1795
.2 Abel Wallick b: 1815
..3 Kerby Wallick
...4 Dora Wallick
...4 Ezra Wallick
..3 Fay Wallick
.2 Cain Wallick
+ Ada Stone
..3 Gus Wallick";

// --- TESTS FULL VIEW ---
#[test]
fn test_full_graph() {
    let tree = parse_str(WALLICKS).unwrap();
    let dot = to_dot(&tree, View::Full);

    let expected = "\
digraph G {
1 [label=\"1. Adam Wallick\"]
3 [label=\"2. Abel Wallick\"]
4 [label=\"3. Kerby Wallick\"]
5 [label=\"4. Dora Wallick\"]
4 -> 5
6 [label=\"4. Ezra Wallick\"]
4 -> 6
3 -> 4
7 [label=\"3. Fay Wallick\"]
3 -> 7
1 -> 3
8 [label=\"2. Cain Wallick\"]
10 [label=\"3. Gus Wallick\"]
8 -> 10
1 -> 8
}
";
    assert_eq!(dot, expected);
}

#[test]
fn test_full_graph_counts() {
    let tree = parse_str(WALLICKS).unwrap();
    let dot = to_dot(&tree, View::Full);

    let edges = dot.lines().filter(|line| line.contains(" -> ")).count();
    let nodes = dot.lines().filter(|line| line.contains("[label=")).count();
    assert_eq!(edges, tree.num_blood_relatives() - 1);
    assert_eq!(nodes, tree.num_blood_relatives());
}

#[test]
fn test_spouses_are_not_drawn() {
    let tree = parse_str(WALLICKS).unwrap();
    let dot = to_dot(&tree, View::Full);
    assert!(!dot.contains("Eve"));
    assert!(!dot.contains("Ada Stone"));
}

#[test]
fn test_single_person() {
    let tree = parse_str("1 Adam").unwrap();
    assert_eq!(
        to_dot(&tree, View::Full),
        "digraph G {\n1 [label=\"1. Adam\"]\n}\n"
    );
}

#[test]
fn test_labels_are_escaped() {
    let tree = parse_str("1 John \"Jack\" Doe\n.2 Back\\slash").unwrap();
    let dot = to_dot(&tree, View::Full);

    assert!(dot.contains("1 [label=\"1. John \\\"Jack\\\" Doe\"]\n"));
    assert!(dot.contains("2 [label=\"2. Back\\\\slash\"]\n"));
}

#[test]
fn test_very_deep_tree() {
    const DEPTH: usize = 50_000;
    let book: String = (1..=DEPTH).map(|g| format!("{g} P{g}\n")).collect();
    let tree = BookParser::new()
        .with_max_generation(DEPTH)
        .parse_str(&book)
        .unwrap();

    let dot = to_dot(&tree, View::Full);
    assert_eq!(dot.lines().filter(|line| line.contains(" -> ")).count(), DEPTH - 1);
    assert!(dot.contains("\n49999 -> 50000\n"));
    // Edges close subtrees, so the deepest edge comes first
    let first_edge = dot.lines().find(|line| line.contains(" -> ")).unwrap();
    assert_eq!(first_edge, "49999 -> 50000");
    assert!(dot.ends_with("1 -> 2\n}\n"));
}

#[test]
fn test_output_is_deterministic() {
    let tree = parse_str(WALLICKS).unwrap();
    assert_eq!(to_dot(&tree, View::Full), to_dot(&tree, View::Full));
}

// --- TESTS ANCESTRY VIEW ---
#[test]
fn test_ancestry_graph() {
    let tree = parse_str(WALLICKS).unwrap();
    let anchor = tree
        .resolve_anchor(&Anchor::first_name("Kerby").then_child(0))
        .unwrap();
    let dot = to_dot(&tree, View::Ancestry(anchor));

    let expected = "\
digraph G {
5 [label=\"4. Dora Wallick\" color=\"blue\"]
4 [label=\"3. Kerby Wallick\" color=\"blue\"]
5 [label=\"4. Dora Wallick\"]
4 -> 5
6 [label=\"4. Ezra Wallick\"]
4 -> 6
3 [label=\"2. Abel Wallick\" color=\"blue\"]
4 [label=\"3. Kerby Wallick\"]
3 -> 4
7 [label=\"3. Fay Wallick\"]
3 -> 7
1 [label=\"1. Adam Wallick\" color=\"blue\"]
3 [label=\"2. Abel Wallick\"]
1 -> 3
8 [label=\"2. Cain Wallick\"]
1 -> 8
}
";
    assert_eq!(dot, expected);
}

#[test]
fn test_ancestry_of_root() {
    let tree = parse_str("1 Adam\n.2 Abel\n.2 Cain").unwrap();
    let dot = to_dot(&tree, View::Ancestry(tree.root_index()));

    assert_eq!(
        dot,
        "digraph G {\n\
         1 [label=\"1. Adam\" color=\"blue\"]\n\
         2 [label=\"2. Abel\"]\n\
         1 -> 2\n\
         3 [label=\"2. Cain\"]\n\
         1 -> 3\n\
         }\n"
    );
}

#[test]
fn test_ancestry_leaves_out_other_branches() {
    let tree = parse_str(WALLICKS).unwrap();
    let dora = tree.find_by_first_name("Dora").unwrap();
    let dot = to_dot(&tree, View::Ancestry(dora));

    // Gus is a grandchild of Adam but not on the spine
    assert!(!dot.contains("Gus"));
    assert_eq!(dot.matches("color=\"blue\"").count(), 4);
}

// --- TESTS FILE OUTPUT ---
#[test]
fn test_write_dot_file_replaces_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.dot");
    fs::write(&path, "stale content").unwrap();

    let tree = parse_str(WALLICKS).unwrap();
    write_dot_file(&path, &tree, View::Full).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), to_dot(&tree, View::Full));
    // Only the destination is left in the directory
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_write_dot_file_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("family.dot");

    let tree = parse_str("1 Adam").unwrap();
    assert!(write_dot_file(&path, &tree, View::Full).is_err());
    assert!(!path.exists());
}
