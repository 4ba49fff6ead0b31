use genbook::book::BookParser;
use genbook::convert::Conversion;
use genbook::model::{Anchor, IdSequence};
use genbook::parser::ParsingErrorType;
use std::fs;
use std::path::Path;

const RAW_WALLICKS: &str = "\
THE WALLICK FAMILY
1 Adam Wallick b: 1790 d: 1860
  farmer in Lancaster County
+ Eve Brown b: 1795
.2 Abel Wallick b: 1815
..3 Kerby Wallick
...4 Dora Wallick
...4 Ezra Wallick
.2 Cain Wallick
";

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let input = dir.join("book.txt");
    fs::write(&input, content).unwrap();
    input
}

// --- TESTS PIPELINE ---
#[test]
fn test_conversion_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), RAW_WALLICKS);

    let conversion = Conversion::default()
        .with_input(&input)
        .with_output(dir.path(), "wallicks");
    let tree = conversion.run().unwrap();
    assert_eq!(tree.num_persons(), 7);

    for (suffix, extension) in [
        ("_cleaned", "txt"),
        ("", "dot"),
        ("_trimmed", "dot"),
        ("", "ged"),
        ("_trimmed", "ged"),
    ] {
        let path = conversion.output_path(suffix, extension);
        assert!(path.exists(), "missing {}", path.display());
    }

    let cleaned = fs::read_to_string(conversion.output_path("_cleaned", "txt")).unwrap();
    assert!(cleaned.starts_with("1 Adam Wallick b: 1790 d: 1860 farmer in Lancaster County\n"));
    assert!(!cleaned.contains("THE WALLICK FAMILY"));

    // Default anchor is the first child of Kerby
    let trimmed = fs::read_to_string(conversion.output_path("_trimmed", "dot")).unwrap();
    assert!(trimmed.contains("5 [label=\"4. Dora Wallick\" color=\"blue\"]"));
    assert!(!trimmed.contains("Ezra Wallick\" color"));
}

#[test]
fn test_output_path() {
    let conversion = Conversion::default().with_output("out", "smith");
    assert_eq!(
        conversion.output_path("_trimmed", "ged"),
        Path::new("out").join("smith_trimmed.ged")
    );
}

#[test]
fn test_custom_anchor_and_parser() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), RAW_WALLICKS);

    let tree = Conversion::default()
        .with_input(&input)
        .with_output(dir.path(), "out")
        .with_anchor(Anchor::first_name("Cain"))
        .with_parser(BookParser::new().with_id_sequence(IdSequence::starting_at(10)))
        .run()
        .unwrap();
    assert_eq!(tree.root().id(), 10);

    let trimmed = fs::read_to_string(dir.path().join("out_trimmed.ged")).unwrap();
    assert!(trimmed.starts_with("0 HEAD\n"));
    assert!(trimmed.contains("1 NAME Cain /Wallick/\n"));
    assert!(!trimmed.contains("Kerby"));
}

#[test]
fn test_rerun_replaces_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), RAW_WALLICKS);
    let conversion = Conversion::default()
        .with_input(&input)
        .with_output(dir.path(), "wallicks");

    conversion.run().unwrap();
    let first = fs::read_to_string(conversion.output_path("", "ged")).unwrap();
    conversion.run().unwrap();
    let second = fs::read_to_string(conversion.output_path("", "ged")).unwrap();

    assert_eq!(first, second);
}

// --- TESTS ERRORS ---
#[test]
fn test_missing_anchor_aborts_before_graphs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), RAW_WALLICKS);
    let conversion = Conversion::default()
        .with_input(&input)
        .with_output(dir.path(), "wallicks")
        .with_anchor(Anchor::first_name("Nobody"));

    let err = conversion.run().unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::AnchorNotFound(_)));

    assert!(conversion.output_path("_cleaned", "txt").exists());
    assert!(!conversion.output_path("", "dot").exists());
    assert!(!conversion.output_path("", "ged").exists());
}

#[test]
fn test_parse_error_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "1 Adam\n...4 Dora\n");
    let conversion = Conversion::default()
        .with_input(&input)
        .with_output(dir.path(), "broken");

    let err = conversion.run().unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::GenerationGap(3));
    assert!(!conversion.output_path("", "dot").exists());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let conversion = Conversion::default()
        .with_input(dir.path().join("absent.txt"))
        .with_output(dir.path(), "absent");

    let err = conversion.run().unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
    assert!(!conversion.output_path("_cleaned", "txt").exists());
}
