use genbook::book::parse_str;
use genbook::gedcom::{to_gedcom, write_gedcom_file};
use genbook::model::View;
use std::fs;

const SMITHS: &str = "\
1 John Michael Smith b: 1790
+ Mary Jones
.2 Ann Smith
..3 Tom";

// --- TESTS FULL VIEW ---
#[test]
fn test_full_document() {
    let tree = parse_str(SMITHS).unwrap();
    let gedcom = to_gedcom(&tree, View::Full);

    insta::assert_snapshot!(gedcom, @r"
    0 HEAD
    1 GEDC
    2 VERS 5.5.1
    2 FORM LINEAGE-LINKED
    1 CHAR UTF-8
    0 @I1@ INDI
    1 NAME John Michael /Smith/
    2 GIVN John Michael
    2 SURN Smith
    1 NOTE b: 1790
    1 FAMS @F1@
    1 CHIL @I3@
    0 @I2@ INDI
    1 NAME Mary /Jones/
    2 GIVN Mary
    2 SURN Jones
    1 FAMS @F1@
    0 @F1@ FAM
    1 HUSB @I1@
    1 WIFE @I2@
    0 @I3@ INDI
    1 NAME Ann /Smith/
    2 GIVN Ann
    2 SURN Smith
    1 CHIL @I4@
    0 @I4@ INDI
    1 NAME Tom
    2 GIVN Tom
    0 TRLR
    ");
}

#[test]
fn test_every_person_once() {
    let tree = parse_str(SMITHS).unwrap();
    let gedcom = to_gedcom(&tree, View::Full);

    assert_eq!(gedcom.matches(" INDI\n").count(), tree.num_persons());
    assert_eq!(gedcom.matches(" FAM\n").count(), tree.num_spouses());
    assert_eq!(gedcom.matches("0 TRLR\n").count(), 1);
    assert!(gedcom.ends_with("0 TRLR\n"));
}

#[test]
fn test_properties_in_label_order() {
    let tree = parse_str("1 Adam d: 1860 b: 1790 res: Lancaster").unwrap();
    let gedcom = to_gedcom(&tree, View::Full);

    assert!(gedcom.contains("1 NOTE b: 1790\n1 NOTE d: 1860\n1 NOTE res: Lancaster\n"));
}

#[test]
fn test_surname_rendering() {
    let tree = parse_str("1 John Smith").unwrap();
    assert!(to_gedcom(&tree, View::Full).contains("1 NAME John /Smith/\n"));

    let tree = parse_str("1 John").unwrap();
    let gedcom = to_gedcom(&tree, View::Full);
    assert!(gedcom.contains("1 NAME John\n2 GIVN John\n"));
    assert!(!gedcom.contains("SURN"));
}

#[test]
fn test_at_signs_are_doubled() {
    let tree = parse_str("1 Jo@n Sm@th email: jo@smith.org").unwrap();
    let gedcom = to_gedcom(&tree, View::Full);

    assert!(gedcom.contains("1 NAME Jo@@n /Sm@@th/\n2 GIVN Jo@@n\n2 SURN Sm@@th\n"));
    assert!(gedcom.contains("1 NOTE email: jo@@smith.org\n"));
    // Cross-references keep their single delimiters
    assert!(gedcom.contains("0 @I1@ INDI\n"));
}

// --- TESTS ANCESTRY VIEW ---
#[test]
fn test_ancestry_document() {
    let tree = parse_str(SMITHS).unwrap();
    let tom = tree.find_by_first_name("Tom").unwrap();
    let gedcom = to_gedcom(&tree, View::Ancestry(tom));

    insta::assert_snapshot!(gedcom, @r"
    0 HEAD
    1 GEDC
    2 VERS 5.5.1
    2 FORM LINEAGE-LINKED
    1 CHAR UTF-8
    0 @I4@ INDI
    1 NAME Tom
    2 GIVN Tom
    0 @I3@ INDI
    1 NAME Ann /Smith/
    2 GIVN Ann
    2 SURN Smith
    1 CHIL @I4@
    0 @I1@ INDI
    1 NAME John Michael /Smith/
    2 GIVN John Michael
    2 SURN Smith
    1 NOTE b: 1790
    1 FAMS @F1@
    1 CHIL @I3@
    0 @I2@ INDI
    1 NAME Mary /Jones/
    2 GIVN Mary
    2 SURN Jones
    1 FAMS @F1@
    0 @F1@ FAM
    1 HUSB @I1@
    1 WIFE @I2@
    0 TRLR
    ");
}

#[test]
fn test_ancestry_lists_only_included_children() {
    let tree = parse_str(
        "1 Adam\n+ Eve\n.2 Abel\n..3 Kerby\n...4 Dora\n.2 Cain\n+ Ada\n..3 Gus",
    )
    .unwrap();
    let dora = tree.find_by_first_name("Dora").unwrap();
    let gedcom = to_gedcom(&tree, View::Ancestry(dora));

    // Cain is included as Adam's child, his son Gus is not
    let gus = tree.find_by_first_name("Gus").unwrap();
    let gus_ref = format!("@I{}@", tree[gus].id());
    assert!(!gedcom.contains(&gus_ref));
    assert!(gedcom.contains("1 NAME Cain\n"));
    assert!(gedcom.contains("1 NAME Ada\n"));
}

#[test]
fn test_ancestry_emits_each_person_once() {
    let tree = parse_str("1 Adam\n.2 Abel\n..3 Kerby\n...4 Dora\n...4 Ezra").unwrap();
    let dora = tree.find_by_first_name("Dora").unwrap();
    let gedcom = to_gedcom(&tree, View::Ancestry(dora));

    let names: Vec<&str> = gedcom
        .lines()
        .filter_map(|line| line.strip_prefix("1 NAME "))
        .collect();
    assert_eq!(names, vec!["Dora", "Kerby", "Ezra", "Abel", "Adam"]);
}

// --- TESTS FILE OUTPUT ---
#[test]
fn test_write_gedcom_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.ged");

    let tree = parse_str(SMITHS).unwrap();
    write_gedcom_file(&path, &tree, View::Full).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        to_gedcom(&tree, View::Full)
    );
}
