//! GEDCOM writer for family trees.
//!
//! Produces a minimal lineage-linked GEDCOM 5.5.1 document: a header,
//! one `INDI` record per person, one `FAM` record per married couple and a
//! trailer. Children are referenced by `CHIL` lines directly under their
//! parent's `INDI` record. Properties are kept as `NOTE` lines.
//!
//! # Format
//! ```text
//! 0 HEAD
//! 1 GEDC
//! 2 VERS 5.5.1
//! 2 FORM LINEAGE-LINKED
//! 1 CHAR UTF-8
//! 0 @I1@ INDI
//! 1 NAME John Michael /Smith/
//! 2 GIVN John Michael
//! 2 SURN Smith
//! 1 NOTE b: 1800
//! 1 FAMS @F1@
//! 1 CHIL @I3@
//! 0 @I2@ INDI
//! 1 NAME Mary /Jones/
//! 2 GIVN Mary
//! 2 SURN Jones
//! 1 FAMS @F1@
//! 0 @F1@ FAM
//! 1 HUSB @I1@
//! 1 WIFE @I2@
//! ...
//! 0 TRLR
//! ```

mod defs;
pub mod writer;

pub use self::writer::{to_gedcom, write_gedcom_file};
