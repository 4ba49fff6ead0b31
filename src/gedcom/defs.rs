//! Tags and constants for the GEDCOM writer.

pub(crate) const HEAD: &str = "HEAD";
pub(crate) const GEDC: &str = "GEDC";
pub(crate) const VERS: &str = "VERS";
pub(crate) const FORM: &str = "FORM";
pub(crate) const CHAR: &str = "CHAR";
pub(crate) const TRLR: &str = "TRLR";

// Individual record
pub(crate) const INDI: &str = "INDI";
pub(crate) const NAME: &str = "NAME";
pub(crate) const GIVN: &str = "GIVN";
pub(crate) const SURN: &str = "SURN";
pub(crate) const NOTE: &str = "NOTE";
pub(crate) const FAMS: &str = "FAMS";
pub(crate) const CHIL: &str = "CHIL";

// Family record
pub(crate) const FAM: &str = "FAM";
pub(crate) const HUSB: &str = "HUSB";
pub(crate) const WIFE: &str = "WIFE";

/// GEDCOM version declared in the header
pub(crate) const GEDCOM_VERSION: &str = "5.5.1";

/// GEDCOM form declared in the header
pub(crate) const GEDCOM_FORM: &str = "LINEAGE-LINKED";

/// Character set declared in the header
pub(crate) const GEDCOM_CHARSET: &str = "UTF-8";

/// Cross-reference prefix of individual records
pub(crate) const INDIVIDUAL_PREFIX: char = 'I';

/// Cross-reference prefix of family records
pub(crate) const FAMILY_PREFIX: char = 'F';
