//! The batch conversion from a raw book transcription to DOT and GEDCOM files.
//!
//! A [Conversion] runs the fixed pipeline
//! 1. normalize the raw transcription and write the cleaned transcription,
//! 2. parse the cleaned transcription into a family tree,
//! 3. write the full and the trimmed (ancestry) DOT graph,
//! 4. write the full and the trimmed GEDCOM document.
//!
//! Every file is replaced atomically; any error aborts the run.

use crate::book::{BookParser, normalize_file, to_cleaned_text};
use crate::dot::write_dot_file;
use crate::gedcom::write_gedcom_file;
use crate::model::{Anchor, FamilyTree, View};
use crate::output::write_atomically;
use crate::parser::ParsingError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default raw transcription
const DEFAULT_INPUT: &str = "res/wallicks.txt";
/// Default directory all outputs are written to
const DEFAULT_OUTPUT_DIR: &str = "res";
/// Default stem of all output file names
const DEFAULT_STEM: &str = "wallicks";
/// Default first name the trimmed views are anchored at
const DEFAULT_ANCHOR_NAME: &str = "Kerby";

// =#========================================================================#=
// CONVERSION
// =#========================================================================#=
/// Configuration of a batch conversion.
///
/// Output files are named after a stem within the output directory:
///
/// | File | Content |
/// |------|---------|
/// | `<stem>_cleaned.txt` | normalized transcription |
/// | `<stem>.dot` | full graph |
/// | `<stem>_trimmed.dot` | ancestry graph of the anchor |
/// | `<stem>.ged` | full GEDCOM |
/// | `<stem>_trimmed.ged` | ancestry GEDCOM of the anchor |
///
/// # Example
/// ```no_run
/// use genbook::convert::Conversion;
/// use genbook::model::Anchor;
///
/// Conversion::default()
///     .with_input("books/smith.txt")
///     .with_output("out", "smith")
///     .with_anchor(Anchor::first_name("Ann"))
///     .run()?;
/// # Ok::<(), genbook::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Conversion {
    input: PathBuf,
    output_dir: PathBuf,
    stem: String,
    anchor: Anchor,
    parser: BookParser,
}

impl Default for Conversion {
    /// The legacy setup: `res/wallicks.txt` into `res/`, anchored at the
    /// first child of the first person named "Kerby".
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            stem: DEFAULT_STEM.to_string(),
            anchor: Anchor::first_name(DEFAULT_ANCHOR_NAME).then_child(0),
            parser: BookParser::new(),
        }
    }
}

impl Conversion {
    /// Sets the raw transcription to read.
    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.input = input.as_ref().to_path_buf();
        self
    }

    /// Sets the output directory and the stem of all output file names.
    pub fn with_output<P: AsRef<Path>, S: Into<String>>(mut self, dir: P, stem: S) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self.stem = stem.into();
        self
    }

    /// Sets the anchor of the trimmed views.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the parser configuration.
    pub fn with_parser(mut self, parser: BookParser) -> Self {
        self.parser = parser;
        self
    }

    /// Returns the path of the output file with the given suffix and extension.
    pub fn output_path(&self, suffix: &str, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.{}", self.stem, suffix, extension))
    }

    /// Runs the full conversion, returning the parsed tree.
    ///
    /// # Errors
    /// Aborts on the first I/O, parsing or anchor error. Files written
    /// before the error remain, no file is ever partially written.
    pub fn run(&self) -> Result<FamilyTree, ParsingError> {
        info!(input = %self.input.display(), "normalizing transcription");
        let records = normalize_file(&self.input)?;
        let cleaned_path = self.output_path("_cleaned", "txt");
        write_atomically(&cleaned_path, &to_cleaned_text(&records))?;

        info!(input = %cleaned_path.display(), records = records.len(), "parsing cleaned transcription");
        let tree = self.parser.clone().parse_file(&cleaned_path)?;

        let anchor = tree.resolve_anchor(&self.anchor)?;
        info!(anchor = %tree[anchor].name(), "writing outputs");

        write_dot_file(self.output_path("", "dot"), &tree, View::Full)?;
        write_dot_file(self.output_path("_trimmed", "dot"), &tree, View::Ancestry(anchor))?;
        write_gedcom_file(self.output_path("", "ged"), &tree, View::Full)?;
        write_gedcom_file(self.output_path("_trimmed", "ged"), &tree, View::Ancestry(anchor))?;

        Ok(tree)
    }
}
