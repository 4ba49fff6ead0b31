//! Reconstruction of a [FamilyTree] from normalized book lines.

use crate::book::defs::{DEFAULT_MAX_GENERATION, PERSON_RECORD, SPOUSE_RECORD, SPOUSE_RECORD_START};
use crate::book::record::parse_record;
use crate::model::{FamilyTree, IdSequence, PersonId, PersonIndex};
use crate::parser::ParsingError;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

// =#========================================================================#=
// BOOK PARSER
// =#========================================================================#=
/// Parser (configuration) for normalized book transcriptions.
///
/// Consumes one logical line per record (see
/// [normalize_lines](crate::book::normalize_lines)) and builds a
/// [FamilyTree]. Ids are drawn from the parser's own [IdSequence], so
/// parsing several books with the same parser never reuses an id.
///
/// # Configuration
/// * `with_max_generation(max)` - Deepest generation accepted; deeper
///   records fail with `GenerationLimitExceeded`
/// * `with_id_sequence(ids)` - Sequence ids are drawn from
///
/// # Format
/// Per logical line:
/// * `person ::= '.'* DIGIT+ ' ' record`
/// * `spouse ::= ('.' | ' ')* '+' [DIGIT+ ' '] record`
/// * `record ::= name { ' ' label ': ' value }*`
///
/// Furthermore:
/// * A person of generation `g` becomes a child of the person last seen at
///   generation `g - 1`; generation 1 is the top of the tree
/// * A spouse without a generation attaches to the last person record,
///   with a generation to the person last seen at that generation
/// * Blank lines are skipped
///
/// # Example
/// ```
/// use genbook::book::BookParser;
///
/// let book = "1 John Smith b: 1800\n+ Mary Jones\n.2 Ann Smith\n.2 Tom Smith";
/// let tree = BookParser::new().parse_str(book).unwrap();
///
/// assert_eq!(tree.root().first_name(), "John");
/// assert_eq!(tree.root().children().len(), 2);
/// assert_eq!(tree.spouse_of(tree.root_index()).unwrap().first_name(), "Mary");
/// ```
#[derive(Debug, Clone)]
pub struct BookParser {
    max_generation: usize,
    ids: IdSequence,
}

impl BookParser {
    /// Creates a new `BookParser` with default settings.
    ///
    /// By default:
    /// - Generations up to [DEFAULT_MAX_GENERATION] are accepted, and
    /// - Ids start at [FIRST_PERSON_ID](crate::model::FIRST_PERSON_ID).
    pub fn new() -> Self {
        Self {
            max_generation: DEFAULT_MAX_GENERATION,
            ids: IdSequence::new(),
        }
    }

    /// Sets the deepest generation accepted.
    pub fn with_max_generation(mut self, max_generation: usize) -> Self {
        self.max_generation = max_generation;
        self
    }

    /// Sets the sequence ids are drawn from.
    pub fn with_id_sequence(mut self, ids: IdSequence) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the id sequence, positioned after the last id handed out.
    pub fn id_sequence(&self) -> &IdSequence {
        &self.ids
    }

    /// Parses normalized book lines into a family tree.
    ///
    /// # Errors
    /// Aborts on the first offending line with
    /// * `MalformedRecord` - line does not follow the record grammar
    /// * `GenerationGap` - parent generation (or explicit spouse generation) never seen
    /// * `GenerationLimitExceeded` - generation deeper than configured
    /// * `IdsExhausted` - the id sequence has no id left
    ///
    /// and after the last line with `StructuralViolation` unless exactly one
    /// generation-1 record was found.
    pub fn parse_lines<I, S>(&mut self, lines: I) -> Result<FamilyTree, ParsingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = BuildState::default();

        for (i, line) in lines.into_iter().enumerate() {
            let line_number = i + 1;
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            if SPOUSE_RECORD_START.is_match(line) {
                self.parse_spouse_line(&mut state, line_number, line)?;
            } else {
                self.parse_person_line(&mut state, line_number, line)?;
            }
        }

        state.into_tree()
    }

    /// Parses a cleaned transcription, one record per line.
    pub fn parse_str(&mut self, cleaned: &str) -> Result<FamilyTree, ParsingError> {
        self.parse_lines(cleaned.lines())
    }

    /// Reads and parses a cleaned transcription file (UTF-8).
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<FamilyTree, ParsingError> {
        let cleaned = fs::read_to_string(path)?;
        self.parse_str(&cleaned)
    }
}

impl Default for BookParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Record Parsing (private)
// ============================================================================
impl BookParser {
    /// Parses a person record and places it below the last person seen one
    /// generation up.
    fn parse_person_line(
        &mut self,
        state: &mut BuildState,
        line_number: usize,
        line: &str,
    ) -> Result<(), ParsingError> {
        let captures = PERSON_RECORD.captures(line).ok_or_else(|| {
            ParsingError::malformed_record(line_number, line, "expected generation number followed by a name")
        })?;

        let generation = captures[1]
            .parse::<usize>()
            .map_err(|_| ParsingError::malformed_record(line_number, line, "generation number out of range"))?;
        if generation == 0 {
            return Err(ParsingError::malformed_record(line_number, line, "generation must be at least 1"));
        }
        if generation > self.max_generation {
            return Err(ParsingError::generation_limit_exceeded(
                line_number,
                line,
                generation,
                self.max_generation,
            ));
        }

        let parent = if generation == 1 {
            None
        } else {
            Some(
                state
                    .last_seen(generation - 1)
                    .ok_or_else(|| ParsingError::generation_gap(line_number, line, generation - 1))?,
            )
        };

        let (name, properties) = parse_record(&captures[2])
            .ok_or_else(|| ParsingError::malformed_record(line_number, line, "missing name"))?;

        let id = self.next_id(line_number, line)?;
        debug!(line = line_number, id, generation, name = %name, "person record");
        let index = state.tree.add_person(id, generation, name, properties);
        match parent {
            Some(parent) => state.tree.add_child(parent, index),
            None => state.top_level.push(index),
        }
        state.set_last_seen(generation, index);
        state.last = Some(index);

        Ok(())
    }

    /// Parses a spouse record and attaches it to the addressed person.
    ///
    /// An explicit generation resolves to whoever currently occupies that
    /// generation slot, which may be a later sibling of the person the
    /// transcription meant.
    fn parse_spouse_line(
        &mut self,
        state: &mut BuildState,
        line_number: usize,
        line: &str,
    ) -> Result<(), ParsingError> {
        let captures = SPOUSE_RECORD
            .captures(line)
            .ok_or_else(|| ParsingError::malformed_record(line_number, line, "expected spouse record"))?;

        let partner = match captures.get(1) {
            Some(generation) => {
                let generation = generation
                    .as_str()
                    .parse::<usize>()
                    .map_err(|_| ParsingError::malformed_record(line_number, line, "generation number out of range"))?;
                if generation == 0 {
                    return Err(ParsingError::malformed_record(line_number, line, "generation must be at least 1"));
                }
                state
                    .last_seen(generation)
                    .ok_or_else(|| ParsingError::generation_gap(line_number, line, generation))?
            }
            None => state.last.ok_or_else(|| {
                ParsingError::malformed_record(line_number, line, "spouse record before any person record")
            })?,
        };

        let (name, properties) = parse_record(&captures[2])
            .ok_or_else(|| ParsingError::malformed_record(line_number, line, "missing name"))?;

        if let Some(existing) = state.tree.spouse_of(partner) {
            warn!(
                line = line_number,
                partner = %state.tree[partner].name(),
                kept = %existing.name(),
                ignored = %name,
                "person already has a spouse, ignoring further spouse record"
            );
            return Ok(());
        }

        let id = self.next_id(line_number, line)?;
        debug!(line = line_number, id, partner = state.tree[partner].id(), name = %name, "spouse record");
        state.tree.add_spouse(partner, id, name, properties);

        Ok(())
    }
}

impl BookParser {
    /// Draws the next id, failing once the sequence is exhausted.
    fn next_id(&mut self, line_number: usize, line: &str) -> Result<PersonId, ParsingError> {
        self.ids
            .next_id()
            .ok_or_else(|| ParsingError::ids_exhausted(line_number, line, PersonId::MAX))
    }
}

// =#========================================================================#=
// BUILD STATE
// =#========================================================================#=
/// Mutable state of a single parse.
#[derive(Default)]
struct BuildState {
    tree: FamilyTree,
    /// Person most recently seen per generation (index = generation);
    /// slot 0 belongs to the synthetic root and stays empty
    last_seen: Vec<Option<PersonIndex>>,
    /// Most recent person record, target of spouses without generation
    last: Option<PersonIndex>,
    /// Children of the synthetic root, i.e. generation-1 persons
    top_level: Vec<PersonIndex>,
}

impl BuildState {
    fn last_seen(&self, generation: usize) -> Option<PersonIndex> {
        self.last_seen.get(generation).copied().flatten()
    }

    fn set_last_seen(&mut self, generation: usize, index: PersonIndex) {
        if self.last_seen.len() <= generation {
            self.last_seen.resize(generation + 1, None);
        }
        self.last_seen[generation] = Some(index);
    }

    /// Replaces the synthetic root by its single child and returns the tree.
    fn into_tree(self) -> Result<FamilyTree, ParsingError> {
        let mut tree = self.tree;
        match self.top_level.as_slice() {
            [root] => {
                tree.set_root(*root);
                info!(
                    persons = tree.num_blood_relatives(),
                    spouses = tree.num_spouses(),
                    generations = tree.max_generation(),
                    "parsed book"
                );
                Ok(tree)
            }
            [] => Err(ParsingError::structural_violation("no generation-1 record found")),
            more => Err(ParsingError::structural_violation(format!(
                "{} generation-1 records found, expected exactly one",
                more.len()
            ))),
        }
    }
}
