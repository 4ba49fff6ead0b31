//! Sequential generator for person cross-reference ids.

/// Cross-reference id of a person, as emitted in DOT and GEDCOM output.
pub type PersonId = u32;

/// First id handed out by a default [IdSequence].
///
/// Id `0` is reserved for the synthetic root of the parse,
/// which never appears in any output.
pub const FIRST_PERSON_ID: PersonId = 1;

// =#========================================================================#=
// ID SEQUENCE
// =#========================================================================#=
/// Monotonically increasing source of [PersonId]s.
///
/// Each parser owns its own sequence, so independent trees can be built
/// side by side (e.g. in tests) without sharing any global counter.
/// Once [PersonId::MAX] has been handed out the sequence is exhausted and
/// never wraps around.
///
/// # Example
/// ```
/// use genbook::model::IdSequence;
///
/// let mut ids = IdSequence::starting_at(10);
/// assert_eq!(ids.next_id(), Some(10));
/// assert_eq!(ids.next_id(), Some(11));
/// assert_eq!(ids.peek(), Some(12));
///
/// let mut last = IdSequence::starting_at(u32::MAX);
/// assert_eq!(last.next_id(), Some(u32::MAX));
/// assert_eq!(last.next_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    /// Next id to hand out, `None` once exhausted
    next: Option<PersonId>,
}

impl IdSequence {
    /// Creates a sequence starting at [FIRST_PERSON_ID].
    pub fn new() -> Self {
        Self::starting_at(FIRST_PERSON_ID)
    }

    /// Creates a sequence whose first id is `first`.
    pub fn starting_at(first: PersonId) -> Self {
        Self { next: Some(first) }
    }

    /// Returns the next id and advances the sequence,
    /// or `None` if the sequence is exhausted.
    pub fn next_id(&mut self) -> Option<PersonId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Returns the id the next call to [IdSequence::next_id] would hand out.
    pub fn peek(&self) -> Option<PersonId> {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
