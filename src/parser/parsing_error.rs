//! Error types for book parsing and tree conversion.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while turning a book transcription into a
//! family tree and locating persons in it.

use thiserror::Error;

/// Maximal number of characters of the offending line kept as context
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing a book or resolving an anchor.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Malformed record - {0}")]
    MalformedRecord(String),
    #[error("Generation gap - no person seen at generation {0} yet")]
    GenerationGap(usize),
    #[error("Generation {generation} exceeds configured maximum of {max}")]
    GenerationLimitExceeded { generation: usize, max: usize },
    #[error("Anchor not found - {0}")]
    AnchorNotFound(String),
    #[error("Invalid tree structure - {0}")]
    StructuralViolation(String),
    #[error("Id sequence exhausted - no id left after {0}")]
    IdsExhausted(u32),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line number and line excerpt).
#[derive(Error, Debug)]
#[error("{kind}{}{}", line_suffix(.line), context_suffix(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    /// 1-based number of the logical line, if the error stems from one
    line: Option<usize>,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and the offending logical line
    pub fn at_line(kind: ParsingErrorType, line_number: usize, line: &str) -> Self {
        Self {
            kind,
            line: Some(line_number),
            context: line.chars().take(DEFAULT_CONTEXT_LENGTH).collect(),
        }
    }

    /// Create a ParsingError without line context (e.g. for structural errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            line: None,
            context: String::new(),
        }
    }

    /// Convenience constructor for MalformedRecord
    pub fn malformed_record(line_number: usize, line: &str, msg: impl Into<String>) -> Self {
        Self::at_line(ParsingErrorType::MalformedRecord(msg.into()), line_number, line)
    }

    /// Convenience constructor for GenerationGap
    pub fn generation_gap(line_number: usize, line: &str, generation: usize) -> Self {
        Self::at_line(ParsingErrorType::GenerationGap(generation), line_number, line)
    }

    /// Convenience constructor for GenerationLimitExceeded
    pub fn generation_limit_exceeded(
        line_number: usize,
        line: &str,
        generation: usize,
        max: usize,
    ) -> Self {
        Self::at_line(
            ParsingErrorType::GenerationLimitExceeded { generation, max },
            line_number,
            line,
        )
    }

    /// Convenience constructor for IdsExhausted
    pub fn ids_exhausted(line_number: usize, line: &str, last_id: u32) -> Self {
        Self::at_line(ParsingErrorType::IdsExhausted(last_id), line_number, line)
    }

    /// Convenience constructor for AnchorNotFound
    pub fn anchor_not_found(msg: impl Into<String>) -> Self {
        Self::without_context(ParsingErrorType::AnchorNotFound(msg.into()))
    }

    /// Convenience constructor for StructuralViolation
    pub fn structural_violation(msg: impl Into<String>) -> Self {
        Self::without_context(ParsingErrorType::StructuralViolation(msg.into()))
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the 1-based logical line number where the error occurred, if known
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the excerpt of the offending line (empty without line context)
    pub fn context(&self) -> &str {
        &self.context
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context: {context}")
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        Self::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
