//! Shared parsing infrastructure.
//!
//! This module provides the crate-wide error type and text utilities used
//! by the book parser and the writers.

pub mod parsing_error;
pub mod utils;

pub use parsing_error::{ParsingError, ParsingErrorType};
