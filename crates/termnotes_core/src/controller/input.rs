//! Validation of raw input lines.

use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected user input. Never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not a plain run of ASCII digits.
    NotANumber(String),
    /// Digits that do not fit the target integer type.
    OutOfRange(String),
    /// A required title is empty after trimming.
    BlankTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(raw) => write!(f, "`{raw}` is not a non-negative integer"),
            Self::OutOfRange(raw) => write!(f, "`{raw}` is out of range"),
            Self::BlankTitle => write!(f, "title cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Parses a line holding a non-negative integer.
///
/// Surrounding whitespace is ignored. Signs, separators and empty input are
/// rejected.
pub fn parse_non_negative(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber(trimmed.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ValidationError::OutOfRange(trimmed.to_string()))
}

/// Parses a note id typed by the user.
pub fn parse_note_id(input: &str) -> Result<NoteId, ValidationError> {
    let value = parse_non_negative(input)?;
    NoteId::try_from(value).map_err(|_| ValidationError::OutOfRange(input.trim().to_string()))
}

/// Returns the trimmed title, or an error when nothing is left.
pub fn require_title(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    Ok(trimmed)
}
