//! Cardholder name entry.
//!
//! The name field keeps letters and whitespace only, uppercases them and
//! stops at [`MAX_NAME_LENGTH`] characters. Letters are Unicode
//! alphabetic characters, so accented names survive.
//!
//! ```
//! use cc_entry::name::{format_name, name_preview};
//!
//! assert_eq!(format_name("  john o'brien 123!!"), "JOHN OBRIEN");
//! assert_eq!(name_preview("   "), "YOUR NAME");
//! ```

use thiserror::Error;

/// Maximum number of kept characters.
pub const MAX_NAME_LENGTH: usize = 20;

/// Shown on the card preview while no name has been typed.
pub const NAME_PLACEHOLDER: &str = "YOUR NAME";

/// Errors that can occur during name validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Nothing but whitespace was entered.
    #[error("cardholder name is empty")]
    Empty,
}

/// Filters, uppercases and clamps a name to `limit` characters, without
/// trimming.
///
/// The limit applies after uppercasing, since some letters uppercase to
/// more than one character (`ß` becomes `SS`).
pub fn filter_name(input: &str, limit: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_uppercase)
        .take(limit)
        .collect()
}

/// Formats a name for display.
///
/// Letters and whitespace are kept, uppercased and clamped to
/// [`MAX_NAME_LENGTH`] characters; surrounding whitespace is trimmed.
pub fn format_name(input: &str) -> String {
    filter_name(input, MAX_NAME_LENGTH).trim().to_owned()
}

/// Formats a name for the card preview, falling back to
/// [`NAME_PLACEHOLDER`] when nothing printable remains.
pub fn name_preview(input: &str) -> String {
    preview_or(input, MAX_NAME_LENGTH, NAME_PLACEHOLDER)
}

pub(crate) fn preview_or(input: &str, limit: usize, placeholder: &str) -> String {
    let formatted = filter_name(input, limit);
    let formatted = formatted.trim();
    if formatted.is_empty() {
        placeholder.to_owned()
    } else {
        formatted.to_owned()
    }
}

/// Validates a cardholder name.
pub fn validate_name(input: &str) -> Result<(), NameError> {
    if input.trim().is_empty() {
        return Err(NameError::Empty);
    }
    Ok(())
}

/// Returns true if the name is non-empty after trimming whitespace.
#[inline]
pub fn name_valid(input: &str) -> bool {
    validate_name(input).is_ok()
}
