//! Card number grouping and masking.
//!
//! This module provides the pure string transforms behind the card-number
//! field and its preview:
//!
//! - [`format_grouped`] groups the digits typed so far, stopping as soon as
//!   the digits run out (the editable field).
//! - [`masked_preview`] groups the same way but pads every missing position
//!   with a fill character (the card preview face).
//!
//! Both take the grouping pattern explicitly; [`format_card_number`] picks
//! the pattern from the detected network.
//!
//! # Example
//!
//! ```
//! use cc_entry::format::{format_card_number, format_grouped, masked_preview};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//!
//! assert_eq!(format_grouped("411111", &[4, 4, 4, 4]), "4111 11");
//! assert_eq!(masked_preview("411111", &[4, 4, 4, 4], '•'), "4111 11•• •••• ••••");
//! ```
//!
//! # Lossy patterns
//!
//! Digits beyond the sum of the pattern are dropped silently. Callers clamp
//! the digit string to the network's PAN length first, so with the
//! network's own pattern nothing is lost.

use crate::detect::classify;

/// Character placed between digit groups.
pub const GROUP_SEPARATOR: char = ' ';

/// Strips everything except ASCII digits.
///
/// # Example
///
/// ```
/// use cc_entry::format::digits_only;
///
/// assert_eq!(digits_only("4111 1111-1111.1111"), "4111111111111111");
/// assert_eq!(digits_only("12/25"), "1225");
/// ```
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Counts the ASCII digits in a string.
#[inline]
pub fn digit_count(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Groups `digits` by `pattern`, joining groups with a single space.
///
/// Stops once the digits are exhausted: no trailing separator and no
/// padding. An empty input yields an empty string.
pub fn format_grouped(digits: &str, pattern: &[usize]) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + pattern.len());
    let mut pos = 0;

    for &group_size in pattern {
        if pos >= chars.len() {
            break;
        }
        if pos > 0 {
            result.push(GROUP_SEPARATOR);
        }
        let end = (pos + group_size).min(chars.len());
        result.extend(&chars[pos..end]);
        pos = end;
    }

    result
}

/// Groups `digits` by `pattern`, padding missing positions with `fill`.
///
/// The result always covers the full pattern, so an empty input renders
/// as the blank card face.
pub fn masked_preview(digits: &str, pattern: &[usize], fill: char) -> String {
    let mut chars = digits.chars();
    let total: usize = pattern.iter().sum();
    let mut result = String::with_capacity(total + pattern.len());

    for (i, &group_size) in pattern.iter().enumerate() {
        if i > 0 {
            result.push(GROUP_SEPARATOR);
        }
        for _ in 0..group_size {
            result.push(chars.next().unwrap_or(fill));
        }
    }

    result
}

/// Formats a card number using the grouping of its detected network.
///
/// Non-digit characters are stripped first and the digits are clamped to
/// the network's PAN length.
pub fn format_card_number(input: &str) -> String {
    let mut digits = digits_only(input);
    let network = classify(&digits);
    digits.truncate(network.pan_length());
    format_grouped(&digits, network.grouping())
}

/// Splits a card number into its display groups.
///
/// ```
/// use cc_entry::format::split_into_groups;
///
/// assert_eq!(split_into_groups("30569309025904"), vec!["3056", "930902", "5904"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    format_card_number(input)
        .split(GROUP_SEPARATOR)
        .filter(|group| !group.is_empty())
        .map(str::to_owned)
        .collect()
}
