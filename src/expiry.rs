//! Credit card expiry date entry and validation.
//!
//! Two halves live here:
//!
//! - The keystroke side: [`correct_expiry_digits`] repairs month digits that
//!   can never form a valid month, and [`format_expiry_digits`] inserts the
//!   `/` once the year starts. [`format_expiry`] chains both.
//! - The validation side: [`parse_expiry`] accepts exactly `MM/YY` or
//!   `MM/YYYY`, and [`validate_expiry`] additionally rejects dates before
//!   the current month.
//!
//! # Example
//!
//! ```
//! use cc_entry::expiry::{format_expiry, parse_expiry, validate_expiry_on};
//! use chrono::NaiveDate;
//!
//! assert_eq!(format_expiry("5"), "05");
//! assert_eq!(format_expiry("1327"), "12/27");
//!
//! let expiry = parse_expiry("12/30").unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2030);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! assert!(validate_expiry_on("10/26", today).is_ok());
//! assert!(validate_expiry_on("09/26", today).is_err());
//! ```
//!
//! # Two-digit years
//!
//! `00`-`49` are read as 2000-2049 and `50`-`99` as 1950-1999, so `12/99`
//! is a long-expired card rather than one valid until 2099.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::format::digits_only;

/// Maximum number of digits the expiry field holds (`MMYY`).
pub const MAX_EXPIRY_DIGITS: usize = 4;

/// Separator between month and year.
pub const EXPIRY_SEPARATOR: char = '/';

/// Two-digit years at or below this value belong to the 2000s.
const CENTURY_PIVOT: u16 = 49;

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpiryDate {
    /// Four-digit year (e.g., 2025)
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12) or the year is 0.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) || year == 0 {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card had expired on `today`.
    ///
    /// A card stays valid through the last day of its expiry month.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        let (year, month) = year_month(today);
        (self.year, self.month) < (year, month)
    }

    /// Returns true if the card has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(current_date())
    }

    /// Returns the number of months from `today` until expiration.
    ///
    /// Returns 0 for the expiry month itself and for expired cards.
    pub fn months_until_expiry_on(&self, today: NaiveDate) -> u32 {
        let (year, month) = year_month(today);
        let expiry_months = (self.year as u32) * 12 + (self.month as u32);
        let current_months = (year as u32) * 12 + (month as u32);

        expiry_months.saturating_sub(current_months)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    /// The input string is empty.
    #[error("expiry date is empty")]
    Empty,
    /// The input is not `MM/YY` or `MM/YYYY`.
    #[error("invalid expiry format (expected MM/YY or MM/YYYY)")]
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    #[error("invalid month {0}: must be 1-12")]
    InvalidMonth(u8),
    /// The expiry month is already over.
    #[error("card expired ({month:02}/{year})")]
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

/// Repairs the month digits of a partial expiry.
///
/// Non-digits are dropped and the input is clamped to four digits, then:
///
/// 1. a leading digit above `1` gets a `0` in front (`5` becomes `05`);
/// 2. a month above 12 is capped (`13` becomes `12`);
/// 3. a month of `00` becomes `01`.
///
/// Returns the corrected digits and how many digits were inserted in front
/// of the typed ones, so the caller can keep the caret on the same digit.
/// Running the correction on its own output changes nothing.
///
/// ```
/// use cc_entry::expiry::correct_expiry_digits;
///
/// assert_eq!(correct_expiry_digits("5"), ("05".to_string(), 1));
/// assert_eq!(correct_expiry_digits("1527"), ("1227".to_string(), 0));
/// assert_eq!(correct_expiry_digits("00"), ("01".to_string(), 0));
/// ```
pub fn correct_expiry_digits(input: &str) -> (String, usize) {
    let mut digits = digits_only(input).into_bytes();
    digits.truncate(MAX_EXPIRY_DIGITS);
    let mut inserted = 0;

    if digits.first().is_some_and(|&d| d > b'1') {
        digits.insert(0, b'0');
        digits.truncate(MAX_EXPIRY_DIGITS);
        inserted = 1;
    }

    if digits.len() >= 2 {
        if digits[0] == b'1' && digits[1] > b'2' {
            digits[1] = b'2';
        }
        if digits[0] == b'0' && digits[1] == b'0' {
            digits[1] = b'1';
        }
    }

    let corrected = digits.into_iter().map(char::from).collect();
    (corrected, inserted)
}

/// Inserts the separator after the month once a year digit is present.
///
/// Expects at most four ASCII digits; anything longer is clamped.
///
/// ```
/// use cc_entry::expiry::format_expiry_digits;
///
/// assert_eq!(format_expiry_digits("12"), "12");
/// assert_eq!(format_expiry_digits("123"), "12/3");
/// ```
pub fn format_expiry_digits(digits: &str) -> String {
    let mut result = String::with_capacity(MAX_EXPIRY_DIGITS + 1);
    for (i, c) in digits.chars().take(MAX_EXPIRY_DIGITS).enumerate() {
        if i == 2 {
            result.push(EXPIRY_SEPARATOR);
        }
        result.push(c);
    }
    result
}

/// Corrects and formats raw expiry text.
pub fn format_expiry(input: &str) -> String {
    let (digits, _) = correct_expiry_digits(input);
    format_expiry_digits(&digits)
}

/// Parses an expiry date string.
///
/// Accepts exactly `MM/YY` or `MM/YYYY` after trimming surrounding
/// whitespace.
///
/// # Example
///
/// ```
/// use cc_entry::expiry::{parse_expiry, ExpiryError};
///
/// let expiry = parse_expiry("01/2030").unwrap();
/// assert_eq!(expiry.month(), 1);
/// assert_eq!(expiry.year(), 2030);
///
/// assert_eq!(parse_expiry("13/30"), Err(ExpiryError::InvalidMonth(13)));
/// assert_eq!(parse_expiry("1230"), Err(ExpiryError::InvalidFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let (month_str, year_str) = input
        .split_once(EXPIRY_SEPARATOR)
        .ok_or(ExpiryError::InvalidFormat)?;

    if month_str.len() != 2 || !matches!(year_str.len(), 2 | 4) {
        return Err(ExpiryError::InvalidFormat);
    }
    if !month_str
        .bytes()
        .chain(year_str.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(ExpiryError::InvalidFormat);
    }

    let month: u8 = month_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;
    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    let year: u16 = year_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;
    let year = if year_str.len() == 2 {
        expand_two_digit_year(year)
    } else {
        year
    };

    ExpiryDate::new(month, year).ok_or(ExpiryError::InvalidFormat)
}

/// Maps a two-digit year onto a four-digit one around the century pivot.
#[inline]
const fn expand_two_digit_year(yy: u16) -> u16 {
    if yy <= CENTURY_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Validates an expiry date string against `today`.
pub fn validate_expiry_on(input: &str, today: NaiveDate) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired_on(today) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Validates an expiry date string against the local date.
///
/// # Example
///
/// ```
/// use cc_entry::expiry::validate_expiry;
///
/// assert!(validate_expiry("12/49").is_ok());
/// assert!(validate_expiry("01/20").is_err());
/// ```
pub fn validate_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    validate_expiry_on(input, current_date())
}

/// Returns true if `input` is a well-formed, unexpired date on `today`.
#[inline]
pub fn expiry_valid_on(input: &str, today: NaiveDate) -> bool {
    validate_expiry_on(input, today).is_ok()
}

/// Returns true if `input` is a well-formed, unexpired date.
#[inline]
pub fn expiry_valid(input: &str) -> bool {
    validate_expiry(input).is_ok()
}

/// Returns the local calendar date.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

fn year_month(date: NaiveDate) -> (u16, u8) {
    let year = u16::try_from(date.year()).unwrap_or(0);
    (year, date.month() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_correct_leading_digit() {
        for d in '2'..='9' {
            let (digits, inserted) = correct_expiry_digits(&d.to_string());
            assert_eq!(digits, format!("0{}", d));
            assert_eq!(inserted, 1);
        }
        assert_eq!(correct_expiry_digits("1"), ("1".to_string(), 0));
        assert_eq!(correct_expiry_digits("0"), ("0".to_string(), 0));
    }

    #[test]
    fn test_correct_drops_fourth_digit_after_insert() {
        assert_eq!(correct_expiry_digits("5271"), ("0527".to_string(), 1));
    }

    #[test]
    fn test_correct_month_cap_and_floor() {
        assert_eq!(correct_expiry_digits("13").0, "12");
        assert_eq!(correct_expiry_digits("19").0, "12");
        assert_eq!(correct_expiry_digits("12").0, "12");
        assert_eq!(correct_expiry_digits("10").0, "10");
        assert_eq!(correct_expiry_digits("00").0, "01");
        assert_eq!(correct_expiry_digits("0028").0, "0128");
    }

    #[test]
    fn test_correct_is_fixed_point() {
        for input in ["", "0", "00", "5", "13", "1", "0527", "1299", "9", "2345"] {
            let (once, _) = correct_expiry_digits(input);
            let (twice, inserted) = correct_expiry_digits(&once);
            assert_eq!(once, twice, "input {:?}", input);
            assert_eq!(inserted, 0, "input {:?}", input);
        }
    }

    #[test]
    fn test_format_expiry_digits() {
        assert_eq!(format_expiry_digits(""), "");
        assert_eq!(format_expiry_digits("1"), "1");
        assert_eq!(format_expiry_digits("12"), "12");
        assert_eq!(format_expiry_digits("123"), "12/3");
        assert_eq!(format_expiry_digits("1234"), "12/34");
        assert_eq!(format_expiry_digits("123456"), "12/34");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("12/3"), "12/3");
        assert_eq!(format_expiry("12/"), "12");
        assert_eq!(format_expiry("a"), "");
        assert_eq!(format_expiry("9/30"), "09/30");
        assert_eq!(format_expiry("12/345"), "12/34");
    }

    #[test]
    fn test_parse_mm_yy() {
        let expiry = parse_expiry("12/25").unwrap();
        assert_eq!(expiry.month(), 12);
        assert_eq!(expiry.year(), 2025);
    }

    #[test]
    fn test_parse_mm_yyyy() {
        let expiry = parse_expiry("01/2030").unwrap();
        assert_eq!(expiry.month(), 1);
        assert_eq!(expiry.year(), 2030);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let expiry = parse_expiry("  06/28  ").unwrap();
        assert_eq!(expiry.month(), 6);
        assert_eq!(expiry.year(), 2028);
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_expiry("01/00").unwrap().year(), 2000);
        assert_eq!(parse_expiry("01/49").unwrap().year(), 2049);
        assert_eq!(parse_expiry("01/50").unwrap().year(), 1950);
        assert_eq!(parse_expiry("12/99").unwrap().year(), 1999);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(parse_expiry("00/25"), Err(ExpiryError::InvalidMonth(0)));
        assert_eq!(parse_expiry("13/25"), Err(ExpiryError::InvalidMonth(13)));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_expiry(""), Err(ExpiryError::Empty));
        assert_eq!(parse_expiry("   "), Err(ExpiryError::Empty));
        assert_eq!(parse_expiry("abc"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("1225"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12-25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("1/25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/5"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/255"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12 / 25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("1a/25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("+1/25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/0000"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("１2/25"), Err(ExpiryError::InvalidFormat));
    }

    #[test]
    fn test_expired_boundaries() {
        let today = date(2026, 10, 16);
        assert!(validate_expiry_on("10/26", today).is_ok());
        assert!(validate_expiry_on("10/2026", today).is_ok());
        assert!(validate_expiry_on("11/26", today).is_ok());
        assert!(validate_expiry_on("01/27", today).is_ok());
        assert_eq!(
            validate_expiry_on("09/26", today),
            Err(ExpiryError::Expired { month: 9, year: 2026 })
        );
        assert!(validate_expiry_on("12/25", today).is_err());
        assert!(validate_expiry_on("12/99", today).is_err());
        assert!(!expiry_valid_on("13/30", today));
        assert!(!expiry_valid_on("01/20", today));
    }

    #[test]
    fn test_last_day_of_month_is_valid() {
        assert!(expiry_valid_on("02/28", date(2028, 2, 29)));
        assert!(!expiry_valid_on("02/28", date(2028, 3, 1)));
    }

    #[test]
    fn test_validate_against_clock() {
        assert!(expiry_valid("12/49"));
        assert!(!expiry_valid("01/20"));
        assert!(!expiry_valid(""));
    }

    #[test]
    fn test_expiry_date() {
        assert!(ExpiryDate::new(1, 2025).is_some());
        assert!(ExpiryDate::new(0, 2025).is_none());
        assert!(ExpiryDate::new(13, 2025).is_none());
        assert!(ExpiryDate::new(1, 0).is_none());

        let expiry = ExpiryDate::new(3, 2025).unwrap();
        assert_eq!(expiry.format_short(), "03/25");
        assert_eq!(expiry.format_long(), "03/2025");
        assert_eq!(expiry.to_string(), "03/25");
        assert!(expiry.is_expired());
    }

    #[test]
    fn test_months_until_expiry() {
        let today = date(2026, 10, 16);
        assert_eq!(ExpiryDate::new(12, 2026).unwrap().months_until_expiry_on(today), 2);
        assert_eq!(ExpiryDate::new(10, 2026).unwrap().months_until_expiry_on(today), 0);
        assert_eq!(ExpiryDate::new(1, 2020).unwrap().months_until_expiry_on(today), 0);
    }

    #[test]
    fn test_error_display_has_no_input() {
        assert_eq!(ExpiryError::Empty.to_string(), "expiry date is empty");
        assert_eq!(
            ExpiryError::Expired { month: 3, year: 2020 }.to_string(),
            "card expired (03/2020)"
        );
    }
}
