//! Luhn algorithm implementation for credit card validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! Doubled positions are reduced with `(digit * 2) % 9`, keeping 9 as 9.
//! For digits 1-8 this equals "double, then subtract 9 if above 9"; a 0
//! contributes 0 either way.

/// Transforms a digit sitting at a doubled (odd, counted from the right)
/// position.
#[inline]
const fn double(digit: u8) -> u32 {
    if digit == 9 {
        9
    } else {
        (digit as u32 * 2) % 9
    }
}

/// Validates a digit sequence using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the card number.
///
/// # Returns
///
/// `true` if the checksum is valid, `false` otherwise. Empty input is
/// never valid.
///
/// # Example
///
/// ```
/// use cc_entry::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Validates the digits of a string, ignoring every other character.
///
/// Returns `false` when the string has no digits.
///
/// ```
/// use cc_entry::luhn::is_valid_str;
///
/// assert!(is_valid_str("4111 1111 1111 1111"));
/// assert!(!is_valid_str(""));
/// ```
pub fn is_valid_str(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    validate(&digits)
}

/// Computes the Luhn sum (not reduced modulo 10).
///
/// The rightmost digit is position 0 and is kept; positions 1, 3, 5, ...
/// are doubled.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                double(digit)
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes the digit that makes the
/// full number pass [`validate`].
///
/// ```
/// use cc_entry::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one position left once the check digit
    // is appended, so the current rightmost digit becomes doubled.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                double(digit)
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cards() {
        // Visa
        assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(validate(&[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1]));

        // Mastercard
        assert!(validate(&[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4]));

        // Amex
        assert!(validate(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5]));

        // Diners Club
        assert!(validate(&[3, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8]));
    }

    #[test]
    fn test_invalid_cards() {
        assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!validate(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
        assert!(!is_valid_str(""));
        assert!(!is_valid_str("abc"));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
    }

    #[test]
    fn test_double_matches_subtract_nine() {
        for digit in 0u8..10 {
            let doubled = digit as u32 * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(double(digit), expected, "digit {}", digit);
        }
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);

        let partial = [2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 4);
    }

    #[test]
    fn test_is_valid_str_ignores_separators() {
        assert!(is_valid_str("3782 822463 10005"));
        assert!(is_valid_str("4111-1111-1111-1111"));
        assert!(!is_valid_str("4111-1111-1111-1112"));
    }
}
