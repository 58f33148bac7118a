//! CVC/CVV/CID entry and validation.
//!
//! The security code length depends on the card network:
//!
//! - American Express: 4 digits (printed on front)
//! - All other networks: 3 digits (printed on back)
//!
//! The CVC field has no formatting of its own; it is reduced to digits and
//! clamped to the length of the network currently detected in the card
//! number field.
//!
//! # Example
//!
//! ```
//! use cc_entry::cvc::{cvc_valid, format_cvc};
//! use cc_entry::CardNetwork;
//!
//! assert_eq!(format_cvc("12a34", CardNetwork::Visa), "123");
//! assert_eq!(format_cvc("12a34", CardNetwork::AmericanExpress), "1234");
//!
//! assert!(cvc_valid("123", CardNetwork::Visa));
//! assert!(!cvc_valid("123", CardNetwork::AmericanExpress));
//! ```

use thiserror::Error;

use crate::format::digits_only;
use crate::network::CardNetwork;

/// Errors that can occur during CVC validation.
///
/// Carries lengths only, never the code itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvcError {
    /// The input holds no digits.
    #[error("CVC is empty")]
    Empty,
    /// The CVC length doesn't match the network requirements.
    #[error("{network} cards require a {expected} digit CVC, got {length}")]
    WrongLength {
        /// The card network.
        network: CardNetwork,
        /// Number of digits provided.
        length: usize,
        /// Expected length for this network.
        expected: usize,
    },
}

/// Reduces CVC input to digits and clamps it to the network's length.
pub fn format_cvc(input: &str, network: CardNetwork) -> String {
    let mut digits = digits_only(input);
    digits.truncate(network.cvc_length());
    digits
}

/// Validates a CVC for a network.
///
/// Non-digit characters are ignored; the remaining digit count must match
/// the network's CVC length exactly.
///
/// # Example
///
/// ```
/// use cc_entry::cvc::{validate_cvc, CvcError};
/// use cc_entry::CardNetwork;
///
/// assert!(validate_cvc("1234", CardNetwork::AmericanExpress).is_ok());
/// assert_eq!(
///     validate_cvc("1234", CardNetwork::Visa),
///     Err(CvcError::WrongLength { network: CardNetwork::Visa, length: 4, expected: 3 })
/// );
/// ```
pub fn validate_cvc(input: &str, network: CardNetwork) -> Result<(), CvcError> {
    let length = input.chars().filter(|c| c.is_ascii_digit()).count();
    if length == 0 {
        return Err(CvcError::Empty);
    }

    let expected = network.cvc_length();
    if length != expected {
        return Err(CvcError::WrongLength {
            network,
            length,
            expected,
        });
    }

    Ok(())
}

/// Checks if a string is a valid CVC for a network.
#[inline]
pub fn cvc_valid(input: &str, network: CardNetwork) -> bool {
    validate_cvc(input, network).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cvc_clamps() {
        assert_eq!(format_cvc("", CardNetwork::Visa), "");
        assert_eq!(format_cvc("1", CardNetwork::Visa), "1");
        assert_eq!(format_cvc("12345", CardNetwork::Visa), "123");
        assert_eq!(format_cvc("12345", CardNetwork::AmericanExpress), "1234");
        assert_eq!(format_cvc("12345", CardNetwork::Unknown), "123");
        assert_eq!(format_cvc(" 0-0 7", CardNetwork::Mir), "007");
    }

    #[test]
    fn test_exact_length() {
        assert!(cvc_valid("123", CardNetwork::Visa));
        assert!(cvc_valid("1234", CardNetwork::AmericanExpress));
        assert!(!cvc_valid("123", CardNetwork::AmericanExpress));
        assert!(!cvc_valid("1234", CardNetwork::Visa));
        assert!(!cvc_valid("12", CardNetwork::Mastercard));
        assert!(cvc_valid("123", CardNetwork::Unknown));
    }

    #[test]
    fn test_leading_zeros() {
        assert!(cvc_valid("000", CardNetwork::Discover));
        assert!(cvc_valid("0001", CardNetwork::AmericanExpress));
    }

    #[test]
    fn test_ignores_non_digits() {
        assert!(cvc_valid("1 2 3", CardNetwork::Visa));
        assert_eq!(validate_cvc("abc", CardNetwork::Visa), Err(CvcError::Empty));
        assert_eq!(validate_cvc("", CardNetwork::Visa), Err(CvcError::Empty));
    }

    #[test]
    fn test_error_display() {
        let err = validate_cvc("12", CardNetwork::AmericanExpress).unwrap_err();
        assert_eq!(
            err.to_string(),
            "American Express cards require a 4 digit CVC, got 2"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CvcError>();
    }
}
