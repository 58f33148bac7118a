//! Rich error types for card number validation.
//!
//! Explains why a card number was rejected without ever echoing its digits.

use thiserror::Error;

use crate::network::CardNetwork;

/// Errors that can occur during card number validation.
///
/// Each variant provides specific details about the validation failure,
/// enabling users to understand and fix the issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardNumberError {
    /// The input string was empty.
    #[error("card number is empty")]
    Empty,

    /// The card number contains only whitespace or separators.
    #[error("card number contains no digits")]
    NoDigits,

    /// No known network claims the number's prefix.
    #[error("unknown card network - check the card number prefix")]
    UnknownNetwork,

    /// The card number length is not the detected network's PAN length.
    #[error("{network} cards must have {expected} digits, got {length}")]
    InvalidLength {
        /// The detected card network.
        network: CardNetwork,
        /// The actual number of digits.
        length: usize,
        /// The PAN length for this network.
        expected: usize,
    },

    /// The Luhn checksum validation failed.
    ///
    /// This usually indicates a typo in the card number.
    #[error("invalid checksum (Luhn check failed) - please verify the card number")]
    InvalidChecksum,
}
