//! Card network detection using prefix matching.
//!
//! The first digits of a card number (the IIN) identify the network. The
//! table in [`CardNetwork::prefixes`] is walked in
//! [`CardNetwork::CLASSIFICATION_ORDER`] and the first network owning a
//! prefix of the input wins, so a partially typed number is classified as
//! soon as its first digit arrives.

use crate::network::CardNetwork;

/// Classifies a (possibly partial, possibly formatted) card number.
///
/// Non-digit characters are ignored. Returns `CardNetwork::Unknown` when no
/// prefix matches, including for input without digits.
///
/// # Example
///
/// ```
/// use cc_entry::{classify, CardNetwork};
///
/// assert_eq!(classify("4111 1111"), CardNetwork::Visa);
/// assert_eq!(classify("2720992837463827"), CardNetwork::Mastercard);
/// assert_eq!(classify("2200"), CardNetwork::Mir);
/// assert_eq!(classify(""), CardNetwork::Unknown);
/// ```
pub fn classify(input: &str) -> CardNetwork {
    let digits = crate::format::digits_only(input);
    if digits.is_empty() {
        return CardNetwork::Unknown;
    }

    CardNetwork::CLASSIFICATION_ORDER
        .into_iter()
        .find(|network| {
            network
                .prefixes()
                .iter()
                .any(|prefix| digits.starts_with(prefix))
        })
        .unwrap_or(CardNetwork::Unknown)
}

/// Classifies a card number given as digit values (0-9).
///
/// Same table and order as [`classify`]; used where the digits are already
/// extracted.
pub fn classify_digits(digits: &[u8]) -> CardNetwork {
    CardNetwork::CLASSIFICATION_ORDER
        .into_iter()
        .find(|network| {
            network.prefixes().iter().any(|prefix| {
                prefix.len() <= digits.len()
                    && prefix
                        .bytes()
                        .zip(digits)
                        .all(|(p, &d)| p.wrapping_sub(b'0') == d)
            })
        })
        .unwrap_or(CardNetwork::Unknown)
}

/// Returns the PAN length the card-number field is clamped to.
#[inline]
pub const fn max_pan_length(network: CardNetwork) -> usize {
    network.pan_length()
}

/// Returns the CVC length the CVC field is clamped to.
#[inline]
pub const fn max_cvc_length(network: CardNetwork) -> usize {
    network.cvc_length()
}

/// Returns the display grouping for a network.
#[inline]
pub const fn grouping_pattern(network: CardNetwork) -> &'static [usize] {
    network.grouping()
}
