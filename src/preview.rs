//! The non-editable card preview face.
//!
//! While the user types, a preview of the physical card mirrors each
//! field: the number padded with fill characters in its network's grouping,
//! the expiry as a fixed `MM/YY` template, the uppercased name and the
//! network's short label.
//!
//! # Example
//!
//! ```
//! use cc_entry::preview::CardPreview;
//!
//! let preview = CardPreview::new("3782 82", "1", "");
//! assert_eq!(preview.card_number, "3782 82•••• •••••");
//! assert_eq!(preview.expiry, "1M/YY");
//! assert_eq!(preview.name, "YOUR NAME");
//! assert_eq!(preview.network_label, "AMEX");
//! ```

use crate::config::EntryConfig;
use crate::detect::classify;
use crate::format::{digits_only, masked_preview};
use crate::name::preview_or;
use crate::network::CardNetwork;

/// Renders the card number with missing digits replaced by `fill`.
///
/// An empty field renders the blank 16-digit face.
pub fn preview_card_number(text: &str, fill: char) -> String {
    let mut digits = digits_only(text);
    let network = classify(&digits);
    digits.truncate(network.pan_length());
    masked_preview(&digits, network.grouping(), fill)
}

/// Renders the expiry as exactly five characters.
///
/// Typed digits replace the placeholders in order: two month positions,
/// the `/`, then two year positions.
///
/// ```
/// use cc_entry::preview::preview_expiry;
///
/// assert_eq!(preview_expiry("", 'M', 'Y'), "MM/YY");
/// assert_eq!(preview_expiry("12/2", 'M', 'Y'), "12/2Y");
/// ```
pub fn preview_expiry(text: &str, month: char, year: char) -> String {
    let mut digits = text.chars().filter(char::is_ascii_digit);
    let mut next = |placeholder: char| digits.next().unwrap_or(placeholder);

    let mut result = String::with_capacity(5);
    result.push(next(month));
    result.push(next(month));
    result.push('/');
    result.push(next(year));
    result.push(next(year));
    result
}

/// Returns the network's preview label, or `unknown` when none matched.
pub fn preview_network_label(network: CardNetwork, unknown: &str) -> String {
    if network.is_known() {
        network.preview_label().to_owned()
    } else {
        unknown.to_owned()
    }
}

/// Everything the preview face shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPreview {
    /// Masked, grouped card number.
    pub card_number: String,
    /// `MM/YY` template with typed digits filled in.
    pub expiry: String,
    /// Uppercased name or the name placeholder.
    pub name: String,
    /// Network short label or the unknown label.
    pub network_label: String,
    /// Network icon identifier; empty when unknown.
    pub icon: String,
}

impl CardPreview {
    /// Builds a preview using the default presentation constants.
    pub fn new(card_number: &str, expiry: &str, name: &str) -> Self {
        Self::with_config(card_number, expiry, name, &EntryConfig::default())
    }

    /// Builds a preview using `config`'s placeholders.
    pub fn with_config(card_number: &str, expiry: &str, name: &str, config: &EntryConfig) -> Self {
        let network = classify(card_number);
        Self {
            card_number: preview_card_number(card_number, config.fill_char),
            expiry: preview_expiry(expiry, config.month_placeholder, config.year_placeholder),
            name: preview_or(name, config.name_limit, &config.name_placeholder),
            network_label: preview_network_label(network, &config.unknown_network_label),
            icon: network.icon().to_owned(),
        }
    }
}

impl Default for CardPreview {
    fn default() -> Self {
        Self::new("", "", "")
    }
}
