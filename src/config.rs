//! Presentation constants for a card entry form.
//!
//! The pure functions in this crate use the built-in defaults; a
//! [`CardEntry`](crate::CardEntry) carries an `EntryConfig` so a front end
//! can change placeholders and messages without touching the engine.
//!
//! ```
//! use cc_entry::EntryConfig;
//!
//! let config = EntryConfig::default()
//!     .with_fill_char('*')
//!     .with_error_message("Check your card");
//! assert_eq!(config.card_number_placeholder(), "**** **** **** ****");
//! ```

use crate::format::masked_preview;
use crate::name::{MAX_NAME_LENGTH, NAME_PLACEHOLDER};
use crate::network::CardNetwork;
use crate::validate::INVALID_CARD_DETAILS;

/// Default fill character for missing card-number digits on the preview.
pub const DEFAULT_FILL_CHAR: char = '•';

/// Preview label shown while no network is detected.
pub const UNKNOWN_NETWORK_LABEL: &str = "--";

/// Presentation constants used by [`CardEntry`](crate::CardEntry).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EntryConfig {
    /// Stands in for card-number digits not typed yet.
    pub fill_char: char,
    /// Stands in for untyped month digits.
    pub month_placeholder: char,
    /// Stands in for untyped year digits.
    pub year_placeholder: char,
    /// Preview text while the name is empty.
    pub name_placeholder: String,
    /// Maximum number of name characters kept.
    pub name_limit: usize,
    /// Preview label while no network is detected.
    pub unknown_network_label: String,
    /// Aggregate message while any field is invalid.
    pub error_message: String,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            fill_char: DEFAULT_FILL_CHAR,
            month_placeholder: 'M',
            year_placeholder: 'Y',
            name_placeholder: NAME_PLACEHOLDER.to_owned(),
            name_limit: MAX_NAME_LENGTH,
            unknown_network_label: UNKNOWN_NETWORK_LABEL.to_owned(),
            error_message: INVALID_CARD_DETAILS.to_owned(),
        }
    }
}

impl EntryConfig {
    /// Sets the preview fill character.
    #[must_use]
    pub fn with_fill_char(mut self, fill_char: char) -> Self {
        self.fill_char = fill_char;
        self
    }

    /// Sets the month and year placeholders of the preview expiry.
    #[must_use]
    pub fn with_expiry_placeholders(mut self, month: char, year: char) -> Self {
        self.month_placeholder = month;
        self.year_placeholder = year;
        self
    }

    /// Sets the preview name placeholder.
    #[must_use]
    pub fn with_name_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.name_placeholder = placeholder.into();
        self
    }

    /// Sets the name character limit.
    #[must_use]
    pub fn with_name_limit(mut self, limit: usize) -> Self {
        self.name_limit = limit;
        self
    }

    /// Sets the preview label used while no network is detected.
    #[must_use]
    pub fn with_unknown_network_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_network_label = label.into();
        self
    }

    /// Sets the aggregate error message.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Returns the blank card-number preview.
    pub fn card_number_placeholder(&self) -> String {
        masked_preview("", CardNetwork::Unknown.grouping(), self.fill_char)
    }

    /// Returns the blank expiry preview, e.g. `MM/YY`.
    pub fn expiry_placeholder(&self) -> String {
        let m = self.month_placeholder;
        let y = self.year_placeholder;
        [m, m, '/', y, y].iter().collect()
    }

    /// Loads a config from JSON; missing keys keep their defaults.
    ///
    /// ```
    /// use cc_entry::EntryConfig;
    ///
    /// let config = EntryConfig::from_json(r#"{"fill_char": "#"}"#).unwrap();
    /// assert_eq!(config.fill_char, '#');
    /// assert_eq!(config.name_limit, 20);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the config to pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
