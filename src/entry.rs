//! Stateful card entry form.
//!
//! [`CardEntry`] owns the four field buffers a payment form shows and feeds
//! every change event through the pure edit processors exactly once:
//!
//! - a change whose text equals what the entry itself produced last (the
//!   widget echoing the write-back) is ignored, so applying a result can
//!   never re-enter the processor;
//! - when the card number's network changes, the CVC is re-clamped to the
//!   new network's length even though the CVC field was not touched;
//! - blurring a field re-validates that field alone.
//!
//! # Example
//!
//! ```
//! use cc_entry::{CardEntry, CardNetwork};
//!
//! let mut entry = CardEntry::new();
//! entry.edit_cvc("1234");
//! assert_eq!(entry.cvc(), "123");
//!
//! let change = entry.edit_card_number("37", 2).unwrap();
//! assert_eq!(change.result.network, CardNetwork::AmericanExpress);
//!
//! // writing "37" back into the widget echoes the same text
//! assert!(entry.edit_card_number("37", 2).is_none());
//! ```

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::config::EntryConfig;
use crate::edit::{
    on_card_number_edit, on_cvc_edit, on_expiry_edit, EditEvent, ExpiryFormat, FormatResult,
};
use crate::expiry::current_date;
use crate::name::filter_name;
use crate::network::CardNetwork;
use crate::preview::CardPreview;
use crate::validate::{validate_field_on, Field, ValidationState};

/// Outcome of a card-number edit applied to a [`CardEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumberChange {
    /// What the card-number field shows now.
    pub result: FormatResult,
    /// The CVC after re-clamping, when the new network shortened it.
    pub clamped_cvc: Option<String>,
}

/// The four field buffers of a card entry form plus their validity.
///
/// Field contents are zeroed on drop and masked in debug output.
#[derive(Clone, Default)]
pub struct CardEntry {
    config: EntryConfig,
    card_number: String,
    expiry: String,
    cvc: String,
    name: String,
    network: CardNetwork,
    validation: ValidationState,
}

impl CardEntry {
    /// Creates an empty form with the default presentation constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form using `config`.
    pub fn with_config(config: EntryConfig) -> Self {
        let validation =
            ValidationState::with_message(false, false, false, false, &config.error_message);
        Self {
            config,
            card_number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            name: String::new(),
            network: CardNetwork::Unknown,
            validation,
        }
    }

    /// Applies a change event from the card-number field.
    ///
    /// `cursor` is the caret the widget reports with `text`. Returns `None`
    /// when `text` is the entry's own last output.
    pub fn edit_card_number(&mut self, text: &str, cursor: usize) -> Option<CardNumberChange> {
        if text == self.card_number {
            debug!(field = %Field::CardNumber, "ignored write-back echo");
            return None;
        }

        let result = on_card_number_edit(EditEvent::new(&self.card_number, text, cursor));
        self.replace_card_number(&result.formatted_text);

        let mut clamped_cvc = None;
        if result.network != self.network {
            debug!(from = %self.network, to = %result.network, "card network changed");
            self.network = result.network;

            let limit = self.network.cvc_length();
            if self.cvc.len() > limit {
                let kept = Zeroizing::new(self.cvc.chars().take(limit).collect::<String>());
                self.cvc.zeroize();
                self.cvc.push_str(&kept);
                debug!(length = limit, "re-clamped cvc");
                clamped_cvc = Some(self.cvc.clone());
            }
        }

        Some(CardNumberChange {
            result,
            clamped_cvc,
        })
    }

    /// Applies a change event from the expiry field.
    pub fn edit_expiry(&mut self, text: &str, cursor: usize) -> Option<ExpiryFormat> {
        if text == self.expiry {
            debug!(field = %Field::Expiry, "ignored write-back echo");
            return None;
        }

        let result = on_expiry_edit(EditEvent::new(&self.expiry, text, cursor));
        self.expiry.clone_from(&result.formatted_text);
        Some(result)
    }

    /// Applies a change event from the CVC field.
    ///
    /// The CVC is clamped to the network currently detected in the card
    /// number. Its caret always belongs at the end.
    pub fn edit_cvc(&mut self, text: &str) -> Option<String> {
        if text == self.cvc {
            debug!(field = %Field::Cvc, "ignored write-back echo");
            return None;
        }

        let digits = on_cvc_edit(text, self.network);
        self.cvc.zeroize();
        self.cvc.push_str(&digits);
        Some(digits)
    }

    /// Applies a change event from the name field.
    pub fn edit_name(&mut self, text: &str) -> Option<String> {
        if text == self.name {
            debug!(field = %Field::Name, "ignored write-back echo");
            return None;
        }

        let name = filter_name(text, self.config.name_limit);
        trace!(field = %Field::Name, chars = name.chars().count(), "processed edit");
        self.name.zeroize();
        self.name.push_str(&name);
        Some(name)
    }

    /// Notes that a field gained focus.
    ///
    /// Focus carries no engine state; highlighting is up to the front end.
    pub fn focus(&self, field: Field) {
        trace!(%field, "field focused");
    }

    /// Re-validates one field against `today` after it lost focus.
    pub fn blur_on(&mut self, field: Field, today: NaiveDate) -> bool {
        let valid = validate_field_on(field, self.text(field), self.network, today);
        self.validation.set(field, valid, &self.config.error_message);
        debug!(%field, valid, "field blurred");
        valid
    }

    /// Re-validates one field after it lost focus.
    pub fn blur(&mut self, field: Field) -> bool {
        self.blur_on(field, current_date())
    }

    /// Re-validates every field against `today`.
    pub fn validate_all_on(&mut self, today: NaiveDate) -> &ValidationState {
        for field in Field::ALL {
            let valid = validate_field_on(field, self.text(field), self.network, today);
            self.validation.set(field, valid, &self.config.error_message);
        }
        debug!(
            valid = self.validation.valid,
            card_number = self.validation.card_number,
            expiry = self.validation.expiry,
            cvc = self.validation.cvc,
            name = self.validation.name,
            "validated card details"
        );
        &self.validation
    }

    /// Re-validates every field.
    pub fn validate_all(&mut self) -> &ValidationState {
        self.validate_all_on(current_date())
    }

    /// Renders the card preview face.
    pub fn preview(&self) -> CardPreview {
        CardPreview::with_config(&self.card_number, &self.expiry, &self.name, &self.config)
    }

    /// Empties every field and resets validation.
    pub fn clear(&mut self) {
        self.card_number.zeroize();
        self.expiry.zeroize();
        self.cvc.zeroize();
        self.name.zeroize();
        self.network = CardNetwork::Unknown;
        self.validation =
            ValidationState::with_message(false, false, false, false, &self.config.error_message);
    }

    /// Returns a field's current text.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::Expiry => &self.expiry,
            Field::Cvc => &self.cvc,
            Field::Name => &self.name,
        }
    }

    /// Formatted card number.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Formatted expiry.
    #[inline]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// CVC digits.
    #[inline]
    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Filtered name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Network detected from the card number.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// Validity as of the last blur or full validation.
    #[inline]
    pub const fn validation(&self) -> &ValidationState {
        &self.validation
    }

    /// Presentation constants.
    #[inline]
    pub const fn config(&self) -> &EntryConfig {
        &self.config
    }

    fn replace_card_number(&mut self, formatted: &str) {
        self.card_number.zeroize();
        self.card_number.push_str(formatted);
    }
}

impl fmt::Debug for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask field contents in debug output for security
        f.debug_struct("CardEntry")
            .field("network", &self.network)
            .field("card_number_len", &self.card_number.len())
            .field("expiry_len", &self.expiry.len())
            .field("cvc", &"***")
            .field("name_len", &self.name.chars().count())
            .field("validation", &self.validation)
            .finish()
    }
}

impl Drop for CardEntry {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.expiry.zeroize();
        self.cvc.zeroize();
        self.name.zeroize();
    }
}
