//! Field validation and aggregation.
//!
//! Every field has a `Result`-returning validator explaining the failure
//! and a boolean wrapper. [`validate_all`] runs all four and folds them into
//! a [`ValidationState`].
//!
//! # Example
//!
//! ```
//! use cc_entry::validate::{validate_all_on, Field};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//!
//! let state = validate_all_on("4111 1111 1111 1111", "12/28", "123", "JANE DOE", today);
//! assert!(state.valid);
//! assert!(state.message.is_empty());
//!
//! let state = validate_all_on("4111 1111 1111 1111", "12/28", "1234", "JANE DOE", today);
//! assert!(!state.valid);
//! assert!(!state.get(Field::Cvc));
//! assert_eq!(state.message, "Invalid card details");
//! ```

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;
use zeroize::Zeroize;

use crate::cvc::cvc_valid;
use crate::detect::{classify, classify_digits};
use crate::error::CardNumberError;
use crate::expiry::{current_date, expiry_valid_on};
use crate::luhn;
use crate::name::name_valid;
use crate::network::CardNetwork;

/// Aggregate message reported while any field is invalid.
pub const INVALID_CARD_DETAILS: &str = "Invalid card details";

/// Validates a card number string.
///
/// Non-digit characters are ignored. The number must belong to a known
/// network, have exactly that network's PAN length and pass the Luhn check.
///
/// # Example
///
/// ```
/// use cc_entry::validate::validate_card_number;
/// use cc_entry::{CardNetwork, CardNumberError};
///
/// assert_eq!(validate_card_number("3782 822463 10005"), Ok(CardNetwork::AmericanExpress));
/// assert_eq!(
///     validate_card_number("4111-1111-1111-1112"),
///     Err(CardNumberError::InvalidChecksum)
/// );
/// ```
pub fn validate_card_number(input: &str) -> Result<CardNetwork, CardNumberError> {
    if input.is_empty() {
        return Err(CardNumberError::Empty);
    }

    let mut digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    let result = validate_digits(&digits);
    digits.zeroize();
    result
}

/// Validates a card number given as digit values (0-9).
pub fn validate_digits(digits: &[u8]) -> Result<CardNetwork, CardNumberError> {
    if digits.is_empty() {
        return Err(CardNumberError::NoDigits);
    }

    let network = classify_digits(digits);
    if !network.is_known() {
        return Err(CardNumberError::UnknownNetwork);
    }

    if digits.len() != network.pan_length() {
        return Err(CardNumberError::InvalidLength {
            network,
            length: digits.len(),
            expected: network.pan_length(),
        });
    }

    if !luhn::validate(digits) {
        return Err(CardNumberError::InvalidChecksum);
    }

    Ok(network)
}

/// Quick check if a card number is valid.
#[inline]
pub fn card_number_valid(input: &str) -> bool {
    validate_card_number(input).is_ok()
}

/// The four fields of a card entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Card number
    CardNumber,
    /// Expiry date
    Expiry,
    /// Security code
    Cvc,
    /// Cardholder name
    Name,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Self::CardNumber, Self::Expiry, Self::Cvc, Self::Name];

    /// Returns the field's snake_case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field validity plus the derived aggregate.
///
/// `valid` is always the AND of the four field flags and `message` is empty
/// exactly when `valid` is true. Both are refreshed on every update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationState {
    /// Card number validity.
    pub card_number: bool,
    /// Expiry validity.
    pub expiry: bool,
    /// CVC validity.
    pub cvc: bool,
    /// Name validity.
    pub name: bool,
    /// True when all four fields are valid.
    pub valid: bool,
    /// Aggregate error message, empty when `valid`.
    pub message: String,
}

impl ValidationState {
    /// Builds a state from the four field results.
    pub fn new(card_number: bool, expiry: bool, cvc: bool, name: bool) -> Self {
        Self::with_message(card_number, expiry, cvc, name, INVALID_CARD_DETAILS)
    }

    /// Builds a state, reporting `failure_message` when any field is invalid.
    pub fn with_message(
        card_number: bool,
        expiry: bool,
        cvc: bool,
        name: bool,
        failure_message: &str,
    ) -> Self {
        let mut state = Self {
            card_number,
            expiry,
            cvc,
            name,
            valid: false,
            message: String::new(),
        };
        state.refresh(failure_message);
        state
    }

    /// Returns one field's validity.
    pub const fn get(&self, field: Field) -> bool {
        match field {
            Field::CardNumber => self.card_number,
            Field::Expiry => self.expiry,
            Field::Cvc => self.cvc,
            Field::Name => self.name,
        }
    }

    /// Overwrites one field's validity and refreshes the aggregate.
    pub fn set(&mut self, field: Field, valid: bool, failure_message: &str) {
        match field {
            Field::CardNumber => self.card_number = valid,
            Field::Expiry => self.expiry = valid,
            Field::Cvc => self.cvc = valid,
            Field::Name => self.name = valid,
        }
        self.refresh(failure_message);
    }

    /// Returns the fields currently marked invalid.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| !self.get(field))
            .collect()
    }

    fn refresh(&mut self, failure_message: &str) {
        self.valid = self.card_number && self.expiry && self.cvc && self.name;
        self.message.clear();
        if !self.valid {
            self.message.push_str(failure_message);
        }
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new(false, false, false, false)
    }
}

/// Validates one field against `today`.
///
/// The CVC is checked against `network`, the network of the card number.
pub fn validate_field_on(field: Field, text: &str, network: CardNetwork, today: NaiveDate) -> bool {
    match field {
        Field::CardNumber => card_number_valid(text),
        Field::Expiry => expiry_valid_on(text, today),
        Field::Cvc => cvc_valid(text, network),
        Field::Name => name_valid(text),
    }
}

/// Validates all four fields against `today`.
pub fn validate_all_on(
    card_number: &str,
    expiry: &str,
    cvc: &str,
    name: &str,
    today: NaiveDate,
) -> ValidationState {
    let network = classify(card_number);
    let state = ValidationState::new(
        validate_field_on(Field::CardNumber, card_number, network, today),
        validate_field_on(Field::Expiry, expiry, network, today),
        validate_field_on(Field::Cvc, cvc, network, today),
        validate_field_on(Field::Name, name, network, today),
    );

    debug!(
        valid = state.valid,
        card_number = state.card_number,
        expiry = state.expiry,
        cvc = state.cvc,
        name = state.name,
        "validated card details"
    );

    state
}

/// Validates all four fields against the local date.
pub fn validate_all(card_number: &str, expiry: &str, cvc: &str, name: &str) -> ValidationState {
    validate_all_on(card_number, expiry, cvc, name, current_date())
}
