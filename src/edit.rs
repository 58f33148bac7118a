//! Per-field edit processing.
//!
//! Each entry point takes one text-change event for its field and returns
//! the text the field should display afterwards (plus the caret, where the
//! field reformats itself). The functions are pure: the caller applies the
//! result exactly once and feeds the next genuine user edit back in.
//!
//! # Example
//!
//! ```
//! use cc_entry::edit::{on_card_number_edit, on_expiry_edit, EditEvent};
//! use cc_entry::CardNetwork;
//!
//! let result = on_card_number_edit(EditEvent::new("4111", "41111", 5));
//! assert_eq!(result.formatted_text, "4111 1");
//! assert_eq!(result.cursor_position, 6);
//! assert_eq!(result.network, CardNetwork::Visa);
//! assert!(result.is_plausible);
//!
//! let expiry = on_expiry_edit(EditEvent::new("", "4", 1));
//! assert_eq!(expiry.formatted_text, "04");
//! assert_eq!(expiry.cursor_position, 2);
//! ```

use std::fmt;

use tracing::trace;

use crate::cursor::CursorTracker;
use crate::cvc::format_cvc;
use crate::detect::classify;
use crate::expiry::{correct_expiry_digits, format_expiry_digits};
use crate::format::{digits_only, format_grouped};
use crate::name::{filter_name, MAX_NAME_LENGTH};
use crate::network::CardNetwork;

/// One text change reported by a field.
///
/// The cursor is the caret position reported together with
/// `current_text`, in chars. It is clamped into the text on construction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EditEvent<'a> {
    previous_text: &'a str,
    current_text: &'a str,
    cursor_position: usize,
}

impl<'a> EditEvent<'a> {
    /// Creates an event, clamping the cursor to `[0, current_text.len()]`.
    pub fn new(previous_text: &'a str, current_text: &'a str, cursor_position: usize) -> Self {
        Self {
            previous_text,
            current_text,
            cursor_position: cursor_position.min(current_text.chars().count()),
        }
    }

    /// Creates an event whose caret sits at the end of the new text.
    pub fn at_end(previous_text: &'a str, current_text: &'a str) -> Self {
        Self::new(previous_text, current_text, usize::MAX)
    }

    /// Text before the change.
    #[inline]
    pub const fn previous_text(&self) -> &'a str {
        self.previous_text
    }

    /// Text after the change.
    #[inline]
    pub const fn current_text(&self) -> &'a str {
        self.current_text
    }

    /// Clamped caret position.
    #[inline]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns the caret tracker for this edit.
    pub fn tracker(&self) -> CursorTracker {
        CursorTracker::new(self.previous_text, self.current_text, self.cursor_position)
    }
}

impl fmt::Debug for EditEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field contents may be card data
        f.debug_struct("EditEvent")
            .field("previous_len", &self.previous_text.chars().count())
            .field("current_len", &self.current_text.chars().count())
            .field("cursor_position", &self.cursor_position)
            .finish()
    }
}

/// Outcome of a card-number edit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatResult {
    /// Grouped digits to display.
    pub formatted_text: String,
    /// Caret position in `formatted_text`.
    pub cursor_position: usize,
    /// Network detected from the prefix.
    pub network: CardNetwork,
    /// True when the prefix belongs to a known network.
    pub is_plausible: bool,
}

impl FormatResult {
    /// Icon identifier for the detected network; empty when unknown.
    #[inline]
    pub fn icon(&self) -> &'static str {
        self.network.icon()
    }

    /// Short preview label for the detected network; empty when unknown.
    #[inline]
    pub fn preview_label(&self) -> &'static str {
        self.network.preview_label()
    }
}

/// Outcome of an expiry edit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryFormat {
    /// `MM`, `MM/Y` or `MM/YY` text to display.
    pub formatted_text: String,
    /// Caret position in `formatted_text`.
    pub cursor_position: usize,
}

/// Processes an edit of the card-number field.
///
/// Strips non-digits, classifies the prefix, clamps the digits to the
/// network's PAN length and groups them. Length limits apply to digits,
/// never to the separators.
pub fn on_card_number_edit(event: EditEvent<'_>) -> FormatResult {
    let tracker = event.tracker();
    let mut digits = digits_only(event.current_text());
    let network = classify(&digits);
    digits.truncate(network.pan_length());

    let formatted_text = format_grouped(&digits, network.grouping());
    let cursor_position = tracker.place(&formatted_text);

    trace!(
        field = "card_number",
        kind = ?tracker.kind(),
        digits = digits.len(),
        %network,
        cursor = cursor_position,
        "processed edit"
    );

    FormatResult {
        formatted_text,
        cursor_position,
        network,
        is_plausible: network.is_known(),
    }
}

/// Processes an edit of the expiry field.
///
/// Keeps at most four digits, repairs impossible months and inserts the
/// `/` once a year digit is present.
pub fn on_expiry_edit(event: EditEvent<'_>) -> ExpiryFormat {
    let (digits, inserted) = correct_expiry_digits(event.current_text());
    let tracker = event.tracker().shift(inserted);

    let formatted_text = format_expiry_digits(&digits);
    let cursor_position = tracker.place_expiry(&formatted_text);

    trace!(
        field = "expiry",
        kind = ?tracker.kind(),
        digits = digits.len(),
        corrected = inserted > 0,
        cursor = cursor_position,
        "processed edit"
    );

    ExpiryFormat {
        formatted_text,
        cursor_position,
    }
}

/// Processes an edit of the CVC field.
///
/// `network` is the network currently detected in the card-number field.
pub fn on_cvc_edit(new_text: &str, network: CardNetwork) -> String {
    let digits = format_cvc(new_text, network);
    trace!(field = "cvc", digits = digits.len(), %network, "processed edit");
    digits
}

/// Processes an edit of the name field.
///
/// Returns the filtered, uppercased editable text. Whitespace is kept as
/// typed so words can still be separated; use
/// [`format_name`](crate::name::format_name) for the trimmed form.
pub fn on_name_edit(raw_text: &str) -> String {
    let text = filter_name(raw_text, MAX_NAME_LENGTH);
    trace!(field = "name", chars = text.chars().count(), "processed edit");
    text
}
