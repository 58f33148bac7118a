//! # cc_entry
//!
//! Keystroke-level credit card entry for Rust: the formatting and validation
//! engine behind a card payment form.
//!
//! ## Features
//!
//! - Card network classification from the first digits (8 networks)
//! - As-you-type grouping (`4111 1111 1111 1111`, `3782 822463 10005`)
//! - Caret placement that survives reformatting, typing, deleting and pasting
//! - Expiry month correction and `MM/YY` formatting
//! - Network-aware CVC clamping, re-applied when the network changes
//! - Luhn, length, expiry, CVC and name validation with an aggregate result
//! - A masked card preview face
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_entry::edit::{on_card_number_edit, EditEvent};
//! use cc_entry::CardNetwork;
//!
//! // The user typed a fifth digit at the end of "4111"
//! let result = on_card_number_edit(EditEvent::new("4111", "41111", 5));
//! assert_eq!(result.formatted_text, "4111 1");
//! assert_eq!(result.cursor_position, 6);
//! assert_eq!(result.network, CardNetwork::Visa);
//! assert_eq!(result.icon(), "ic_visa");
//! ```
//!
//! ## Stateful Form
//!
//! ```rust
//! use cc_entry::{CardEntry, Field};
//! use chrono::NaiveDate;
//!
//! let mut entry = CardEntry::new();
//! entry.edit_card_number("4111111111111111", 16);
//! entry.edit_expiry("1230", 4);
//! entry.edit_cvc("123");
//! entry.edit_name("jane doe");
//!
//! assert_eq!(entry.card_number(), "4111 1111 1111 1111");
//! assert_eq!(entry.expiry(), "12/30");
//! assert_eq!(entry.name(), "JANE DOE");
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! assert!(entry.validate_all_on(today).valid);
//! ```
//!
//! ## Expiry Entry
//!
//! ```rust
//! use cc_entry::expiry;
//!
//! // A month can't start with 2-9, so a zero is inserted
//! assert_eq!(expiry::format_expiry("4"), "04");
//! // Months are capped at 12
//! assert_eq!(expiry::format_expiry("1929"), "12/29");
//!
//! let exp = expiry::parse_expiry("12/30").unwrap();
//! assert_eq!(exp.month(), 12);
//! assert_eq!(exp.year(), 2030);
//! ```
//!
//! ## Card Preview
//!
//! ```rust
//! use cc_entry::CardPreview;
//!
//! let preview = CardPreview::new("4111 11", "0", "");
//! assert_eq!(preview.card_number, "4111 11•• •••• ••••");
//! assert_eq!(preview.expiry, "0M/YY");
//! assert_eq!(preview.name, "YOUR NAME");
//! assert_eq!(preview.network_label, "VISA");
//! ```
//!
//! ## Supported Card Networks
//!
//! Prefixes are tried network by network in the order below; the first
//! match wins.
//!
//! | Network | Prefix | Length | Grouping | CVC |
//! |---------|--------|--------|----------|-----|
//! | Mastercard | 2221-2720, 50-55, 67 | 16 | 4-4-4-4 | 3 |
//! | Visa | 4 | 16 | 4-4-4-4 | 3 |
//! | American Express | 34, 37 | 15 | 4-6-5 | 4 |
//! | UnionPay | 62 | 16 | 4-4-4-4 | 3 |
//! | Discover | 6011, 622, 64, 65 | 16 | 4-4-4-4 | 3 |
//! | JCB | 35 | 16 | 4-4-4-4 | 3 |
//! | Diners Club | 300-305, 309, 36, 38, 39 | 14 | 4-6-4 | 3 |
//! | Mir | 2 | 16 | 4-4-4-4 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for results, config and preview |
//! | `json` | `EntryConfig::from_json` |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - `CardEntry` zeroes its field buffers on drop
//! - `Debug` output of `CardEntry` and `EditEvent` never shows field contents
//! - Log events carry lengths, networks and booleans, never digits or names
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod cvc;
pub mod detect;
pub mod edit;
pub mod entry;
pub mod error;
pub mod expiry;
pub mod format;
pub mod luhn;
pub mod name;
pub mod network;
pub mod preview;
pub mod replay;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use config::EntryConfig;
pub use detect::classify;
pub use edit::{
    on_card_number_edit, on_cvc_edit, on_expiry_edit, on_name_edit, EditEvent, ExpiryFormat,
    FormatResult,
};
pub use entry::{CardEntry, CardNumberChange};
pub use error::CardNumberError;
pub use network::CardNetwork;
pub use preview::CardPreview;
pub use validate::{
    card_number_valid, validate_all, validate_all_on, validate_card_number, Field,
    ValidationState,
};
