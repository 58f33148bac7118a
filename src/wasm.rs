//! WebAssembly bindings for the card entry engine.
//!
//! This module exposes the per-field edit processors, validators and the
//! preview to JavaScript, so a browser form can run the same formatting
//! rules as native code.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { on_card_number_edit, on_expiry_edit, validate_all } from 'cc_entry';
//!
//! await init();
//!
//! input.addEventListener('input', () => {
//!     const result = on_card_number_edit(previous, input.value, input.selectionStart);
//!     input.value = result.formatted_text;
//!     input.setSelectionRange(result.cursor_position, result.cursor_position);
//!     icon.src = result.icon ? `/img/${result.icon}.svg` : '';
//!     previous = result.formatted_text;
//! });
//!
//! const state = validate_all(number, expiry, cvc, name);
//! submit.disabled = !state.valid;
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::edit::EditEvent;
use crate::network::CardNetwork;

/// Result of a card-number edit, returned to JavaScript.
#[wasm_bindgen]
pub struct CardNumberEdit {
    formatted_text: String,
    cursor_position: usize,
    network: CardNetwork,
    is_plausible: bool,
}

#[wasm_bindgen]
impl CardNumberEdit {
    #[wasm_bindgen(getter)]
    pub fn formatted_text(&self) -> String {
        self.formatted_text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    #[wasm_bindgen(getter)]
    pub fn network(&self) -> String {
        self.network.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn icon(&self) -> String {
        self.network.icon().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_label(&self) -> String {
        self.network.preview_label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn is_plausible(&self) -> bool {
        self.is_plausible
    }
}

/// Processes an edit of the card-number field.
///
/// # Example
/// ```javascript
/// const result = on_card_number_edit("4111", "41111", 5);
/// console.log(result.formatted_text);   // "4111 1"
/// console.log(result.cursor_position);  // 6
/// ```
#[wasm_bindgen]
pub fn on_card_number_edit(previous: &str, current: &str, cursor: usize) -> CardNumberEdit {
    let result = crate::edit::on_card_number_edit(EditEvent::new(previous, current, cursor));
    CardNumberEdit {
        formatted_text: result.formatted_text,
        cursor_position: result.cursor_position,
        network: result.network,
        is_plausible: result.is_plausible,
    }
}

/// Result of an expiry edit.
#[wasm_bindgen]
pub struct ExpiryEdit {
    formatted_text: String,
    cursor_position: usize,
}

#[wasm_bindgen]
impl ExpiryEdit {
    #[wasm_bindgen(getter)]
    pub fn formatted_text(&self) -> String {
        self.formatted_text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }
}

/// Processes an edit of the expiry field.
///
/// # Example
/// ```javascript
/// on_expiry_edit("", "4", 1).formatted_text  // "04"
/// ```
#[wasm_bindgen]
pub fn on_expiry_edit(previous: &str, current: &str, cursor: usize) -> ExpiryEdit {
    let result = crate::edit::on_expiry_edit(EditEvent::new(previous, current, cursor));
    ExpiryEdit {
        formatted_text: result.formatted_text,
        cursor_position: result.cursor_position,
    }
}

/// Processes an edit of the CVC field, clamping to the network of
/// `card_number`.
#[wasm_bindgen]
pub fn on_cvc_edit(text: &str, card_number: &str) -> String {
    crate::edit::on_cvc_edit(text, crate::classify(card_number))
}

/// Processes an edit of the name field.
#[wasm_bindgen]
pub fn on_name_edit(text: &str) -> String {
    crate::edit::on_name_edit(text)
}

/// Network details for a (partial) card number.
#[wasm_bindgen]
pub struct NetworkInfo {
    network: CardNetwork,
}

#[wasm_bindgen]
impl NetworkInfo {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.network.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn icon(&self) -> String {
        self.network.icon().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_label(&self) -> String {
        self.network.preview_label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn pan_length(&self) -> usize {
        self.network.pan_length()
    }

    #[wasm_bindgen(getter)]
    pub fn cvc_length(&self) -> usize {
        self.network.cvc_length()
    }

    #[wasm_bindgen(getter)]
    pub fn known(&self) -> bool {
        self.network.is_known()
    }
}

/// Classifies a (partial) card number.
///
/// # Example
/// ```javascript
/// classify("2720").name  // "Mastercard"
/// ```
#[wasm_bindgen]
pub fn classify(card_number: &str) -> NetworkInfo {
    NetworkInfo {
        network: crate::classify(card_number),
    }
}

/// Per-field validity, returned to JavaScript.
#[wasm_bindgen]
pub struct ValidationResult {
    card_number: bool,
    expiry: bool,
    cvc: bool,
    name: bool,
    valid: bool,
    message: String,
}

#[wasm_bindgen]
impl ValidationResult {
    #[wasm_bindgen(getter)]
    pub fn card_number(&self) -> bool {
        self.card_number
    }

    #[wasm_bindgen(getter)]
    pub fn expiry(&self) -> bool {
        self.expiry
    }

    #[wasm_bindgen(getter)]
    pub fn cvc(&self) -> bool {
        self.cvc
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> bool {
        self.name
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Validates all four fields against today's date.
#[wasm_bindgen]
pub fn validate_all(card_number: &str, expiry: &str, cvc: &str, name: &str) -> ValidationResult {
    let state = crate::validate_all(card_number, expiry, cvc, name);
    ValidationResult {
        card_number: state.card_number,
        expiry: state.expiry,
        cvc: state.cvc,
        name: state.name,
        valid: state.valid,
        message: state.message,
    }
}

/// Checks a complete card number; returns the reason on failure.
#[wasm_bindgen]
pub fn validate_card_number(card_number: &str) -> Result<String, JsValue> {
    crate::validate::validate_card_number(card_number)
        .map(|network| network.name().to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Checks an expiry date against today's date.
#[wasm_bindgen]
pub fn expiry_valid(expiry: &str) -> bool {
    crate::expiry::expiry_valid(expiry)
}

/// Checks a CVC against the network of `card_number`.
#[wasm_bindgen]
pub fn cvc_valid(cvc: &str, card_number: &str) -> bool {
    crate::cvc::cvc_valid(cvc, crate::classify(card_number))
}

/// The card preview face.
#[wasm_bindgen]
pub struct Preview {
    inner: crate::preview::CardPreview,
}

#[wasm_bindgen]
impl Preview {
    #[wasm_bindgen(getter)]
    pub fn card_number(&self) -> String {
        self.inner.card_number.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn expiry(&self) -> String {
        self.inner.expiry.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn network_label(&self) -> String {
        self.inner.network_label.clone()
    }
}

/// Renders the card preview face.
///
/// # Example
/// ```javascript
/// preview("", "", "").card_number  // "•••• •••• •••• ••••"
/// ```
#[wasm_bindgen]
pub fn preview(card_number: &str, expiry: &str, name: &str) -> Preview {
    Preview {
        inner: crate::preview::CardPreview::new(card_number, expiry, name),
    }
}
