//! Fuzz target for the edit processors.
//!
//! Feeds arbitrary previous/current text and caret positions through every
//! field and checks the output invariants.

#![no_main]

use arbitrary::Arbitrary;
use cc_entry::edit::{on_card_number_edit, on_cvc_edit, on_expiry_edit, on_name_edit, EditEvent};
use cc_entry::{classify, format, CardEntry};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Edit {
    previous: String,
    current: String,
    cursor: usize,
}

fuzz_target!(|edit: Edit| {
    let event = EditEvent::new(&edit.previous, &edit.current, edit.cursor);

    let card = on_card_number_edit(event);
    assert!(card.cursor_position <= card.formatted_text.chars().count());
    assert!(format::digit_count(&card.formatted_text) <= card.network.pan_length());
    assert_eq!(card.network, classify(&edit.current));

    let expiry = on_expiry_edit(event);
    assert!(expiry.cursor_position <= expiry.formatted_text.chars().count());
    assert!(expiry.formatted_text.len() <= 5);

    let cvc = on_cvc_edit(&edit.current, card.network);
    assert!(cvc.len() <= card.network.cvc_length());

    let _ = on_name_edit(&edit.current);

    // The same text through the stateful entry
    let mut entry = CardEntry::new();
    entry.edit_card_number(&edit.previous, edit.previous.chars().count());
    entry.edit_card_number(&edit.current, edit.cursor);
    entry.edit_expiry(&edit.current, edit.cursor);
    entry.edit_cvc(&edit.current);
    entry.edit_name(&edit.current);
    let _ = entry.preview();
    assert!(entry.cvc().len() <= entry.network().cvc_length());
});
