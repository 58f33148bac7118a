//! Replays keystrokes into a card form and prints each step.
//!
//! Run with: `cargo run --example typing`

use cc_entry::replay::{keys, Key, TypingExt};
use cc_entry::{CardEntry, Field};

/// Renders the field text with `|` at the caret.
fn with_caret(text: &str, cursor: usize) -> String {
    let mut rendered: String = text.chars().take(cursor).collect();
    rendered.push('|');
    rendered.extend(text.chars().skip(cursor));
    rendered
}

fn replay(entry: &mut CardEntry, field: Field, keys: impl Iterator<Item = Key>) {
    println!("--- {} ---", field);
    for step in keys.type_into(entry, field) {
        println!("  {:<24} {}", format!("{:?}", step.key), with_caret(&step.text, step.cursor));
    }
    println!();
}

fn main() {
    println!("=== Typing Into a Card Form ===\n");

    let mut entry = CardEntry::new();

    // Digits are grouped as they arrive and the caret stays after the last one
    replay(&mut entry, Field::CardNumber, keys("37828224"));
    println!("Network: {} ({})\n", entry.network(), entry.network().icon());

    // Typing in the middle regroups the number but keeps the caret on its digit
    replay(
        &mut entry,
        Field::CardNumber,
        vec![Key::Home, Key::Right, Key::Right, Key::Backspace, Key::Backspace, Key::Char('4')]
            .into_iter(),
    );
    println!("Network: {}\n", entry.network());

    // Pasting a number with dashes
    entry.clear();
    replay(
        &mut entry,
        Field::CardNumber,
        std::iter::once(Key::Paste("5555-5555-5555-4444".into())),
    );

    // Month correction: "1" then "3" becomes "12", "8" becomes "08"
    replay(&mut entry, Field::Expiry, keys("1327"));
    entry.clear();
    replay(&mut entry, Field::Expiry, keys("829"));

    // The CVC is clamped to the network's length
    replay(&mut entry, Field::Cvc, keys("12a345"));

    // Names keep letters and spaces only
    replay(&mut entry, Field::Name, keys("ada lovelace-1815"));

    let preview = entry.preview();
    println!("Preview:");
    println!("  {}", preview.card_number);
    println!("  {}  {}", preview.expiry, preview.network_label);
    println!("  {}", preview.name);
}
