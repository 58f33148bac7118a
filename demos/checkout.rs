//! Validates a checkout form field by field and as a whole.
//!
//! Run with: `cargo run --example checkout`

use cc_entry::replay::type_text;
use cc_entry::{cvc, expiry, validate_card_number, CardEntry, EntryConfig, Field};
use chrono::NaiveDate;

fn main() {
    println!("=== Checkout Form Validation ===\n");

    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

    // Field-level errors carry the reason
    for number in ["4111 1111 1111 1111", "4111 1111 1111 1112", "3782 8224 6310", "9999"] {
        match validate_card_number(number) {
            Ok(network) => println!("{:<22} ok ({})", number, network),
            Err(e) => println!("{:<22} {}", number, e),
        }
    }
    println!();

    for date in ["12/30", "13/30", "01/20", "10/2026"] {
        match expiry::validate_expiry_on(date, today) {
            Ok(exp) => println!("{:<8} ok, {} months left", date, exp.months_until_expiry_on(today)),
            Err(e) => println!("{:<8} {}", date, e),
        }
    }
    println!();

    // A whole form, with custom presentation settings
    let config = EntryConfig::default()
        .with_fill_char('*')
        .with_error_message("Please check the highlighted fields");
    let mut entry = CardEntry::with_config(config);

    type_text(&mut entry, Field::CardNumber, "3782822463");
    type_text(&mut entry, Field::Expiry, "0129");
    type_text(&mut entry, Field::Cvc, "123");

    let preview = entry.preview();
    println!("Card:   {}", preview.card_number);
    println!("Expiry: {}", preview.expiry);
    println!("Name:   {}\n", preview.name);

    let state = entry.validate_all_on(today).clone();
    for field in Field::ALL {
        println!("{:<12} {}", field.name(), if state.get(field) { "ok" } else { "invalid" });
    }
    println!("{}\n", state.message);

    if let Err(e) = cvc::validate_cvc(entry.cvc(), entry.network()) {
        println!("CVC: {}", e);
    }

    // Finish the form
    type_text(&mut entry, Field::CardNumber, "10005");
    type_text(&mut entry, Field::Cvc, "4");
    type_text(&mut entry, Field::Name, "Grace Hopper");

    let valid = entry.validate_all_on(today).valid;
    println!("Card:   {}", entry.card_number());
    println!("Valid:  {}", valid);
}
