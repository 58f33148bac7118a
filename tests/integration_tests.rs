//! Integration tests for cc_entry.
//!
//! These tests cover real test-card numbers, typing sessions driven through
//! the public API, and form validation scenarios.

use cc_entry::edit::{on_card_number_edit, on_expiry_edit, EditEvent};
use cc_entry::replay::{keys, type_text, Key, TypingExt};
use cc_entry::{
    card_number_valid, classify, cvc, expiry, format, luhn, name, validate_all_on,
    validate_card_number, CardEntry, CardNetwork, CardNumberError, CardPreview, EntryConfig,
    Field,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test card numbers from payment processors. They pass Luhn
// validation but are not real cards.

mod test_cards {
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4242424242424242";

    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_2SERIES_1: &str = "2223000048400011";
    pub const MC_2SERIES_2: &str = "2720992837463820";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";

    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";

    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "36000000000008";
    pub const DINERS_3: &str = "38000000000006";

    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";

    pub const UNIONPAY: &str = "6200000000000005";
    pub const MIR: &str = "2200000000000004";
}

// =============================================================================
// CLASSIFICATION AND VALIDATION
// =============================================================================

#[test]
fn test_all_test_cards_validate() {
    use test_cards::*;

    let cases = [
        (VISA_1, CardNetwork::Visa),
        (VISA_2, CardNetwork::Visa),
        (VISA_3, CardNetwork::Visa),
        (MC_1, CardNetwork::Mastercard),
        (MC_2, CardNetwork::Mastercard),
        (MC_2SERIES_1, CardNetwork::Mastercard),
        (MC_2SERIES_2, CardNetwork::Mastercard),
        (AMEX_1, CardNetwork::AmericanExpress),
        (AMEX_2, CardNetwork::AmericanExpress),
        (AMEX_3, CardNetwork::AmericanExpress),
        (DISCOVER_1, CardNetwork::Discover),
        (DISCOVER_2, CardNetwork::Discover),
        (DINERS_1, CardNetwork::DinersClub),
        (DINERS_2, CardNetwork::DinersClub),
        (DINERS_3, CardNetwork::DinersClub),
        (JCB_1, CardNetwork::Jcb),
        (JCB_2, CardNetwork::Jcb),
        (UNIONPAY, CardNetwork::UnionPay),
        (MIR, CardNetwork::Mir),
    ];

    for (number, network) in cases {
        assert_eq!(classify(number), network, "{}", number);
        assert_eq!(validate_card_number(number), Ok(network), "{}", number);
        assert!(card_number_valid(&format::format_card_number(number)), "{}", number);
    }
}

#[test]
fn test_two_series_mastercard_wins_over_mir() {
    assert_eq!(classify("2720992837463827"), CardNetwork::Mastercard);
    assert_eq!(
        validate_card_number("2720992837463827"),
        Err(CardNumberError::InvalidChecksum)
    );
}

#[test]
fn test_single_digit_change_breaks_checksum() {
    let number = test_cards::VISA_1;
    let mut broken = 0;
    for position in 1..number.len() {
        for digit in b'0'..=b'9' {
            let mut bytes = number.as_bytes().to_vec();
            if bytes[position] == digit {
                continue;
            }
            bytes[position] = digit;
            let mutated = String::from_utf8(bytes).unwrap();
            assert!(!card_number_valid(&mutated), "{}", mutated);
            broken += 1;
        }
    }
    assert_eq!(broken, 15 * 9);
}

#[test]
fn test_length_is_exact_per_network() {
    // Visa 13 and 19 digit numbers pass Luhn but are not this form's length
    assert!(luhn::is_valid_str("4222222222222"));
    assert!(matches!(
        validate_card_number("4222222222222"),
        Err(CardNumberError::InvalidLength { expected: 16, .. })
    ));
}

#[test]
fn test_expiry_examples() {
    assert!(!expiry::expiry_valid_on("13/30", today()));
    assert!(!expiry::expiry_valid_on("01/20", today()));
    assert!(!expiry::expiry_valid_on("12/99", today()));
    assert!(expiry::expiry_valid_on("10/26", today()));
    assert!(expiry::expiry_valid_on("10/2026", today()));
}

#[test]
fn test_cvc_examples() {
    assert!(!cvc::cvc_valid("123", CardNetwork::AmericanExpress));
    assert!(cvc::cvc_valid("1234", CardNetwork::AmericanExpress));
    assert!(cvc::cvc_valid("123", CardNetwork::Visa));
}

#[test]
fn test_name_examples() {
    assert_eq!(name::format_name("  john o'brien 123!!"), "JOHN OBRIEN");
    assert_eq!(name::name_preview(""), "YOUR NAME");
    assert_eq!(name::name_preview("   "), "YOUR NAME");
}

// =============================================================================
// TYPING SESSIONS
// =============================================================================

#[test]
fn test_type_amex_digit_by_digit() {
    let mut entry = CardEntry::new();
    let texts: Vec<String> = keys(test_cards::AMEX_1)
        .type_into(&mut entry, Field::CardNumber)
        .map(|step| step.text)
        .collect();

    assert_eq!(texts[0], "3");
    assert_eq!(texts[4], "3782 8");
    assert_eq!(texts[9], "3782 822463");
    assert_eq!(texts[10], "3782 822463 1");
    assert_eq!(texts[14], "3782 822463 10005");
    assert_eq!(entry.network(), CardNetwork::AmericanExpress);
}

#[test]
fn test_caret_follows_digit_through_regrouping() {
    // "3782 822" with a 4 inserted at the front becomes a Visa number
    let result = on_card_number_edit(EditEvent::new("3782 822", "43782 822", 1));
    assert_eq!(result.network, CardNetwork::Visa);
    assert_eq!(result.formatted_text, "4378 2822");
    assert_eq!(result.cursor_position, 1);
}

#[test]
fn test_delete_in_middle_keeps_caret() {
    let mut entry = CardEntry::new();
    type_text(&mut entry, Field::CardNumber, "411122223333");
    // caret after the sixth digit ("4111 22|22 3333"), then backspace
    let moves = std::iter::once(Key::Home).chain(std::iter::repeat(Key::Right).take(7));
    let steps: Vec<_> = moves
        .chain(std::iter::once(Key::Backspace))
        .type_into(&mut entry, Field::CardNumber)
        .collect();
    let last = steps.last().unwrap();
    assert_eq!(last.text, "4111 2223 333");
    assert_eq!(last.cursor, 6);
}

#[test]
fn test_paste_formats_and_moves_caret_to_end() {
    let mut entry = CardEntry::new();
    type_text(&mut entry, Field::CardNumber, "4");
    let steps: Vec<_> = vec![Key::Paste("111-1111-1111-1111".into())]
        .into_iter()
        .type_into(&mut entry, Field::CardNumber)
        .collect();
    assert_eq!(steps[0].text, "4111 1111 1111 1111");
    assert_eq!(steps[0].cursor, 19);
}

#[test]
fn test_expiry_never_holds_impossible_month() {
    for first in '0'..='9' {
        for second in '0'..='9' {
            let mut entry = CardEntry::new();
            let typed: String = [first, second].iter().collect();
            type_text(&mut entry, Field::Expiry, &typed);

            let digits = format::digits_only(entry.expiry());
            let month: u8 = digits[..2].parse().unwrap();
            assert!((1..=12).contains(&month), "typed {} stored {}", typed, digits);
        }
    }
}

#[test]
fn test_expiry_edits_match_session() {
    let step = on_expiry_edit(EditEvent::new("", "3", 1));
    assert_eq!(step.formatted_text, "03");
    assert_eq!(step.cursor_position, 2);

    let step = on_expiry_edit(EditEvent::new("03", "031", 3));
    assert_eq!(step.formatted_text, "03/1");
    assert_eq!(step.cursor_position, 4);
}

#[test]
fn test_switching_network_reclamps_cvc() {
    let mut entry = CardEntry::new();
    type_text(&mut entry, Field::CardNumber, "37");
    type_text(&mut entry, Field::Cvc, "1234");
    assert_eq!(entry.cvc(), "1234");

    // delete the whole number and start a Visa
    let steps: Vec<_> = vec![Key::Backspace, Key::Backspace, Key::Char('4')]
        .into_iter()
        .type_into(&mut entry, Field::CardNumber)
        .collect();
    assert_eq!(steps.last().unwrap().text, "4");
    assert_eq!(entry.cvc(), "123");
}

// =============================================================================
// FORM VALIDATION
// =============================================================================

#[test]
fn test_complete_form() {
    let mut entry = CardEntry::new();
    type_text(&mut entry, Field::CardNumber, test_cards::MC_1);
    type_text(&mut entry, Field::Expiry, "0429");
    type_text(&mut entry, Field::Cvc, "321");
    type_text(&mut entry, Field::Name, "grace hopper");

    let state = entry.validate_all_on(today()).clone();
    assert!(state.valid);
    assert!(state.message.is_empty());

    let preview = entry.preview();
    assert_eq!(preview.card_number, "5555 5555 5555 4444");
    assert_eq!(preview.expiry, "04/29");
    assert_eq!(preview.name, "GRACE HOPPER");
    assert_eq!(preview.network_label, "MC");
}

#[test]
fn test_aggregate_is_and_of_fields() {
    let numbers = ["4111111111111111", "4111111111111112"];
    let expiries = ["12/30", "12/20"];
    let cvcs = ["123", "12"];
    let names = ["JANE", " "];

    for number in numbers {
        for expiry in expiries {
            for cvc in cvcs {
                for name in names {
                    let state = validate_all_on(number, expiry, cvc, name, today());
                    let all = state.card_number && state.expiry && state.cvc && state.name;
                    assert_eq!(state.valid, all);
                    assert_eq!(state.message.is_empty(), all);
                }
            }
        }
    }
}

#[test]
fn test_blur_then_fix() {
    let mut entry = CardEntry::new();
    type_text(&mut entry, Field::CardNumber, "4111111111111112");
    assert!(!entry.blur_on(Field::CardNumber, today()));
    assert!(!entry.validation().card_number);

    let steps: Vec<_> = vec![Key::Backspace, Key::Char('1')]
        .into_iter()
        .type_into(&mut entry, Field::CardNumber)
        .collect();
    assert_eq!(steps.last().unwrap().text, "4111 1111 1111 1111");
    assert!(entry.blur_on(Field::CardNumber, today()));
}

#[test]
fn test_config_changes_presentation_only() {
    let config = EntryConfig::default()
        .with_fill_char('*')
        .with_name_placeholder("CARDHOLDER")
        .with_error_message("Please check your card");
    let mut entry = CardEntry::with_config(config.clone());

    let preview = entry.preview();
    assert_eq!(preview.card_number, "**** **** **** ****");
    assert_eq!(preview.name, "CARDHOLDER");
    assert_eq!(entry.validate_all_on(today()).message, "Please check your card");

    assert_eq!(
        CardPreview::with_config("", "", "", &config).card_number,
        "**** **** **** ****"
    );
}
