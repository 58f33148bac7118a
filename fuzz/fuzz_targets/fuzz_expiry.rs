//! Fuzz target for expiry date parsing and correction.
//!
//! Tests that expiry handling never panics on arbitrary input.

#![no_main]

use cc_entry::expiry;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = expiry::parse_expiry(data);
    let _ = expiry::validate_expiry(data);
    let _ = expiry::expiry_valid(data);

    // Correction always yields a plausible month
    let (digits, _) = expiry::correct_expiry_digits(data);
    assert!(digits.len() <= 4);
    if digits.len() >= 2 {
        let month: u8 = digits[..2].parse().unwrap();
        assert!((1..=12).contains(&month), "corrected month {}", month);
    }

    let formatted = expiry::format_expiry(data);
    assert_eq!(expiry::format_expiry(&formatted), formatted, "format not idempotent");

    // If parsing succeeds, test other methods
    if let Ok(exp) = expiry::parse_expiry(data) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let _ = exp.is_expired_on(today);
        let _ = exp.months_until_expiry_on(today);
        let _ = exp.format_short();
        let _ = exp.format_long();
        let _ = exp.to_string();
    }
});
