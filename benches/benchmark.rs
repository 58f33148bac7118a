//! Benchmarks for cc_entry performance testing.
//!
//! Every benchmark here runs once per keystroke in a real form, so the
//! interesting numbers are single-call latencies.
//!
//! Run with: cargo bench

use cc_entry::edit::{on_card_number_edit, on_expiry_edit, EditEvent};
use cc_entry::replay::{keys, TypingExt};
use cc_entry::validate::validate_digits;
use cc_entry::{classify, expiry, format, luhn, validate_all_on, CardEntry, CardPreview, Field};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111 1111 1111 1111";
const MASTERCARD_2_SERIES: &str = "2720992837463820";
const AMEX: &str = "378282246310005";
const DINERS: &str = "36000000000008";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
const AMEX_DIGITS: [u8; 15] = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default()
}

/// Benchmark network classification
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("visa", |b| b.iter(|| classify(black_box(VISA_16))));

    // Walks every Mastercard range before matching
    group.bench_function("mastercard_2_series", |b| {
        b.iter(|| classify(black_box(MASTERCARD_2_SERIES)))
    });

    group.bench_function("diners", |b| b.iter(|| classify(black_box(DINERS))));

    group.bench_function("unknown", |b| b.iter(|| classify(black_box("9999"))));

    group.finish();
}

/// Benchmark grouping
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("visa_raw", |b| {
        b.iter(|| format::format_card_number(black_box(VISA_16)))
    });

    group.bench_function("visa_formatted", |b| {
        b.iter(|| format::format_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("amex", |b| {
        b.iter(|| format::format_card_number(black_box(AMEX)))
    });

    group.bench_function("preview", |b| {
        b.iter(|| CardPreview::new(black_box("4111 11"), black_box("1"), black_box("jane")))
    });

    group.finish();
}

/// Benchmark the per-keystroke edit processors
fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    group.bench_function("card_insert_at_end", |b| {
        b.iter(|| on_card_number_edit(black_box(EditEvent::new("4111 1111 111", "4111 1111 1111", 14))))
    });

    group.bench_function("card_insert_in_middle", |b| {
        b.iter(|| on_card_number_edit(black_box(EditEvent::new("4111 1111 111", "41911 1111 111", 3))))
    });

    group.bench_function("card_paste", |b| {
        b.iter(|| on_card_number_edit(black_box(EditEvent::new("", "4111-1111-1111-1111", 19))))
    });

    group.bench_function("expiry_correction", |b| {
        b.iter(|| on_expiry_edit(black_box(EditEvent::new("1", "13", 2))))
    });

    group.finish();
}

/// Benchmark full typing sessions through a `CardEntry`
fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    for card in [VISA_16, AMEX, DINERS] {
        group.throughput(Throughput::Elements(card.len() as u64));

        group.bench_with_input(BenchmarkId::new("card_number", card.len()), card, |b, card| {
            b.iter(|| {
                let mut entry = CardEntry::new();
                keys(black_box(card))
                    .type_into(&mut entry, Field::CardNumber)
                    .count()
            })
        });
    }

    group.finish();
}

/// Benchmark Luhn and validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("luhn_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("luhn_15", |b| {
        b.iter(|| luhn::validate(black_box(&AMEX_DIGITS)))
    });

    group.bench_function("validate_digits", |b| {
        b.iter(|| validate_digits(black_box(&VISA_DIGITS)))
    });

    group.bench_function("parse_expiry", |b| {
        b.iter(|| expiry::parse_expiry(black_box("12/30")))
    });

    let today = today();
    group.bench_function("validate_all", |b| {
        b.iter(|| {
            validate_all_on(
                black_box(VISA_16_FORMATTED),
                black_box("12/30"),
                black_box("123"),
                black_box("JANE DOE"),
                today,
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_format,
    bench_edits,
    bench_typing,
    bench_validation,
);

criterion_main!(benches);
