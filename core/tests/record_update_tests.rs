mod common;

use common::table;
use seqfix::{UpdateConfig, update_sequence_numbers};

#[test]
fn rewrites_sequence_field_from_lookup() {
    let outcome = update_sequence_numbers(
        "CPSP00372003559 001",
        &table(&[("03559", "999")]),
        &UpdateConfig::default(),
    );
    assert_eq!(outcome.processed_text, "CPSP00372003559 999");
    assert_eq!(outcome.changes.len(), 1);
    assert_eq!(outcome.changes[0].original_line, "CPSP00372003559 001");
    assert_eq!(outcome.changes[0].updated_line, "CPSP00372003559 999");
}

#[test]
fn bytes_outside_the_sequence_window_are_untouched() {
    let outcome = update_sequence_numbers(
        "CPSP00372003559 001 trailing payload",
        &table(&[("03559", "7")]),
        &UpdateConfig::default(),
    );
    assert_eq!(
        outcome.processed_text,
        "CPSP00372003559 7   trailing payload"
    );
}

#[test]
fn unmatched_identifiers_pass_through() {
    let outcome = update_sequence_numbers(
        "CPSP00372003559 001",
        &table(&[("99999", "999")]),
        &UpdateConfig::default(),
    );
    assert_eq!(outcome.processed_text, "CPSP00372003559 001");
    assert!(outcome.changes.is_empty());
}

#[test]
fn first_table_entry_wins_under_duplicates() {
    let outcome = update_sequence_numbers(
        "CPSP00372003559 001",
        &table(&[("03559", "111"), ("03559", "222")]),
        &UpdateConfig::default(),
    );
    assert_eq!(outcome.processed_text, "CPSP00372003559 111");
}

#[test]
fn short_and_blank_sequence_lines_pass_through() {
    let text = "CPSP0110600606\nCPSP00372003559    \nCPSP00372003559 001";
    let outcome = update_sequence_numbers(
        text,
        &table(&[("03559", "999"), ("00606", "5")]),
        &UpdateConfig::default(),
    );
    assert_eq!(
        outcome.processed_text,
        "CPSP0110600606\nCPSP00372003559    \nCPSP00372003559 999"
    );
    assert_eq!(outcome.changes.len(), 1);
}

#[test]
fn writing_the_current_value_logs_no_change() {
    let outcome = update_sequence_numbers(
        "CPSP00372003559 001",
        &table(&[("03559", "001")]),
        &UpdateConfig::default(),
    );
    assert_eq!(outcome.processed_text, "CPSP00372003559 001");
    assert!(outcome.changes.is_empty());
}

#[test]
fn update_is_idempotent_once_converged() {
    let table = table(&[("03559", "999")]);
    let config = UpdateConfig::default();
    let text = "CPSP00372003559 001\nCPSP00199003559 002";
    let first = update_sequence_numbers(text, &table, &config);
    let second = update_sequence_numbers(&first.processed_text, &table, &config);
    assert_eq!(second.processed_text, first.processed_text);
    assert!(second.changes.is_empty());
}

#[test]
fn trailing_newline_round_trips() {
    let text = "CPSP00372003559 001\n";
    let outcome = update_sequence_numbers(text, &table(&[("99999", "1")]), &UpdateConfig::default());
    assert_eq!(outcome.processed_text, text);
}

#[test]
fn sequences_longer_than_the_field_are_truncated() {
    let outcome = update_sequence_numbers(
        "CPSP00372003559 001",
        &table(&[("03559", "12345")]),
        &UpdateConfig::default(),
    );
    assert_eq!(outcome.processed_text, "CPSP00372003559 123");
}

#[test]
fn raised_minimum_length_skips_bare_records() {
    let config = UpdateConfig {
        min_record_len: 22,
        ..Default::default()
    };
    let text = "CPSP00372003559 001\nCPSP00372003559 001 XX";
    let outcome = update_sequence_numbers(text, &table(&[("03559", "999")]), &config);
    assert_eq!(
        outcome.processed_text,
        "CPSP00372003559 001\nCPSP00372003559 999 XX"
    );
    assert_eq!(outcome.changes.len(), 1);
}
