#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
    assert_eq!(truncate("a", 1), "a");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_cents() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

#[test]
fn test_format_amount_sample_rent() {
    assert_eq!(format_amount(dec!(1450.00)), "$1,450.00");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent_whole() {
    assert_eq!(format_percent(dec!(0.5)), "50%");
    assert_eq!(format_percent(dec!(1)), "100%");
    assert_eq!(format_percent(dec!(0)), "0%");
}

#[test]
fn test_format_percent_rounds() {
    assert_eq!(format_percent(dec!(0.3373)), "34%");
    assert_eq!(format_percent(dec!(0.333)), "33%");
    assert_eq!(format_percent(dec!(0.335)), "34%");
}

#[test]
fn test_format_percent_over_one() {
    assert_eq!(format_percent(dec!(1.25)), "125%");
}

// ── format_date ───────────────────────────────────────────────

#[test]
fn test_format_date() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    assert_eq!(format_date(date), "Jun 15, 2025");
}

#[test]
fn test_format_date_single_digit_day() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    assert_eq!(format_date(date), "Jun 1, 2025");
}

// ── ListCursor ────────────────────────────────────────────────

#[test]
fn test_cursor_down_scrolls_page() {
    let mut cursor = ListCursor::default();
    for _ in 0..5 {
        cursor.down(10, 3);
    }
    assert_eq!(cursor.index, 5);
    assert_eq!(cursor.scroll, 3);
}

#[test]
fn test_cursor_down_stops_at_end() {
    let mut cursor = ListCursor::default();
    for _ in 0..20 {
        cursor.down(4, 10);
    }
    assert_eq!(cursor.index, 3);
}

#[test]
fn test_cursor_up_scrolls_back() {
    let mut cursor = ListCursor { index: 5, scroll: 3 };
    for _ in 0..5 {
        cursor.up();
    }
    assert_eq!(cursor.index, 0);
    assert_eq!(cursor.scroll, 0);
}

#[test]
fn test_cursor_up_at_top_is_noop() {
    let mut cursor = ListCursor::default();
    cursor.up();
    assert_eq!(cursor.index, 0);
}

#[test]
fn test_cursor_jumps() {
    let mut cursor = ListCursor::default();
    cursor.to_bottom(10, 4);
    assert_eq!(cursor.index, 9);
    assert_eq!(cursor.scroll, 6);

    cursor.to_top();
    assert_eq!(cursor.index, 0);
    assert_eq!(cursor.scroll, 0);

    cursor.to_bottom(0, 4);
    assert_eq!(cursor.index, 0);
}

#[test]
fn test_cursor_clamp_after_shrink() {
    let mut cursor = ListCursor { index: 9, scroll: 6 };
    cursor.clamp(4);
    assert_eq!(cursor.index, 3);
    assert!(cursor.scroll <= cursor.index);

    cursor.clamp(0);
    assert_eq!(cursor.index, 0);
    assert_eq!(cursor.scroll, 0);
}
