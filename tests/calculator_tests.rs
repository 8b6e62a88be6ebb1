mod common;
use common::at;
use rworklog::core::calculator::{
    DEFAULT_STANDARD_MINUTES, compute_break_minutes, compute_earnings, compute_worked_minutes,
    is_overtime, round_earnings,
};

#[test]
fn worked_minutes_subtract_breaks() {
    let start = at("2025-06-02", "09:00");
    let end = at("2025-06-02", "18:00");
    assert_eq!(compute_worked_minutes(Some(start), end, 60), 480);
    assert_eq!(compute_worked_minutes(Some(start), end, 0), 540);
}

#[test]
fn worked_minutes_without_clock_in_is_zero() {
    assert_eq!(compute_worked_minutes(None, at("2025-06-02", "18:00"), 0), 0);
}

#[test]
fn worked_minutes_never_negative() {
    let start = at("2025-06-02", "09:00");
    // end before start
    assert_eq!(
        compute_worked_minutes(Some(start), at("2025-06-02", "08:00"), 0),
        0
    );
    // breaks longer than the span
    assert_eq!(
        compute_worked_minutes(Some(start), at("2025-06-02", "10:00"), 90),
        0
    );
}

#[test]
fn worked_minutes_floor_partial_minutes() {
    let start = at("2025-06-02", "09:00");
    let end = start + chrono::Duration::seconds(59 * 60 + 59);
    assert_eq!(compute_worked_minutes(Some(start), end, 0), 59);
}

#[test]
fn earnings_regular_day() {
    let e = compute_earnings(480, 3000.0, None, DEFAULT_STANDARD_MINUTES);
    assert_eq!(round_earnings(e), 24000);
}

#[test]
fn earnings_with_overtime_rate() {
    let e = compute_earnings(600, 3000.0, Some(3750.0), DEFAULT_STANDARD_MINUTES);
    assert_eq!(round_earnings(e), 31500);
}

#[test]
fn earnings_overtime_falls_back_to_125_percent() {
    let none = compute_earnings(600, 3000.0, None, DEFAULT_STANDARD_MINUTES);
    let zero = compute_earnings(600, 3000.0, Some(0.0), DEFAULT_STANDARD_MINUTES);
    assert_eq!(round_earnings(none), 31500);
    assert_eq!(round_earnings(zero), 31500);
}

#[test]
fn earnings_zero_or_negative_work() {
    assert_eq!(compute_earnings(0, 3000.0, Some(3750.0), 480), 0.0);
    assert_eq!(compute_earnings(-5, 3000.0, None, 480), 0.0);
}

#[test]
fn earnings_keep_fractions_until_rounded() {
    // 1 minute at 3000/h = 50
    let e = compute_earnings(1, 3000.0, None, 480);
    assert!((e - 50.0).abs() < 1e-9);
    // 1 minute at 1000/h = 16.66..
    let e = compute_earnings(1, 1000.0, None, 480);
    assert_eq!(round_earnings(e), 17);
}

#[test]
fn break_minutes_need_both_ends() {
    let s = at("2025-06-02", "12:00");
    let e = at("2025-06-02", "13:00");
    assert_eq!(compute_break_minutes(Some(s), Some(e), 15), 60);
    assert_eq!(compute_break_minutes(Some(s), None, 15), 15);
    assert_eq!(compute_break_minutes(None, Some(e), 15), 15);
    assert_eq!(compute_break_minutes(Some(e), Some(s), 15), 0);
}

#[test]
fn overtime_is_strictly_above_target() {
    assert!(!is_overtime(480, 480));
    assert!(is_overtime(481, 480));
    assert!(!is_overtime(0, 480));
}
