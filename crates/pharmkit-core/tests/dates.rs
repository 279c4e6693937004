use jiff::civil::Date;
use pharmkit_core::dates;

fn d(year: i16, month: i8, day: i8) -> Date {
    Date::new(year, month, day).unwrap()
}

#[test]
fn month_end_rolls_over_instead_of_clamping() {
    // Jan 31 + 1 month = Feb 1 + 30 days = Mar 3 in a non-leap year.
    assert_eq!(dates::add_months_rolling(d(2025, 1, 31), 1), Some(d(2025, 3, 3)));
    // Leap year: lands on Mar 2.
    assert_eq!(dates::add_months_rolling(d(2024, 1, 31), 1), Some(d(2024, 3, 2)));
}

#[test]
fn month_addition_crosses_year_boundaries() {
    assert_eq!(dates::add_months_rolling(d(2025, 11, 15), 2), Some(d(2026, 1, 15)));
    assert_eq!(dates::add_months_rolling(d(2025, 12, 31), 1), Some(d(2026, 1, 31)));
}

#[test]
fn day_addition() {
    assert_eq!(dates::add_days(d(2025, 1, 1), 30), Some(d(2025, 1, 31)));
    assert_eq!(dates::add_days(d(2025, 1, 1), -1), Some(d(2024, 12, 31)));
}

#[test]
fn absurd_day_counts_yield_none_rather_than_panicking() {
    assert_eq!(dates::add_days(d(2025, 1, 1), i64::MAX), None);
}

#[test]
fn days_between_is_signed() {
    assert_eq!(dates::days_between(d(2025, 1, 10), d(2025, 1, 28)), 18);
    assert_eq!(dates::days_between(d(2025, 2, 1), d(2025, 1, 28)), -4);
    assert_eq!(dates::days_between(d(2025, 1, 28), d(2025, 1, 28)), 0);
}

#[test]
fn dmy_formatting_pads_day_and_month() {
    assert_eq!(dates::format_dmy(d(2025, 3, 3)), "03/03/2025");
    assert_eq!(dates::format_dmy(d(2025, 12, 25)), "25/12/2025");
}
