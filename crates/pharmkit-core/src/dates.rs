//! Calendar arithmetic for the date tools.
//!
//! Month addition reproduces native rollover semantics: adding one month
//! to Jan 31 lands in early March, it is not clamped to the end of
//! February.

use jiff::Span;
use jiff::civil::Date;

/// `date + days`. `None` when the result is out of range.
pub fn add_days(date: Date, days: i64) -> Option<Date> {
    let span = Span::new().try_days(days).ok()?;
    date.checked_add(span).ok()
}

/// `date + months` with day-of-month overflow rolling into the next
/// month: Jan 31 + 1 month = Feb 1 + 30 days = Mar 3 (non-leap).
pub fn add_months_rolling(date: Date, months: i64) -> Option<Date> {
    let zero_based = i64::from(date.month()) - 1 + months;
    let year = i64::from(date.year()) + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) + 1;
    let first = Date::new(i16::try_from(year).ok()?, month as i8, 1).ok()?;
    add_days(first, i64::from(date.day()) - 1)
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> i64 {
    i64::from((to - from).get_days())
}

/// `DD/MM/YYYY`, the format every date tool renders.
pub fn format_dmy(date: Date) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
