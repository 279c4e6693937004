//! Raw-field parsing.
//!
//! Every calculator field arrives as user-entered text. A blank or
//! unparseable field yields `None` ("absent"), which downstream formulas
//! treat as "cannot yet compute" — never as zero.

use jiff::civil::Date;

/// Parse a decimal field. `None` for blank input, parse failures, and
/// non-finite values.
pub fn decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a decimal field that must be strictly positive.
pub fn positive(raw: &str) -> Option<f64> {
    decimal(raw).filter(|v| *v > 0.0)
}

/// Parse a whole-number field.
pub fn integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parse a whole-number field that must be strictly positive.
pub fn positive_integer(raw: &str) -> Option<i64> {
    integer(raw).filter(|v| *v > 0)
}

/// Parse an ISO `YYYY-MM-DD` date field.
pub fn date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Date>().ok()
}
