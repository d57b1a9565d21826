//! Money, percentage and date formatting

use crate::{Result, Script, TextError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Return rate shown when the premium is zero or the ratio is not a number
pub const ZERO_PERCENT: &str = "0%";

/// Maximum fraction digits kept by [`format_money`]
const MONEY_FRACTION_DIGITS: u32 = 3;

/// Date layouts accepted by [`parse_date`] (besides RFC 3339)
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Format an amount with `,` thousand separators and no currency symbol
///
/// Keeps up to three fraction digits, trailing zeros removed.
///
/// # Examples
/// ```
/// use cjk_text::format_money;
/// assert_eq!(format_money(25000.0), "25,000");
/// assert_eq!(format_money(1234.5), "1,234.5");
/// assert_eq!(format_money(0.1234), "0.123");
/// ```
pub fn format_money(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let multiplier = 10_u64.pow(MONEY_FRACTION_DIGITS);
    let scaled = (amount.abs() * multiplier as f64).round();

    let (int_digits, frac) = if scaled < u64::MAX as f64 {
        let scaled = scaled as u64;
        ((scaled / multiplier).to_string(), scaled % multiplier)
    } else {
        // Beyond u64 range the fraction is below f64 precision anyway
        (format!("{:.0}", amount.abs().trunc()), 0)
    };

    let int_str = format_with_thousands(&int_digits, ',');
    let frac_str = if frac > 0 {
        let padded = format!("{:0>width$}", frac, width = MONEY_FRACTION_DIGITS as usize);
        format!(".{}", padded.trim_end_matches('0'))
    } else {
        String::new()
    };

    let is_zero = int_digits == "0" && frac == 0;
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{int_str}{frac_str}")
}

/// Format a plain percentage value (e.g., `4.2` -> `"4.2%"`)
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Total return of `amount` against `premium_total`, as an integer percent
///
/// Rounds half away from zero. A zero premium (or any ratio that is not
/// finite) yields [`ZERO_PERCENT`] instead of dividing.
///
/// # Examples
/// ```
/// use cjk_text::compute_return_rate;
/// assert_eq!(compute_return_rate(580000.0, 500000.0), "116%");
/// assert_eq!(compute_return_rate(1.0, 0.0), "0%");
/// assert_eq!(compute_return_rate(1.0, 200.0), "1%"); // 0.5 rounds up
/// ```
pub fn compute_return_rate(amount: f64, premium_total: f64) -> String {
    if premium_total == 0.0 {
        return ZERO_PERCENT.to_string();
    }

    let ratio = amount / premium_total * 100.0;
    if !ratio.is_finite() {
        return ZERO_PERCENT.to_string();
    }

    let rounded = ratio.round();
    // Avoid printing "-0%"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}%")
}

/// Parse a calendar date string
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps and
/// `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.date_naive());
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.date());
    }

    Err(TextError::InvalidDate(input.to_string()))
}

/// Format a date string as a short month-day label (e.g., "3月31日")
///
/// Empty input stays empty; input that is not a valid date is returned
/// unchanged.
pub fn format_short_date(input: &str, script: Script) -> String {
    if input.is_empty() {
        return String::new();
    }

    match parse_date(input) {
        Ok(date) => format!(
            "{}{}{}{}",
            date.month(),
            script.month_unit(),
            date.day(),
            script.day_unit()
        ),
        Err(_) => input.to_string(),
    }
}

/// Insert a separator every three digits, counting from the right
fn format_with_thousands(digits: &str, sep: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, sep);
        }
        result.insert(0, c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(999.0), "999");
        assert_eq!(format_money(1000.0), "1,000");
        assert_eq!(format_money(250000.0), "250,000");
        assert_eq!(format_money(1000000.0), "1,000,000");
    }

    #[test]
    fn test_format_money_fraction() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(0.5), "0.5");
        assert_eq!(format_money(1.23456), "1.235");
        assert_eq!(format_money(2.0004), "2");
    }

    #[test]
    fn test_format_money_negative_and_special() {
        assert_eq!(format_money(-1500.0), "-1,500");
        assert_eq!(format_money(-0.0001), "0");
        assert_eq!(format_money(f64::NAN), "NaN");
        assert_eq!(format_money(f64::INFINITY), "∞");
        assert_eq!(format_money(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4.2), "4.2%");
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(3.5), "3.5%");
    }

    #[test]
    fn test_compute_return_rate() {
        assert_eq!(compute_return_rate(580000.0, 500000.0), "116%");
        assert_eq!(compute_return_rate(950000.0, 500000.0), "190%");
        assert_eq!(compute_return_rate(700000.0, 500000.0), "140%");
        assert_eq!(compute_return_rate(0.0, 500000.0), "0%");
    }

    #[test]
    fn test_compute_return_rate_rounding() {
        // 0.5% rounds up, 0.4% rounds down
        assert_eq!(compute_return_rate(1.0, 200.0), "1%");
        assert_eq!(compute_return_rate(2.0, 500.0), "0%");
        assert_eq!(compute_return_rate(-0.001, 500.0), "0%");
    }

    #[test]
    fn test_compute_return_rate_non_finite() {
        assert_eq!(compute_return_rate(f64::NAN, 100.0), "0%");
        assert_eq!(compute_return_rate(f64::INFINITY, 100.0), "0%");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-31"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
        );
        assert_eq!(
            parse_date("2025/12/01"),
            Ok(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap())
        );
        assert_eq!(
            parse_date("2025-03-31T10:00:00+08:00"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
        );
        assert_eq!(
            parse_date("2025-03-31T10:00:00"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("next friday").is_err());
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("", Script::Simplified), "");
        assert_eq!(
            format_short_date("not-a-date", Script::Simplified),
            "not-a-date"
        );
        assert_eq!(format_short_date("2025-03-31", Script::Simplified), "3月31日");
        assert_eq!(format_short_date("2025-01-05", Script::Traditional), "1月5日");
    }

    #[test]
    fn test_format_with_thousands() {
        assert_eq!(format_with_thousands("1000", ','), "1,000");
        assert_eq!(format_with_thousands("1000000", ','), "1,000,000");
        assert_eq!(format_with_thousands("100", ','), "100");
    }

    proptest! {
        #[test]
        fn zero_premium_is_zero_percent(amount in proptest::num::f64::ANY) {
            prop_assert_eq!(compute_return_rate(amount, 0.0), ZERO_PERCENT);
        }

        #[test]
        fn premium_against_itself_is_hundred(premium in 0.01f64..1.0e12) {
            prop_assert_eq!(compute_return_rate(premium, premium), "100%");
        }

        #[test]
        fn unparseable_dates_pass_through(s in "[a-z ]{1,20}") {
            prop_assert_eq!(format_short_date(&s, Script::Traditional), s);
        }

        #[test]
        fn money_digits_survive_grouping(n in 0u64..1_000_000_000_000) {
            let formatted = format_money(n as f64);
            prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        }
    }
}
