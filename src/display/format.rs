//! Formatting helpers shared by reports and record lists

use std::fmt::Write;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::DEFAULT_DATE_FORMAT;
use crate::models::Money;

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a signed balance; negative values are marked with a trailing `*`
pub fn format_balance(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("{} *", amount.format_with_symbol(symbol))
    } else {
        amount.format_with_symbol(symbol)
    }
}

/// Format `instant` as a date in the viewer's zone
///
/// Falls back to `%Y-%m-%d` when `date_format` cannot be rendered.
pub fn format_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz, date_format: &str) -> String {
    let local = instant.with_timezone(tz).naive_local();
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_ok() {
        return out;
    }
    tracing::debug!(date_format, "unrenderable date format, using default");
    local.format(DEFAULT_DATE_FORMAT).to_string()
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Shorten `s` to at most `max` characters, ending with "..." when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance_marks_negative() {
        assert_eq!(format_balance(Money::from_units(-300), "₦"), "-₦300.00 *");
        assert_eq!(format_balance(Money::from_units(1200), "$"), "$1,200.00");
    }

    #[test]
    fn test_format_date_uses_viewer_zone() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap();
        let plus_one = chrono::FixedOffset::east_opt(3600).unwrap();

        assert_eq!(format_date(&instant, &Utc, "%Y-%m-%d"), "2025-01-31");
        assert_eq!(format_date(&instant, &plus_one, "%Y-%m-%d"), "2025-02-01");
        assert_eq!(format_date(&instant, &Utc, "%d/%m/%Y"), "31/01/2025");
    }

    #[test]
    fn test_format_date_falls_back_on_bad_format() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 4, 12, 0, 0).unwrap();
        assert_eq!(format_date(&instant, &Utc, "%Q"), "2025-03-04");
        assert_eq!(format_date(&instant, &Utc, "%z"), "2025-03-04");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Gifts/Donations", 8), "Gifts...");
        assert_eq!(truncate("Food", 8), "Food");
    }
}
