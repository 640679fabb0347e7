//! Localized presentation of purchase dates and totals.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::types::Amount;
use crate::models::config::LocaleConfig;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses the date part of an ISO date or date-time string.
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|date_time| date_time.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Short date in the configured pattern. Unparseable input is returned as is.
pub fn format_date(raw: &str, locale: &LocaleConfig) -> String {
    let Some(date) = parse_purchase_date(raw) else {
        return raw.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(&locale.date_format)).is_err() {
        log::warn!("Invalid date format {:?}", locale.date_format);
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Currency symbol followed by the grouped amount, e.g. `$150,000` or `$1,234.5`.
pub fn format_amount(amount: Amount, locale: &LocaleConfig) -> String {
    let digits = usize::from(locale.max_fraction_digits.min(6));
    let value = amount.get();
    let rounded = format!("{:.*}", digits, value.abs());

    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let negative = value < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::with_capacity(rounded.len() + 8);
    out.push_str(&locale.currency_symbol);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer, &locale.thousands_separator));
    if !fraction.is_empty() {
        out.push_str(&locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}
