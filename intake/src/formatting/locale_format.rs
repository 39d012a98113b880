// Renders canonical (ISO date, period-decimal) strings under a locale's conventions.
//
// The plain functions never fail: input that is not in canonical shape is returned as is.
// The `try_` variants report it instead.
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{DateFormat, SupportedLocale};

use super::rules::rules_for;
use crate::error::FormatError;

static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("Invalid ISO date regex")
});

static CURRENCY_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}").expect("Invalid currency prefix regex"));

/// Reorders a `YYYY-MM-DD` date into the locale's `dd/mm/yyyy` or `mm/dd/yyyy` order.
/// Only the shape is checked, not whether the date exists.
pub fn try_format_date(
    iso_date: &str,
    locale: impl Into<SupportedLocale>,
) -> Result<String, FormatError> {
    let caps = ISO_DATE_REGEX
        .captures(iso_date)
        .ok_or_else(|| FormatError::MalformedDate(iso_date.to_string()))?;
    let (year, month, day) = (&caps[1], &caps[2], &caps[3]);

    Ok(match rules_for(locale).date_format {
        DateFormat::DayMonthYear => format!("{}/{}/{}", day, month, year),
        DateFormat::MonthDayYear => format!("{}/{}/{}", month, day, year),
    })
}

pub fn format_date(iso_date: &str, locale: impl Into<SupportedLocale>) -> String {
    try_format_date(iso_date, locale).unwrap_or_else(|_| iso_date.to_string())
}

/// Parses a standardized amount such as `BRL2000.50` or `-100.50`.
///
/// A leading three-letter currency code is dropped, then every character other than digits,
/// `.` and `-`. What remains is read up to the first character that cannot continue a number,
/// so `12.5.1` reads as `12.5`. Returns `None` when no number can be read at all.
pub fn parse_amount(amount: &str) -> Option<Decimal> {
    let without_currency = CURRENCY_PREFIX_REGEX.replace(amount, "");
    let numeric: String = without_currency
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_leading_decimal(&numeric)
}

fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let int_part = &rest[..int_len];
    let frac_part = match rest[int_len..].strip_prefix('.') {
        Some(after_dot) => {
            let frac_len = after_dot.find(|c: char| !c.is_ascii_digit()).unwrap_or(after_dot.len());
            &after_dot[..frac_len]
        }
        None => "",
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    Decimal::from_str(&normalized).ok()
}

/// Renders a value with two decimals (half-up), grouped integer digits and the locale's
/// separators.
pub fn format_decimal(value: Decimal, locale: impl Into<SupportedLocale>) -> String {
    let rules = rules_for(locale);

    let mut rounded = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let fixed = rounded.to_string();
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut formatted = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value < Decimal::ZERO {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer, rules.thousand_separator));
    formatted.push(rules.decimal_separator);
    formatted.push_str(&format!("{:0<2}", fraction));
    formatted
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn try_format_number(
    amount: &str,
    locale: impl Into<SupportedLocale>,
) -> Result<String, FormatError> {
    parse_amount(amount)
        .map(|value| format_decimal(value, locale))
        .ok_or_else(|| FormatError::MalformedAmount(amount.to_string()))
}

pub fn format_number(amount: &str, locale: impl Into<SupportedLocale>) -> String {
    try_format_number(amount, locale).unwrap_or_else(|_| amount.to_string())
}

/// Like [`format_number`], with a leading `+` for strictly positive amounts.
pub fn format_amount_with_sign(amount: &str, locale: impl Into<SupportedLocale>) -> String {
    parse_amount(amount)
        .map(|value| format_signed_decimal(value, locale))
        .unwrap_or_else(|| amount.to_string())
}

pub fn format_signed_decimal(value: Decimal, locale: impl Into<SupportedLocale>) -> String {
    let formatted = format_decimal(value, locale);
    if value > Decimal::ZERO {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

pub(crate) fn is_iso_date(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value)
}
