//! Calendar date facts and strict format validation.
//!
//! # Responsibility
//! - Decide whether a string denotes a real Gregorian calendar day.
//! - Provide leap-year and month-length facts to other core modules.
//!
//! # Invariants
//! - The canonical date form is fixed-width, zero-padded `YYYY-MM-DD`.
//! - Every date accepted here compares chronologically under plain string
//!   ordering, because the accepted format is fixed-width.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical date format, for prompts and error messages.
pub const DATE_FORMAT: &str = "YYYY-MM-DD";

// ASCII classes only; `\d` would also admit non-ASCII digits.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid date pattern"));

/// Returns true for years divisible by 4, excluding century years not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the Gregorian length of `month` in `year`.
///
/// Months outside 1..=12 yield 0; callers range-check the month first.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Returns true when `text` is a calendar-valid `YYYY-MM-DD` date.
///
/// The format gate is strict: four digits, `-`, two digits, `-`, two
/// digits. Missing zero-padding, other separators and non-numeric
/// components are rejected before any calendar check runs.
pub fn is_valid_date(text: &str) -> bool {
    parse_parts(text).is_some()
}

/// Returns the day after `date` in canonical form.
///
/// Returns `None` when `date` is not valid, or when the successor would
/// leave the 4-digit year range (past `9999-12-31`).
pub fn next_day(date: &str) -> Option<String> {
    let (year, month, day) = parse_parts(date)?;

    if day < days_in_month(year, month) {
        return Some(format_date(year, month, day + 1));
    }
    if month < 12 {
        return Some(format_date(year, month + 1, 1));
    }
    if year < 9999 {
        return Some(format_date(year + 1, 1, 1));
    }
    None
}

fn parse_parts(text: &str) -> Option<(i32, u32, u32)> {
    let captures = DATE_RE.captures(text)?;

    // The pattern guarantees short ASCII-digit runs; these parses cannot fail.
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }
    if day < 1 || day > days_in_month(year, month) {
        return None;
    }

    Some((year, month, day))
}

fn format_date(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}
