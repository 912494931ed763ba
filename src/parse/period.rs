//! Reference-period tokens (`Dec/25`, `Q3/25`, ...) to comparable dates.
//!
//! The indicators table stamps every row with a short period token. We only
//! need these to decide which of a country's indicators was updated most
//! recently, so month-level tokens resolve to the first day of the month and
//! quarters to the first day of the quarter.

use chrono::NaiveDate;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december",
];

/// Parse a reference-period token. `None` means "unparseable".
///
/// Rules, first match wins:
/// 1. empty, `n/a` or `-`
/// 2. `Mon/YY` (year = 2000 + YY)
/// 3. `Qn/YY`, `Qn/YYY` or `Qn/YYYY` (anything shorter than four digits is 2000-based)
/// 4. `YYYY-MM-DD`, `Mon YYYY`, `Month YYYY`
pub fn parse_period(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") || s == "-" {
        return None;
    }

    parse_month_slash(s)
        .or_else(|| parse_quarter(s))
        .or_else(|| parse_fallback_formats(s))
}

/// Month number (1-12) for a three-letter English abbreviation, any case.
pub fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    if abbrev.len() != 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbrev))
        .map(|idx| idx as u32 + 1)
}

fn parse_month_slash(s: &str) -> Option<NaiveDate> {
    let (mon, yy) = s.split_once('/')?;
    if mon.len() != 3 || !mon.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let yy = parse_digits(yy, &[2])?;
    let month = month_from_abbrev(mon)?;
    NaiveDate::from_ymd_opt(2000 + yy, month, 1)
}

fn parse_quarter(s: &str) -> Option<NaiveDate> {
    let (q, year) = s.split_once('/')?;
    let quarter = q.strip_prefix(|c: char| c.eq_ignore_ascii_case(&'q'))?;
    let month = match quarter {
        "1" => 1,
        "2" => 4,
        "3" => 7,
        "4" => 10,
        _ => return None,
    };
    // Three-digit years (`Q3/025`) read like two-digit ones.
    let year = match parse_digits(year, &[2, 3, 4])? {
        y if year.len() == 4 => y,
        y => 2000 + y,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_fallback_formats(s: &str) -> Option<NaiveDate> {
    parse_iso_date(s).or_else(|| parse_month_year(s))
}

/// `YYYY-MM-DD`; month and day may drop their leading zero.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = parse_digits(parts.next()?, &[4])?;
    let month = parse_digits(parts.next()?, &[1, 2])?;
    let day = parse_digits(parts.next()?, &[1, 2])?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// `Mon YYYY` or `Month YYYY`, resolved to the 1st of the month.
fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split_whitespace();
    let name = parts.next()?;
    let year = parse_digits(parts.next()?, &[4])?;
    if parts.next().is_some() {
        return None;
    }
    let month = month_from_abbrev(name).or_else(|| month_from_name(name))?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Month number (1-12) for a full English month name, any case.
fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32 + 1)
}

fn parse_digits(s: &str, lengths: &[usize]) -> Option<i32> {
    if !lengths.contains(&s.len()) || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
