//! Date parsing for Spanish long-form and numeric dates.
//!
//! Every extracted date is calendar-validated through chrono and rendered
//! as zero-padded DD/MM/YYYY.

use chrono::NaiveDate;
use regex::Captures;

/// Month number for a Spanish month name, case-insensitive.
pub fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "enero" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" => 8,
        "septiembre" | "setiembre" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,
        _ => return None,
    };
    Some(month)
}

fn format_checked(day: u32, month: u32, year: i32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{day:02}/{month:02}/{year:04}"))
}

/// Transform for "12 de marzo de 2024" style dates.
///
/// Expects groups: (1) day, (2) month name, (3) year.
pub fn long_date(caps: &Captures) -> Option<String> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_number(caps.get(2)?.as_str())?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    format_checked(day, month, year)
}

/// Transform for numeric DD/MM/YYYY (or DD-MM-YYYY) dates.
///
/// Expects groups: (1) day, (2) month, (3) year. Two-digit years are
/// assumed to be 2000s.
pub fn dmy_date(caps: &Captures) -> Option<String> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let mut year: i32 = caps.get(3)?.as_str().parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    format_checked(day, month, year)
}
