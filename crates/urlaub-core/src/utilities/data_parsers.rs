//! Data parsing helpers for calendar dates.
//!
//! Storage hands dates out as ISO strings, sometimes with a time-of-day
//! suffix (`2024-03-01T00:00:00.000Z`) that must be discarded. Forms use
//! the German `TT.MM.JJJJ` spelling. Both parse into `(year, month, day)`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Any time-of-day suffix after a `T` or a space is ignored; dates are
/// timezone-naive calendar days.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    let date_part = s.split(['T', ' ']).next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in German `DD.MM.YYYY` format.
///
/// Returns `(year, month, day)` on success.
pub fn parse_german_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    Some((year, month, day))
}
