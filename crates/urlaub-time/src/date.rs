//! `Date` type: a timezone-naive calendar day.
//!
//! Dates carry no time-of-day component. Strings read from storage may
//! still carry one (`2024-03-01T00:00:00.000Z`); it is discarded on parse.
//!
//! # Valid range
//! Years 1583–9999: the Gregorian calendar, which the Easter computation
//! assumes, and the four-digit years storage emits.

use crate::weekday::Weekday;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use urlaub_core::errors::{Error, Result};
use urlaub_core::utilities::data_parsers::{parse_german_date, parse_iso_date};
use urlaub_core::Year;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// First supported year.
    pub const MIN_YEAR: Year = 1583;

    /// Last supported year.
    pub const MAX_YEAR: Year = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u32, day: u32) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                Error::Date(format!(
                    "day {day} out of range [1, {}] for {year}-{month:02}",
                    days_in_month(year, month)
                ))
            })
    }

    /// January 1 of `year`.
    pub fn first_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn last_of_year(year: Year) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    /// The given weekday of ISO week `week` in ISO week-year `year`.
    pub fn from_iso_week(year: Year, week: u32, weekday: Weekday) -> Result<Self> {
        check_year(year)?;
        let wd = match weekday {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        };
        let d = NaiveDate::from_isoywd_opt(year, week, wd)
            .ok_or_else(|| Error::Date(format!("ISO week {week} does not exist in {year}")))?;
        check_year(d.year())?;
        Ok(Date(d))
    }

    /// Parse an ISO (`2024-12-10`, optional time suffix) or German
    /// (`10.12.2024`) date string.
    pub fn parse(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .or_else(|| parse_german_date(s))
            .ok_or_else(|| Error::Date(format!("cannot parse date from {s:?}")))?;
        Self::from_ymd(y, m, d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// Return the underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Format as `YYYY-MM-DD`, the storage spelling.
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let moved = self
            .0
            .checked_add_signed(chrono::Duration::days(i64::from(n)))
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} days overflows")))?;
        check_year(moved.year())?;
        Ok(Date(moved))
    }

    /// The following day, or `None` past the end of the supported range.
    pub fn succ(self) -> Option<Self> {
        self.0
            .succ_opt()
            .filter(|d| d.year() <= Self::MAX_YEAR)
            .map(Date)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        // Both ends lie within years 1583–9999, so the span fits an i32.
        other.0.signed_duration_since(self.0).num_days() as i32
    }
}

fn check_year(year: Year) -> Result<()> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "year {year} out of range [{}, {}]",
            Date::MIN_YEAR,
            Date::MAX_YEAR
        )));
    }
    Ok(())
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        rhs.days_between(self)
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: NaiveDate) -> Result<Self> {
        check_year(d.year())?;
        Ok(Date(d))
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        Date::parse(&s)
    }
}

impl From<Date> for String {
    fn from(d: Date) -> Self {
        d.to_iso_string()
    }
}

impl std::str::FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format("%Y-%m-%d"))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u32) -> u32 {
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

// ── Tests ─────────────────────────────────────────────────────────────────────
