//! `DateRange`: an inclusive span of calendar days.

use crate::date::Date;
use serde::{Deserialize, Serialize};
use urlaub_core::errors::{Error, Result};
use urlaub_core::{Days, Year};

/// An inclusive range `[start, end]` of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct DateRange {
    start: Date,
    end: Date,
}

#[derive(Deserialize)]
struct RawRange {
    start: Date,
    end: Date,
}

impl TryFrom<RawRange> for DateRange {
    type Error = Error;
    fn try_from(raw: RawRange) -> Result<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Create a range; fails if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "range start {start} lies after its end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// A single-day range.
    pub fn single(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// January 1 through December 31 of `year`.
    pub fn year(year: Year) -> Result<Self> {
        Ok(Self {
            start: Date::first_of_year(year)?,
            end: Date::last_of_year(year)?,
        })
    }

    /// First day (inclusive).
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of calendar days, counting both ends.
    pub fn len_days(&self) -> Days {
        // start <= end is a construction invariant.
        (self.start.days_between(self.end) + 1) as Days
    }

    /// Whether `day` lies inside the range.
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Inclusive overlap test: `self.start <= other.end && self.end >= other.start`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// The common part of two ranges, if any.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The part of the range that falls inside `year`.
    pub fn clip_to_year(&self, year: Year) -> Option<DateRange> {
        DateRange::year(year).ok().and_then(|y| self.intersect(&y))
    }

    /// The calendar years the range touches, in ascending order.
    pub fn years(&self) -> std::ops::RangeInclusive<Year> {
        self.start.year()..=self.end.year()
    }

    /// Iterate over every day of the range, in order.
    pub fn days(&self) -> DayIter {
        DayIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bis {}", self.start, self.end)
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DayIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DayIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ();
        Some(current)
    }
}
