//! Caller-owned holiday cache.
//!
//! Holiday sets are invariant per year, so a caller that counts many ranges
//! (the dashboard walks every request of every employee) can keep one
//! `HolidayCache` for the duration of that work. The cache is a plain value
//! the caller owns and drops; the engine keeps no hidden state.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::date_range::DateRange;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;
use urlaub_core::errors::Result;
use urlaub_core::{Days, Year};

/// A `year -> holiday dates` memo bound to one calendar.
#[derive(Debug)]
pub struct HolidayCache<'c> {
    calendar: &'c dyn Calendar,
    years: HashMap<Year, BTreeSet<Date>>,
}

impl<'c> HolidayCache<'c> {
    /// An empty cache for `calendar`.
    pub fn new(calendar: &'c dyn Calendar) -> Self {
        Self {
            calendar,
            years: HashMap::new(),
        }
    }

    /// The calendar the cache answers for.
    pub fn calendar(&self) -> &'c dyn Calendar {
        self.calendar
    }

    /// The holiday dates of `year`, computed on first use.
    pub fn holidays(&mut self, year: Year) -> Result<&BTreeSet<Date>> {
        match self.years.entry(year) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(v) => {
                trace!(year, calendar = self.calendar.name(), "holiday cache miss");
                let dates = self.calendar.holiday_dates(year)?;
                Ok(v.insert(dates))
            }
        }
    }

    /// Cached variant of [`Calendar::is_working_day`].
    pub fn is_working_day(&mut self, date: Date) -> Result<bool> {
        if self.calendar.is_rest_day(date) {
            return Ok(false);
        }
        Ok(!self.holidays(date.year())?.contains(&date))
    }

    /// Cached variant of [`Calendar::count_working_days`]; 0 when `start > end`.
    pub fn count_working_days(&mut self, start: Date, end: Date) -> Result<Days> {
        match DateRange::new(start, end) {
            Ok(range) => self.count_working_days_in(&range),
            Err(_) => Ok(0),
        }
    }

    /// Cached variant of [`Calendar::count_working_days_in`].
    pub fn count_working_days_in(&mut self, range: &DateRange) -> Result<Days> {
        let mut count = 0;
        for day in range.days() {
            if self.is_working_day(day)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Number of years held.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether no year has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Drop every cached year.
    pub fn clear(&mut self) {
        self.years.clear();
    }
}
