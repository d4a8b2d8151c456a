//! `Calendar` trait: which days are holidays and which are working days.
//!
//! A day is **not** a working day iff it is a Sunday or a holiday of the
//! calendar's region. Saturdays are working days.

use crate::date::Date;
use crate::date_range::DateRange;
use crate::holiday::Holiday;
use std::collections::BTreeSet;
use urlaub_core::errors::Result;
use urlaub_core::{Days, Year};

/// A regional holiday calendar.
///
/// Implementations are pure: the same year always yields the same set, so
/// results may be recomputed or cached freely.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Deutschland"`).
    fn name(&self) -> &str;

    /// All holidays of `year`, sorted by date.
    ///
    /// Coinciding holidays (Ascension on May 1 in 2008) are listed once per
    /// rule, so the list may contain a date twice.
    fn holidays_for(&self, year: Year) -> Result<Vec<Holiday>>;

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: Date) -> bool;

    /// The distinct holiday dates of `year`.
    fn holiday_dates(&self, year: Year) -> Result<BTreeSet<Date>> {
        Ok(self.holidays_for(year)?.into_iter().map(|h| h.date).collect())
    }

    /// Return `true` for the weekly rest day (Sunday).
    fn is_rest_day(&self, date: Date) -> bool {
        date.weekday().is_rest_day()
    }

    /// Return `true` if `date` is neither a rest day nor a holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_rest_day(date) && !self.is_holiday(date)
    }

    /// Count working days in `[start, end]`, both ends inclusive.
    ///
    /// Returns 0 when `start > end`; an inverted range is form-input noise,
    /// not an error.
    fn count_working_days(&self, start: Date, end: Date) -> Days {
        match DateRange::new(start, end) {
            Ok(range) => self.count_working_days_in(&range),
            Err(_) => 0,
        }
    }

    /// Count working days in `range`.
    fn count_working_days_in(&self, range: &DateRange) -> Days {
        range.days().filter(|d| self.is_working_day(*d)).count() as Days
    }

    /// The working days of `range`, in order.
    fn working_days(&self, range: &DateRange) -> Vec<Date> {
        range.days().filter(|d| self.is_working_day(*d)).collect()
    }
}

/// A calendar without holidays: only Sundays are days off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SundaysOnly;

impl Calendar for SundaysOnly {
    fn name(&self) -> &str {
        "Sundays Only"
    }

    fn holidays_for(&self, _year: Year) -> Result<Vec<Holiday>> {
        Ok(Vec::new())
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn saturday_is_a_working_day() {
        let cal = SundaysOnly;
        // 2023-09-02 is a Saturday
        let sat = date(2023, 9, 2);
        assert_eq!(sat.weekday(), Weekday::Saturday);
        assert!(cal.is_working_day(sat));
        assert!(!cal.is_working_day(sat + 1));
    }

    #[test]
    fn inclusive_count() {
        let cal = SundaysOnly;
        // Monday 2023-09-04 .. Sunday 2023-09-10
        assert_eq!(cal.count_working_days(date(2023, 9, 4), date(2023, 9, 10)), 6);
        assert_eq!(cal.count_working_days(date(2023, 9, 4), date(2023, 9, 4)), 1);
    }

    #[test]
    fn inverted_range_counts_zero() {
        let cal = SundaysOnly;
        assert_eq!(cal.count_working_days(date(2023, 9, 8), date(2023, 9, 4)), 0);
    }

    #[test]
    fn working_days_lists_in_order() {
        let cal = SundaysOnly;
        let range = DateRange::new(date(2023, 9, 9), date(2023, 9, 11)).unwrap();
        assert_eq!(cal.working_days(&range), vec![date(2023, 9, 9), date(2023, 9, 11)]);
    }
}
