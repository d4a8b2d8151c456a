//! Holiday records and the rule data model they are derived from.
//!
//! A holiday set is configuration: a list of [`HolidayRule`]s evaluated per
//! year. Fixed rules name a month and day; moveable rules name an offset in
//! days from Easter Sunday.

use crate::date::{days_in_month, Date};
use crate::easter::{easter_sunday, easter_sunday_day_of_year};
use serde::{Deserialize, Serialize};
use urlaub_core::errors::{Error, Result};
use urlaub_core::Year;

/// Smallest Easter offset a rule may use; keeps every feast in Easter's year.
pub const MIN_EASTER_OFFSET: i32 = -80;

/// Largest Easter offset a rule may use.
pub const MAX_EASTER_OFFSET: i32 = 100;

/// A resolved holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar day.
    pub date: Date,
    /// Display name, e.g. `"Karfreitag"`.
    pub name: String,
}

/// One entry of a configured holiday set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
        /// Display name.
        name: String,
    },
    /// A fixed number of days before (negative) or after Easter Sunday.
    EasterOffset {
        /// Offset in days from Easter Sunday.
        days: i32,
        /// Display name.
        name: String,
    },
}

impl HolidayRule {
    /// Convenience constructor for [`HolidayRule::Fixed`].
    pub fn fixed(month: u32, day: u32, name: impl Into<String>) -> Self {
        HolidayRule::Fixed {
            month,
            day,
            name: name.into(),
        }
    }

    /// Convenience constructor for [`HolidayRule::EasterOffset`].
    pub fn easter_offset(days: i32, name: impl Into<String>) -> Self {
        HolidayRule::EasterOffset {
            days,
            name: name.into(),
        }
    }

    /// Display name of the holiday.
    pub fn name(&self) -> &str {
        match self {
            HolidayRule::Fixed { name, .. } | HolidayRule::EasterOffset { name, .. } => name,
        }
    }

    /// Check that the rule can be evaluated in some year.
    pub fn validate(&self) -> Result<()> {
        match *self {
            HolidayRule::Fixed { month, day, .. } => {
                // 2000 is a leap year, so Feb 29 passes.
                if !(1..=12).contains(&month) || day == 0 || day > days_in_month(2000, month) {
                    return Err(Error::Config(format!(
                        "holiday {:?}: no day {day} in month {month}",
                        self.name()
                    )));
                }
            }
            HolidayRule::EasterOffset { days, .. } => {
                if !(MIN_EASTER_OFFSET..=MAX_EASTER_OFFSET).contains(&days) {
                    return Err(Error::Config(format!(
                        "holiday {:?}: Easter offset {days} outside [{MIN_EASTER_OFFSET}, {MAX_EASTER_OFFSET}]",
                        self.name()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve the rule for `year`.
    ///
    /// Returns `Ok(None)` for a Feb 29 rule in a common year.
    pub fn resolve(&self, year: Year) -> Result<Option<Holiday>> {
        let date = match *self {
            HolidayRule::Fixed { month, day, .. } => {
                if day > days_in_month(year, month) {
                    return Ok(None);
                }
                Date::from_ymd(year, month, day)?
            }
            HolidayRule::EasterOffset { days, .. } => easter_sunday(year)?.add_days(days)?,
        };
        Ok(Some(Holiday {
            date,
            name: self.name().to_string(),
        }))
    }

    /// Whether `date` is this holiday. `easter_doy` is the day of the year
    /// of Easter Sunday in `date`'s year, computed once by the caller.
    pub fn matches(&self, date: Date, easter_doy: u32) -> bool {
        match *self {
            HolidayRule::Fixed { month, day, .. } => {
                date.month() == month && date.day_of_month() == day
            }
            HolidayRule::EasterOffset { days, .. } => {
                date.day_of_year() as i64 == easter_doy as i64 + days as i64
            }
        }
    }

    /// Whether the rule needs the Easter date to be evaluated.
    pub fn is_moveable(&self) -> bool {
        matches!(self, HolidayRule::EasterOffset { .. })
    }
}

/// Resolve a whole rule set for `year`, sorted by date (stable for
/// coinciding holidays).
pub fn resolve_all(rules: &[HolidayRule], year: Year) -> Result<Vec<Holiday>> {
    let mut out = Vec::with_capacity(rules.len());
    for rule in rules {
        if let Some(h) = rule.resolve(year)? {
            out.push(h);
        }
    }
    out.sort_by_key(|h| h.date);
    Ok(out)
}

/// Whether any rule in `rules` falls on `date`.
pub fn any_matches(rules: &[HolidayRule], date: Date) -> bool {
    let easter_doy = if rules.iter().any(HolidayRule::is_moveable) {
        easter_sunday_day_of_year(date.year())
    } else {
        0
    };
    rules.iter().any(|r| r.matches(date, easter_doy))
}
