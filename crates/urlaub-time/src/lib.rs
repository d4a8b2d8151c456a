//! # urlaub-time
//!
//! Date, holiday calendar, and working-day types.
//!
//! A day is a working day unless it is a Sunday or a holiday of the
//! configured region. Saturdays count: the engine models a six-day week.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait: holiday lookup and working-day counting.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DateRange`: an inclusive span of calendar days.
pub mod date_range;

/// Easter Sunday computation.
pub mod easter;

/// `Holiday` records and the `HolidayRule` data model.
pub mod holiday;

/// Caller-owned per-year holiday cache.
pub mod holiday_cache;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, SundaysOnly};
pub use calendars::germany::Germany;
pub use calendars::rule_calendar::RuleCalendar;
pub use date::Date;
pub use date_range::DateRange;
pub use easter::easter_sunday;
pub use holiday::{Holiday, HolidayRule};
pub use holiday_cache::HolidayCache;
pub use weekday::Weekday;
