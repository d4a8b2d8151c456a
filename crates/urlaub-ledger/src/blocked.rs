//! Administratively blocked periods.
//!
//! Periods are derived per year from a list of [`BlockedPeriodRule`]s. The
//! default list holds two rules: the Holy Week lock (Monday before Good
//! Friday through Easter Sunday) and the December lock. Organisations
//! replace or extend the list through [`crate::EngineConfig`].

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use urlaub_core::errors::{Error, Result};
use urlaub_core::Year;
use urlaub_time::{easter_sunday, Date, DateRange, Weekday};

/// Reason attached to the default Holy Week rule.
pub const HOLY_WEEK_REASON: &str = "Urlaubssperre in der Osterwoche (Montag vor Karfreitag bis Ostersonntag)";

/// Reason attached to the default December rule.
pub const DECEMBER_REASON: &str = "Urlaubssperre im Dezember";

/// A closed date range and why it is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedPeriod {
    /// The closed days, inclusive.
    #[serde(flatten)]
    pub range: DateRange,
    /// Human-readable reason.
    pub reason: String,
}

impl BlockedPeriod {
    /// First closed day.
    pub fn start(&self) -> Date {
        self.range.start()
    }

    /// Last closed day.
    pub fn end(&self) -> Date {
        self.range.end()
    }

    /// Inclusive overlap with the raw candidate `[start, end]`.
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        start <= self.end() && end >= self.start()
    }
}

/// One rule producing at most one blocked period per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BlockedPeriodRule {
    /// Monday of Holy Week (Good Friday − 4) through Easter Sunday.
    HolyWeek {
        /// Reason shown to the employee.
        reason: String,
    },
    /// A whole calendar month.
    Month {
        /// Month (1–12).
        month: u32,
        /// Reason shown to the employee.
        reason: String,
    },
    /// Monday of ISO week `start_week` through Sunday of `end_week`.
    IsoWeeks {
        /// First ISO week (1–53).
        start_week: u32,
        /// Last ISO week (1–53); clamped to the year's last week.
        end_week: u32,
        /// Restrict the rule to one ISO week-year; every year when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<Year>,
        /// Reason shown to the employee.
        reason: String,
    },
    /// A literal range, applied to every year it touches.
    Fixed {
        /// First closed day.
        start: Date,
        /// Last closed day.
        end: Date,
        /// Reason shown to the employee.
        reason: String,
    },
}

impl BlockedPeriodRule {
    /// The default Holy Week rule.
    pub fn holy_week() -> Self {
        BlockedPeriodRule::HolyWeek {
            reason: HOLY_WEEK_REASON.to_string(),
        }
    }

    /// The default December rule.
    pub fn december() -> Self {
        BlockedPeriodRule::Month {
            month: 12,
            reason: DECEMBER_REASON.to_string(),
        }
    }

    /// Reason string of the rule.
    pub fn reason(&self) -> &str {
        match self {
            BlockedPeriodRule::HolyWeek { reason }
            | BlockedPeriodRule::Month { reason, .. }
            | BlockedPeriodRule::IsoWeeks { reason, .. }
            | BlockedPeriodRule::Fixed { reason, .. } => reason,
        }
    }

    /// Check the rule's own fields.
    pub fn validate(&self) -> Result<()> {
        match *self {
            BlockedPeriodRule::HolyWeek { .. } => Ok(()),
            BlockedPeriodRule::Month { month, .. } => {
                if !(1..=12).contains(&month) {
                    return Err(Error::Config(format!(
                        "blocked month {month} out of range [1, 12]"
                    )));
                }
                Ok(())
            }
            BlockedPeriodRule::IsoWeeks {
                start_week,
                end_week,
                ..
            } => {
                if !(1..=53).contains(&start_week)
                    || !(1..=53).contains(&end_week)
                    || start_week > end_week
                {
                    return Err(Error::Config(format!(
                        "blocked ISO weeks {start_week}..{end_week} invalid"
                    )));
                }
                Ok(())
            }
            BlockedPeriodRule::Fixed { start, end, .. } => {
                DateRange::new(start, end).map_err(|e| Error::Config(e.to_string()))?;
                Ok(())
            }
        }
    }

    /// The period this rule closes in `year`, if any.
    pub fn period_for(&self, year: Year) -> Result<Option<BlockedPeriod>> {
        let range = match *self {
            BlockedPeriodRule::HolyWeek { .. } => {
                let easter = easter_sunday(year)?;
                Some(DateRange::new(easter.add_days(-6)?, easter)?)
            }
            BlockedPeriodRule::Month { month, .. } => {
                let first = Date::from_ymd(year, month, 1)?;
                let last = Date::from_ymd(year, month, urlaub_time::date::days_in_month(year, month))?;
                Some(DateRange::new(first, last)?)
            }
            BlockedPeriodRule::IsoWeeks {
                start_week,
                end_week,
                year: only,
                ..
            } => {
                if only.is_some_and(|y| y != year) {
                    None
                } else {
                    iso_week_range(year, start_week, end_week)?
                }
            }
            BlockedPeriodRule::Fixed { start, end, .. } => {
                let range = DateRange::new(start, end)?;
                range.clip_to_year(year).map(|_| range)
            }
        };
        Ok(range.map(|range| BlockedPeriod {
            range,
            reason: self.reason().to_string(),
        }))
    }
}

/// Monday of `start_week` through Sunday of `end_week` in ISO week-year
/// `year`; `None` when `start_week` does not exist that year.
fn iso_week_range(year: Year, start_week: u32, end_week: u32) -> Result<Option<DateRange>> {
    // Dec 28 always lies in the last ISO week of its year.
    let last_week = Date::from_ymd(year, 12, 28)?
        .as_naive()
        .iso_week()
        .week();
    if start_week > last_week {
        return Ok(None);
    }
    let start = Date::from_iso_week(year, start_week, Weekday::Monday)?;
    let end = Date::from_iso_week(year, end_week.min(last_week), Weekday::Sunday)?;
    Ok(Some(DateRange::new(start, end)?))
}

/// The set of blocking rules, evaluated per year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedPeriodRegistry {
    rules: Vec<BlockedPeriodRule>,
}

impl Default for BlockedPeriodRegistry {
    fn default() -> Self {
        Self {
            rules: vec![BlockedPeriodRule::holy_week(), BlockedPeriodRule::december()],
        }
    }
}

impl BlockedPeriodRegistry {
    /// A registry over `rules`, checked in the given order.
    pub fn new(rules: Vec<BlockedPeriodRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    /// The configured rules.
    pub fn rules(&self) -> &[BlockedPeriodRule] {
        &self.rules
    }

    /// All periods closed in `year`, in rule order.
    pub fn blocked_periods_for(&self, year: Year) -> Result<Vec<BlockedPeriod>> {
        let mut periods = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if let Some(p) = rule.period_for(year)? {
                periods.push(p);
            }
        }
        Ok(periods)
    }

    /// The first period of `year` that `[start, end]` overlaps, if any.
    pub fn is_blocked(&self, start: Date, end: Date, year: Year) -> Result<Option<BlockedPeriod>> {
        Ok(self
            .blocked_periods_for(year)?
            .into_iter()
            .find(|p| p.overlaps(start, end)))
    }

    /// The first period overlapping `[start, end]`, whichever year it is
    /// derived for.
    ///
    /// ISO-week periods of one year can begin in December of the year
    /// before or end in January of the year after, so the neighbouring
    /// years are consulted too, earliest year first.
    pub fn find_blocking(&self, start: Date, end: Date) -> Result<Option<BlockedPeriod>> {
        let first = (start.year() - 1).max(Date::MIN_YEAR);
        let last = (end.year() + 1).min(Date::MAX_YEAR);
        for year in first..=last {
            if let Some(period) = self.is_blocked(start, end, year)? {
                return Ok(Some(period));
            }
        }
        Ok(None)
    }
}
