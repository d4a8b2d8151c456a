//! Germany calendar: the fixed holiday set the planner ships with.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::easter_sunday_day_of_year;
use crate::holiday::{resolve_all, Holiday, HolidayRule};
use urlaub_core::errors::Result;
use urlaub_core::Year;

/// Germany calendar.
///
/// Sundays and the following holidays are observed:
/// * Neujahr (Jan 1)
/// * Karfreitag (Easter − 2)
/// * Ostermontag (Easter + 1)
/// * Tag der Arbeit (May 1)
/// * Christi Himmelfahrt (Easter + 39)
/// * Pfingstmontag (Easter + 50)
/// * Fronleichnam (Easter + 60)
/// * Tag der Deutschen Einheit (Oct 3)
/// * 1. Weihnachtstag (Dec 25)
/// * 2. Weihnachtstag (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl Germany {
    /// The holiday set as configuration data.
    pub fn rules() -> Vec<HolidayRule> {
        vec![
            HolidayRule::fixed(1, 1, "Neujahr"),
            HolidayRule::fixed(5, 1, "Tag der Arbeit"),
            HolidayRule::fixed(10, 3, "Tag der Deutschen Einheit"),
            HolidayRule::fixed(12, 25, "1. Weihnachtstag"),
            HolidayRule::fixed(12, 26, "2. Weihnachtstag"),
            HolidayRule::easter_offset(-2, "Karfreitag"),
            HolidayRule::easter_offset(1, "Ostermontag"),
            HolidayRule::easter_offset(39, "Christi Himmelfahrt"),
            HolidayRule::easter_offset(50, "Pfingstmontag"),
            HolidayRule::easter_offset(60, "Fronleichnam"),
        ]
    }
}

impl Calendar for Germany {
    fn name(&self) -> &str {
        "Deutschland"
    }

    fn holidays_for(&self, year: Year) -> Result<Vec<Holiday>> {
        resolve_all(&Self::rules(), year)
    }

    // Mirrors `Germany::rules()`; keep both in step, `fast_path_agrees_with_rules` checks it.
    fn is_holiday(&self, date: Date) -> bool {
        let m = date.month();
        let d = date.day_of_month();
        let dd = date.day_of_year() as i64;
        let es = easter_sunday_day_of_year(date.year()) as i64;

        // New Year's Day
        (d == 1 && m == 1)
            // Good Friday
            || dd == es - 2
            // Easter Monday
            || dd == es + 1
            // Labour Day
            || (d == 1 && m == 5)
            // Ascension
            || dd == es + 39
            // Whit Monday
            || dd == es + 50
            // Corpus Christi
            || dd == es + 60
            // German Unity Day
            || (d == 3 && m == 10)
            // Christmas
            || (d == 25 && m == 12)
            || (d == 26 && m == 12)
    }
}
