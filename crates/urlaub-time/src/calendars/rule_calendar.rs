//! Rule calendar: a calendar whose holidays come from configuration.

use crate::calendar::Calendar;
use crate::calendars::germany::Germany;
use crate::date::Date;
use crate::holiday::{any_matches, resolve_all, Holiday, HolidayRule};
use urlaub_core::errors::Result;
use urlaub_core::Year;

/// A calendar built from a list of [`HolidayRule`]s.
#[derive(Debug, Clone)]
pub struct RuleCalendar {
    name: String,
    rules: Vec<HolidayRule>,
}

impl RuleCalendar {
    /// Create a calendar from `rules`, validating each one.
    pub fn new(name: impl Into<String>, rules: Vec<HolidayRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self {
            name: name.into(),
            rules,
        })
    }

    /// The built-in German set as a rule calendar.
    pub fn germany() -> Self {
        Self {
            name: Germany.name().to_string(),
            rules: Germany::rules(),
        }
    }

    /// Add a rule. Sundays are already days off.
    pub fn add_rule(&mut self, rule: HolidayRule) -> Result<()> {
        rule.validate()?;
        self.rules.push(rule);
        Ok(())
    }

    /// Remove every rule with the given name; returns how many were removed.
    pub fn remove_rule(&mut self, name: &str) -> usize {
        let before = self.rules.len();
        self.rules.retain(|r| r.name() != name);
        before - self.rules.len()
    }

    /// The configured rules.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}

impl Calendar for RuleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_for(&self, year: Year) -> Result<Vec<Holiday>> {
        resolve_all(&self.rules, year)
    }

    fn is_holiday(&self, date: Date) -> bool {
        any_matches(&self.rules, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_rule_calendar_is_sundays_only() {
        let cal = RuleCalendar::new("Leer", Vec::new()).unwrap();
        assert_eq!(cal.name(), "Leer");
        // Monday and Saturday work, Sunday does not
        assert!(cal.is_working_day(date(2024, 1, 8)));
        assert!(cal.is_working_day(date(2024, 1, 6)));
        assert!(!cal.is_working_day(date(2024, 1, 7)));
    }

    #[test]
    fn add_and_remove_rule() {
        let mut cal = RuleCalendar::new("Bayern", Vec::new()).unwrap();
        let three_kings = date(2025, 1, 6); // Monday
        assert!(cal.is_working_day(three_kings));

        cal.add_rule(HolidayRule::fixed(1, 6, "Heilige Drei Könige")).unwrap();
        assert!(!cal.is_working_day(three_kings));
        assert_eq!(cal.rules().len(), 1);

        assert_eq!(cal.remove_rule("Heilige Drei Könige"), 1);
        assert!(cal.is_working_day(three_kings));
    }

    #[test]
    fn invalid_rule_is_rejected() {
        assert!(RuleCalendar::new("x", vec![HolidayRule::fixed(4, 31, "x")]).is_err());
        let mut cal = RuleCalendar::germany();
        assert!(cal.add_rule(HolidayRule::easter_offset(-120, "x")).is_err());
    }

    #[test]
    fn germany_rules_match_builtin() {
        let rules = RuleCalendar::germany();
        for year in [2023, 2024, 2025] {
            assert_eq!(
                rules.holidays_for(year).unwrap(),
                Germany.holidays_for(year).unwrap()
            );
        }
        assert!(rules.is_holiday(date(2025, 6, 19)));
    }
}
