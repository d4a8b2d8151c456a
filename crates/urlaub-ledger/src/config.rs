//! Engine configuration.
//!
//! Everything an organisation may tune lives in one JSON document. Every
//! field has a default, so `{}` is a complete configuration that reproduces
//! the built-in German holiday set and the two fixed blocking rules.
//!
//! ```json
//! {
//!   "default_entitlement": 30,
//!   "entitlement_bounds": { "min": 20, "max": 40 },
//!   "severity_thresholds": { "warning": 70, "critical": 90 },
//!   "planned_days_policy": "pending-only",
//!   "blocked_periods": [
//!     { "kind": "holy-week", "reason": "Osterwoche" },
//!     { "kind": "iso-weeks", "start_week": 30, "end_week": 31, "year": 2025, "reason": "Inventur" }
//!   ]
//! }
//! ```

use crate::blocked::{BlockedPeriodRegistry, BlockedPeriodRule};
use crate::budget::EntitlementBounds;
use crate::ledger::{BudgetLedger, SeverityThresholds};
use crate::planning::PlannedDaysPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use urlaub_core::errors::{Error, Result};
use urlaub_core::Days;
use urlaub_time::{Calendar, Germany, HolidayRule, RuleCalendar};

/// Name given to a calendar built from configured holiday rules.
pub const CONFIGURED_CALENDAR_NAME: &str = "Konfiguriert";

fn default_entitlement() -> Days {
    30
}

fn default_blocked_periods() -> Vec<BlockedPeriodRule> {
    vec![BlockedPeriodRule::holy_week(), BlockedPeriodRule::december()]
}

/// Tunable policy of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Entitlement of a provisioned budget without a prior-year record.
    #[serde(default = "default_entitlement")]
    pub default_entitlement: Days,
    /// Allowed entitlement range.
    #[serde(default)]
    pub entitlement_bounds: EntitlementBounds,
    /// Utilisation bands.
    #[serde(default)]
    pub severity_thresholds: SeverityThresholds,
    /// Which requests count as planned.
    #[serde(default)]
    pub planned_days_policy: PlannedDaysPolicy,
    /// Blocking rules, checked in order.
    #[serde(default = "default_blocked_periods")]
    pub blocked_periods: Vec<BlockedPeriodRule>,
    /// Holiday rules; the built-in German set when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<HolidayRule>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_entitlement: default_entitlement(),
            entitlement_bounds: EntitlementBounds::default(),
            severity_thresholds: SeverityThresholds::default(),
            planned_days_policy: PlannedDaysPolicy::default(),
            blocked_periods: default_blocked_periods(),
            holidays: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        debug!(
            blocked_rules = config.blocked_periods.len(),
            custom_holidays = config.holidays.is_some(),
            policy = ?config.planned_days_policy,
            "engine configuration loaded"
        );
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        debug!(path = %path.display(), "reading engine configuration");
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<()> {
        if self.entitlement_bounds.min > self.entitlement_bounds.max {
            return Err(Error::Config(format!(
                "entitlement bounds [{}, {}] are empty",
                self.entitlement_bounds.min, self.entitlement_bounds.max
            )));
        }
        self.entitlement_bounds
            .check(self.default_entitlement)
            .map_err(|e| Error::Config(format!("default entitlement: {e}")))?;
        self.severity_thresholds.validate()?;
        for rule in &self.blocked_periods {
            rule.validate()?;
        }
        if let Some(rules) = &self.holidays {
            for rule in rules {
                rule.validate().map_err(|e| Error::Config(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// The holiday calendar described by this configuration.
    pub fn calendar(&self) -> Result<Box<dyn Calendar>> {
        let calendar: Box<dyn Calendar> = match &self.holidays {
            None => Box::new(Germany),
            Some(rules) => Box::new(RuleCalendar::new(CONFIGURED_CALENDAR_NAME, rules.clone())?),
        };
        Ok(calendar)
    }

    /// The blocked-period registry described by this configuration.
    pub fn registry(&self) -> Result<BlockedPeriodRegistry> {
        BlockedPeriodRegistry::new(self.blocked_periods.clone())
    }

    /// The budget ledger described by this configuration.
    pub fn ledger(&self) -> BudgetLedger {
        BudgetLedger::new(self.severity_thresholds)
    }
}
