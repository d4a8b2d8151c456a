//! Remaining-days and utilisation arithmetic.
//!
//! The ledger never scans requests: the planned figure is always handed in
//! by the caller (see [`crate::planning`]). A negative balance is a valid
//! state meaning over-commitment; only [`BudgetLedger::remaining_days`], the
//! figure shown to employees, is floored at zero.

use crate::budget::Budget;
use serde::{Deserialize, Serialize};
use urlaub_core::errors::{Error, Result};
use urlaub_core::{DayBalance, Days, Percent};

/// Utilisation bands for dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Below the warning threshold.
    Healthy,
    /// At or above the warning threshold.
    Warning,
    /// At or above the critical threshold.
    Critical,
}

/// Percent thresholds for [`Severity`] banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Warning from this utilisation on.
    pub warning: Percent,
    /// Critical from this utilisation on.
    pub critical: Percent,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            warning: 70,
            critical: 90,
        }
    }
}

impl SeverityThresholds {
    /// Fail unless `warning <= critical`.
    pub fn validate(&self) -> Result<()> {
        if self.warning > self.critical {
            return Err(Error::Config(format!(
                "warning threshold {}% exceeds critical threshold {}%",
                self.warning, self.critical
            )));
        }
        Ok(())
    }

    /// Band a utilisation percentage.
    pub fn classify(&self, utilization: Percent) -> Severity {
        if utilization >= self.critical {
            Severity::Critical
        } else if utilization >= self.warning {
            Severity::Warning
        } else {
            Severity::Healthy
        }
    }
}

/// Every ledger figure for one budget and one planned count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    /// Planned days handed in.
    pub planned_days: Days,
    /// Signed balance: capacity − taken − planned.
    pub balance: DayBalance,
    /// Balance floored at zero.
    pub remaining_days: Days,
    /// Rounded utilisation percentage.
    pub utilization: Percent,
    /// Utilisation band.
    pub severity: Severity,
}

impl BudgetSnapshot {
    /// Whether more days are committed than the budget holds.
    pub fn is_over_committed(&self) -> bool {
        self.balance < 0
    }
}

/// Budget arithmetic with configurable severity bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetLedger {
    thresholds: SeverityThresholds,
}

impl BudgetLedger {
    /// A ledger banding with `thresholds`.
    pub fn new(thresholds: SeverityThresholds) -> Self {
        Self { thresholds }
    }

    /// The banding thresholds.
    pub fn thresholds(&self) -> SeverityThresholds {
        self.thresholds
    }

    /// `entitlement + carry_over − taken − planned`, signed.
    pub fn balance(&self, budget: &Budget, planned: Days) -> DayBalance {
        budget.capacity() - DayBalance::from(budget.taken()) - DayBalance::from(planned)
    }

    /// `max(0, balance)`.
    pub fn remaining_days(&self, budget: &Budget, planned: Days) -> Days {
        Days::try_from(self.balance(budget, planned).max(0)).unwrap_or(Days::MAX)
    }

    /// `round(100 * (taken + planned) / (entitlement + carry_over))`.
    ///
    /// With zero capacity the result is 0 when nothing is used and 100
    /// otherwise.
    pub fn utilization_percent(&self, budget: &Budget, planned: Days) -> Percent {
        let used = u64::from(budget.taken()) + u64::from(planned);
        let capacity = budget.capacity().unsigned_abs();
        if capacity == 0 {
            return if used == 0 { 0 } else { 100 };
        }
        // Half-up rounding in integers.
        let rounded = (200 * used + capacity) / (2 * capacity);
        Percent::try_from(rounded).unwrap_or(Percent::MAX)
    }

    /// Severity band of the utilisation.
    pub fn severity(&self, budget: &Budget, planned: Days) -> Severity {
        self.thresholds
            .classify(self.utilization_percent(budget, planned))
    }

    /// All figures at once.
    pub fn snapshot(&self, budget: &Budget, planned: Days) -> BudgetSnapshot {
        let utilization = self.utilization_percent(budget, planned);
        BudgetSnapshot {
            planned_days: planned,
            balance: self.balance(budget, planned),
            remaining_days: self.remaining_days(budget, planned),
            utilization,
            severity: self.thresholds.classify(utilization),
        }
    }
}
