//! Per-employee yearly budget records.
//!
//! Storage keys follow the planner's German field names (`jahresanspruch`,
//! `genommen`, `uebertrag`). The planned figure is never stored; it is
//! recomputed from pending requests on every read.

use serde::{Deserialize, Serialize};
use urlaub_core::errors::{Error, Result};
use tracing::debug;
use urlaub_core::{DayBalance, Days, EmployeeId, Year};

/// Allowed range for a yearly entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementBounds {
    /// Smallest allowed entitlement.
    pub min: Days,
    /// Largest allowed entitlement.
    pub max: Days,
}

impl Default for EntitlementBounds {
    fn default() -> Self {
        Self { min: 20, max: 40 }
    }
}

impl EntitlementBounds {
    /// Fail unless `entitlement` lies in `[min, max]`.
    pub fn check(&self, entitlement: Days) -> Result<()> {
        if !(self.min..=self.max).contains(&entitlement) {
            return Err(Error::InvalidArgument(format!(
                "entitlement {entitlement} outside [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// One employee's vacation budget for one year.
///
/// Deserialized records are taken from storage as they are: the entitlement
/// bounds are enforced when a budget is created or its entitlement is
/// changed, not when it is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    employee_id: EmployeeId,
    year: Year,
    #[serde(rename = "jahresanspruch")]
    entitlement: Days,
    #[serde(rename = "genommen", default)]
    taken: Days,
    #[serde(rename = "uebertrag", default)]
    carry_over: Days,
}

impl Budget {
    /// A fresh budget with nothing taken and nothing carried over.
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        year: Year,
        entitlement: Days,
        bounds: &EntitlementBounds,
    ) -> Result<Self> {
        bounds.check(entitlement)?;
        Ok(Self {
            employee_id: employee_id.into(),
            year,
            entitlement,
            taken: 0,
            carry_over: 0,
        })
    }

    /// Lazily create the budget for `year`, seeded from the prior year's
    /// entitlement when there is one and from `default_entitlement` otherwise.
    ///
    /// A prior entitlement outside `bounds` is not carried forward; the new
    /// year starts from `default_entitlement` instead.
    pub fn provision(
        employee_id: impl Into<EmployeeId>,
        year: Year,
        prior: Option<&Budget>,
        default_entitlement: Days,
        bounds: &EntitlementBounds,
    ) -> Result<Self> {
        let entitlement = match prior {
            Some(p) if bounds.check(p.entitlement).is_ok() => p.entitlement,
            Some(p) => {
                debug!(
                    employee = %p.employee_id,
                    year = p.year,
                    entitlement = p.entitlement,
                    "prior entitlement out of bounds, using default"
                );
                default_entitlement
            }
            None => default_entitlement,
        };
        Self::new(employee_id, year, entitlement, bounds)
    }

    /// Set the days already taken.
    pub fn with_taken(mut self, taken: Days) -> Self {
        self.taken = taken;
        self
    }

    /// Set the days carried over from the prior year.
    pub fn with_carry_over(mut self, carry_over: Days) -> Self {
        self.carry_over = carry_over;
        self
    }

    /// Change the entitlement, re-checking `bounds`.
    pub fn set_entitlement(&mut self, entitlement: Days, bounds: &EntitlementBounds) -> Result<()> {
        bounds.check(entitlement)?;
        self.entitlement = entitlement;
        Ok(())
    }

    /// Owning employee.
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Budget year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Yearly entitlement (`jahresanspruch`).
    pub fn entitlement(&self) -> Days {
        self.entitlement
    }

    /// Days already taken (`genommen`).
    pub fn taken(&self) -> Days {
        self.taken
    }

    /// Days carried over from the prior year (`uebertrag`).
    pub fn carry_over(&self) -> Days {
        self.carry_over
    }

    /// Entitlement plus carry-over.
    pub fn capacity(&self) -> DayBalance {
        DayBalance::from(self.entitlement) + DayBalance::from(self.carry_over)
    }
}
