//! Validation of a new vacation request.
//!
//! The checks run in a fixed order and the first failure wins:
//!
//! 1. invalid range (`start > end`);
//! 2. blocked period, including periods of a neighbouring year that spill
//!    across the year boundary;
//! 3. overlap with a non-rejected request of the same employee;
//! 4. working-day count inside the budget's year;
//! 5. budget: a non-zero count must fit into the remaining balance.
//!
//! A failed check is a [`Rejection`] value, never an [`Error`]. `Error` is
//! returned only for inconsistent input, e.g. a budget of another employee.

use crate::blocked::{BlockedPeriod, BlockedPeriodRegistry};
use crate::budget::Budget;
use crate::ledger::BudgetLedger;
use crate::overlap::find_overlap_for_employee;
use crate::planning::{planned_days, PlannedDaysPolicy};
use crate::request::VacationRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;
use urlaub_core::errors::{Error, Result};
use urlaub_core::{DayBalance, Days, EmployeeId, RequestId};
use urlaub_time::{Calendar, Date, DateRange, HolidayCache};

/// The range an employee asks for, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Requesting employee.
    pub employee_id: EmployeeId,
    /// First day.
    pub start: Date,
    /// Last day, inclusive.
    pub end: Date,
}

impl Candidate {
    /// A candidate for `employee_id`.
    pub fn new(employee_id: impl Into<EmployeeId>, start: Date, end: Date) -> Self {
        Self {
            employee_id: employee_id.into(),
            start,
            end,
        }
    }
}

/// Why a candidate was turned down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Rejection {
    /// End before start.
    InvalidRange,
    /// Touches a closed period.
    Blocked {
        /// The first closed period hit.
        period: BlockedPeriod,
    },
    /// Overlaps an existing non-rejected request.
    Overlap {
        /// The conflicting request.
        conflicting: RequestId,
        /// Its range.
        range: DateRange,
    },
    /// More working days than remain in the budget.
    InsufficientBudget {
        /// Working days asked for.
        requested: Days,
        /// Balance before the candidate; negative when already over-committed.
        available: DayBalance,
    },
}

impl Rejection {
    /// Machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::InvalidRange => "invalid-range",
            Rejection::Blocked { .. } => "blocked",
            Rejection::Overlap { .. } => "overlap",
            Rejection::InsufficientBudget { .. } => "insufficient-budget",
        }
    }

    /// Human-readable reason in German.
    pub fn reason(&self) -> String {
        match self {
            Rejection::InvalidRange => "Das Enddatum liegt vor dem Startdatum".to_string(),
            Rejection::Blocked { period } => {
                format!("{} ({})", period.reason, period.range)
            }
            Rejection::Overlap { range, .. } => {
                format!("Überschneidung mit bestehendem Antrag vom {range}")
            }
            Rejection::InsufficientBudget {
                requested,
                available,
            } => format!(
                "Nicht genügend Urlaubstage: beantragt {requested}, verfügbar {}",
                (*available).max(0)
            ),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason())
    }
}

/// Outcome of [`SubmissionValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Verdict {
    /// All checks passed.
    #[serde(rename_all = "camelCase")]
    Accepted {
        /// Working days the request consumes in the budget's year.
        working_days: Days,
        /// Remaining days once the request is planned.
        remaining_after: Days,
    },
    /// A check failed.
    Rejected(Rejection),
}

impl Verdict {
    /// Whether the candidate passed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted { .. } => None,
            Verdict::Rejected(r) => Some(r),
        }
    }
}

/// Runs the submission checks against a calendar and a registry.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionValidator<'c> {
    calendar: &'c dyn Calendar,
    registry: &'c BlockedPeriodRegistry,
    ledger: BudgetLedger,
    policy: PlannedDaysPolicy,
}

impl<'c> SubmissionValidator<'c> {
    /// A validator over `calendar` and `registry`.
    pub fn new(
        calendar: &'c dyn Calendar,
        registry: &'c BlockedPeriodRegistry,
        ledger: BudgetLedger,
        policy: PlannedDaysPolicy,
    ) -> Self {
        Self {
            calendar,
            registry,
            ledger,
            policy,
        }
    }

    /// Check `candidate` against the employee's `existing` requests and the
    /// budget of the year being booked.
    ///
    /// `existing` must be freshly read; requests of other employees are
    /// ignored. The already-planned figure is computed from `existing`
    /// under the configured [`PlannedDaysPolicy`].
    pub fn validate(
        &self,
        candidate: &Candidate,
        existing: &[VacationRequest],
        budget: &Budget,
    ) -> Result<Verdict> {
        if budget.employee_id() != &candidate.employee_id {
            return Err(Error::InvalidArgument(format!(
                "budget of {} used for a request of {}",
                budget.employee_id(),
                candidate.employee_id
            )));
        }
        let verdict = self.run(candidate, existing, budget)?;
        debug!(
            employee = %candidate.employee_id,
            start = %candidate.start,
            end = %candidate.end,
            outcome = match &verdict {
                Verdict::Accepted { .. } => "accepted",
                Verdict::Rejected(r) => r.kind(),
            },
            "submission validated"
        );
        Ok(verdict)
    }

    fn run(&self, candidate: &Candidate, existing: &[VacationRequest], budget: &Budget) -> Result<Verdict> {
        let Ok(range) = DateRange::new(candidate.start, candidate.end) else {
            return Ok(Verdict::Rejected(Rejection::InvalidRange));
        };

        if let Some(period) = self.registry.find_blocking(range.start(), range.end())? {
            return Ok(Verdict::Rejected(Rejection::Blocked { period }));
        }

        if let Some(hit) =
            find_overlap_for_employee(&candidate.employee_id, range.start(), range.end(), existing)
        {
            return Ok(Verdict::Rejected(Rejection::Overlap {
                conflicting: hit.id().clone(),
                range: *hit.range(),
            }));
        }

        let mut cache = HolidayCache::new(self.calendar);
        let working_days = match range.clip_to_year(budget.year()) {
            Some(in_year) => cache.count_working_days_in(&in_year)?,
            None => 0,
        };
        let planned = planned_days(
            &mut cache,
            existing,
            &candidate.employee_id,
            budget.year(),
            self.policy,
        )?;
        let available = self.ledger.balance(budget, planned);
        // A range without working days books nothing, even on an overdrawn budget.
        if working_days > 0 && DayBalance::from(working_days) > available {
            return Ok(Verdict::Rejected(Rejection::InsufficientBudget {
                requested: working_days,
                available,
            }));
        }
        Ok(Verdict::Accepted {
            working_days,
            remaining_after: self.ledger.remaining_days(budget, planned + working_days),
        })
    }
}
