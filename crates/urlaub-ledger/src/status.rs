//! Per-employee coverage classification and organisation-wide totals.
//!
//! Per employee and year:
//!
//! 1. `planned` = working days in the year over the employee's planned
//!    requests (pending only, by default);
//! 2. `available = entitlement − taken − planned`, signed;
//! 3. `available <= 0` → [`CoverageStatus::Eingetragen`], else
//!    `planned > 0` → [`CoverageStatus::Teilweise`], else
//!    [`CoverageStatus::NichtEingetragen`].
//!
//! A negative `available` is reported separately as `over_budget`; callers
//! combine both signals. Nothing here is stored; every call recomputes.

use crate::budget::Budget;
use crate::ledger::{BudgetLedger, Severity};
use crate::planning::{planned_days, PlannedDaysPolicy};
use crate::request::VacationRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use urlaub_core::errors::Result;
use urlaub_core::{DayBalance, Days, EmployeeId, Percent, Year};
use urlaub_time::{Calendar, HolidayCache};

/// How completely an employee has planned the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// The whole entitlement is taken or planned.
    #[serde(rename = "eingetragen")]
    Eingetragen,
    /// Some days are planned, some are still open.
    #[serde(rename = "teilweise")]
    Teilweise,
    /// Nothing planned and days still open.
    #[serde(rename = "nicht-eingetragen")]
    NichtEingetragen,
}

impl CoverageStatus {
    /// Classify from the signed available balance and the planned days.
    pub fn classify(available: DayBalance, planned: Days) -> Self {
        if available <= 0 {
            CoverageStatus::Eingetragen
        } else if planned > 0 {
            CoverageStatus::Teilweise
        } else {
            CoverageStatus::NichtEingetragen
        }
    }

    /// Storage / display tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageStatus::Eingetragen => "eingetragen",
            CoverageStatus::Teilweise => "teilweise",
            CoverageStatus::NichtEingetragen => "nicht-eingetragen",
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory entry used for names and sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier.
    pub id: EmployeeId,
    /// Full name, surname last.
    pub full_name: String,
    /// Market (branch) the employee belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

impl Employee {
    /// An employee without a market.
    pub fn new(id: impl Into<EmployeeId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            market: None,
        }
    }
}

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCoverage {
    /// Employee.
    pub employee_id: EmployeeId,
    /// Display name; the id when the employee is not in the directory.
    pub full_name: String,
    /// Yearly entitlement.
    pub entitlement: Days,
    /// Days already taken.
    pub taken: Days,
    /// Days carried over.
    pub carry_over: Days,
    /// Planned working days in the year.
    pub planned_days: Days,
    /// Number of pending requests touching the year.
    pub pending_requests: usize,
    /// `entitlement − taken − planned`, signed.
    pub available: DayBalance,
    /// Remaining days including carry-over, floored at zero.
    pub remaining_days: Days,
    /// Rounded utilisation percentage.
    pub utilization: Percent,
    /// Utilisation band.
    pub severity: Severity,
    /// Three-way classification.
    pub status: CoverageStatus,
    /// More requested than entitled.
    pub over_budget: bool,
}

/// Sums over every employee with a budget for the year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationTotals {
    /// Employees with a budget.
    pub employees: usize,
    /// Sum of per-employee `available`, each floored at zero first.
    pub available_days: u64,
    /// Sum of planned days.
    pub planned_days: u64,
    /// Sum of pending requests.
    pub pending_requests: usize,
    /// Employees whose `available` is negative.
    pub over_budget: usize,
    /// Employees classified `eingetragen`.
    pub eingetragen: usize,
    /// Employees classified `teilweise`.
    pub teilweise: usize,
    /// Employees classified `nicht-eingetragen`.
    pub nicht_eingetragen: usize,
}

impl OrganizationTotals {
    fn add(&mut self, row: &EmployeeCoverage) {
        self.employees += 1;
        self.available_days += row.available.max(0) as u64;
        self.planned_days += u64::from(row.planned_days);
        self.pending_requests += row.pending_requests;
        if row.over_budget {
            self.over_budget += 1;
        }
        match row.status {
            CoverageStatus::Eingetragen => self.eingetragen += 1,
            CoverageStatus::Teilweise => self.teilweise += 1,
            CoverageStatus::NichtEingetragen => self.nicht_eingetragen += 1,
        }
    }
}

/// The full dashboard for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Reporting year.
    pub year: Year,
    /// Rows sorted by surname.
    pub rows: Vec<EmployeeCoverage>,
    /// Organisation-wide sums.
    pub totals: OrganizationTotals,
}

/// Sort key for a full name: the last whitespace-separated token, case- and
/// umlaut-folded the way German phone books order names (ä as a, ß as ss).
pub fn surname_key(full_name: &str) -> String {
    let surname = full_name.split_whitespace().last().unwrap_or("");
    let mut key = String::with_capacity(surname.len());
    for c in surname.chars().flat_map(char::to_lowercase) {
        match c {
            'ä' => key.push('a'),
            'ö' => key.push('o'),
            'ü' => key.push('u'),
            'ß' => key.push_str("ss"),
            'é' | 'è' | 'ê' => key.push('e'),
            other => key.push(other),
        }
    }
    key
}

/// Computes coverage rows and totals.
#[derive(Debug, Clone, Copy)]
pub struct StatusAggregator<'c> {
    calendar: &'c dyn Calendar,
    ledger: BudgetLedger,
    policy: PlannedDaysPolicy,
}

impl<'c> StatusAggregator<'c> {
    /// An aggregator counting with `calendar`.
    pub fn new(calendar: &'c dyn Calendar, ledger: BudgetLedger, policy: PlannedDaysPolicy) -> Self {
        Self {
            calendar,
            ledger,
            policy,
        }
    }

    /// Classify one employee for `year`. `None` when no budget exists for
    /// that employee and year; the caller provisions one first.
    pub fn classify(
        &self,
        employee_id: &EmployeeId,
        budgets: &[Budget],
        requests: &[VacationRequest],
        year: Year,
    ) -> Result<Option<CoverageStatus>> {
        let Some(budget) = budgets
            .iter()
            .find(|b| b.employee_id() == employee_id && b.year() == year)
        else {
            return Ok(None);
        };
        let mut cache = HolidayCache::new(self.calendar);
        let row = self.assess(&mut cache, budget, requests, None)?;
        Ok(Some(row.status))
    }

    /// Build the row for one budget.
    pub fn assess(
        &self,
        cache: &mut HolidayCache<'_>,
        budget: &Budget,
        requests: &[VacationRequest],
        full_name: Option<&str>,
    ) -> Result<EmployeeCoverage> {
        let employee = budget.employee_id();
        let year = budget.year();
        let planned = planned_days(cache, requests, employee, year, self.policy)?;
        let pending_requests = requests
            .iter()
            .filter(|r| r.employee_id() == employee && r.is_pending() && r.touches_year(year))
            .count();
        let available = DayBalance::from(budget.entitlement())
            - DayBalance::from(budget.taken())
            - DayBalance::from(planned);
        let snapshot = self.ledger.snapshot(budget, planned);

        Ok(EmployeeCoverage {
            employee_id: employee.clone(),
            full_name: full_name.map_or_else(|| employee.to_string(), str::to_string),
            entitlement: budget.entitlement(),
            taken: budget.taken(),
            carry_over: budget.carry_over(),
            planned_days: planned,
            pending_requests,
            available,
            remaining_days: snapshot.remaining_days,
            utilization: snapshot.utilization,
            severity: snapshot.severity,
            status: CoverageStatus::classify(available, planned),
            over_budget: available < 0,
        })
    }

    /// Rows for every budget of `year`, sorted by surname, plus totals.
    pub fn aggregate(
        &self,
        employees: &[Employee],
        budgets: &[Budget],
        requests: &[VacationRequest],
        year: Year,
    ) -> Result<CoverageReport> {
        let names: HashMap<&EmployeeId, &str> = employees
            .iter()
            .map(|e| (&e.id, e.full_name.as_str()))
            .collect();
        let mut cache = HolidayCache::new(self.calendar);
        let mut rows = Vec::new();
        for budget in budgets.iter().filter(|b| b.year() == year) {
            let name = names.get(budget.employee_id()).copied();
            rows.push(self.assess(&mut cache, budget, requests, name)?);
        }
        // sort_by_key is stable: equal surnames keep input order.
        rows.sort_by_key(|r| surname_key(&r.full_name));

        let mut totals = OrganizationTotals::default();
        for row in &rows {
            totals.add(row);
        }
        debug!(
            year,
            employees = totals.employees,
            over_budget = totals.over_budget,
            planned_days = totals.planned_days,
            "coverage aggregated"
        );
        Ok(CoverageReport { year, rows, totals })
    }
}
