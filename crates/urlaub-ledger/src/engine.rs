//! The engine: one configuration wired into the submission and dashboard
//! flows.
//!
//! [`Engine`] owns the calendar and the blocked-period registry built from
//! an [`EngineConfig`] and hands out borrowing validators and aggregators.
//! The `submit`, `decide`, and `dashboard` helpers add the read-check-write
//! sequence around them for callers that use the repository traits.

use crate::blocked::BlockedPeriodRegistry;
use crate::budget::Budget;
use crate::config::EngineConfig;
use crate::ledger::{BudgetLedger, BudgetSnapshot};
use crate::planning::planned_days;
use crate::repository::{provision_budget, BudgetRepository, RequestRepository};
use crate::request::{RequestStatus, VacationRequest};
use crate::scope::Scope;
use crate::status::{CoverageReport, Employee, StatusAggregator};
use crate::submission::{Candidate, SubmissionValidator, Verdict};
use chrono::{DateTime, Utc};
use tracing::debug;
use urlaub_core::errors::{Error, Result};
use urlaub_core::{ensure, EmployeeId, RequestId, Year};
use urlaub_time::{Calendar, Germany, HolidayCache};

/// Calendar, registry, and ledger built from one configuration.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    calendar: Box<dyn Calendar>,
    registry: BlockedPeriodRegistry,
    ledger: BudgetLedger,
}

impl Default for Engine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            ledger: config.ledger(),
            config,
            calendar: Box::new(Germany),
            registry: BlockedPeriodRegistry::default(),
        }
    }
}

impl Engine {
    /// Validate `config` and build the engine from it.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            calendar: config.calendar()?,
            registry: config.registry()?,
            ledger: config.ledger(),
            config,
        })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The holiday calendar.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// The blocked-period registry.
    pub fn registry(&self) -> &BlockedPeriodRegistry {
        &self.registry
    }

    /// The budget ledger.
    pub fn ledger(&self) -> BudgetLedger {
        self.ledger
    }

    /// A submission validator borrowing this engine.
    pub fn validator(&self) -> SubmissionValidator<'_> {
        SubmissionValidator::new(
            self.calendar(),
            &self.registry,
            self.ledger,
            self.config.planned_days_policy,
        )
    }

    /// A status aggregator borrowing this engine.
    pub fn aggregator(&self) -> StatusAggregator<'_> {
        StatusAggregator::new(self.calendar(), self.ledger, self.config.planned_days_policy)
    }

    /// The budget of `employee` for `year`, provisioned when missing.
    pub fn budget<S>(&self, store: &mut S, employee: &EmployeeId, year: Year) -> Result<Budget>
    where
        S: BudgetRepository + ?Sized,
    {
        provision_budget(store, employee, year, &self.config)
    }

    /// Ledger figures of `employee` for `year` from freshly read data.
    pub fn snapshot<S>(&self, store: &mut S, employee: &EmployeeId, year: Year) -> Result<BudgetSnapshot>
    where
        S: RequestRepository + BudgetRepository + ?Sized,
    {
        let budget = self.budget(store, employee, year)?;
        let requests = store.list_for_employee(employee, year)?;
        let mut cache = HolidayCache::new(self.calendar());
        let planned = planned_days(
            &mut cache,
            &requests,
            employee,
            year,
            self.config.planned_days_policy,
        )?;
        Ok(self.ledger.snapshot(&budget, planned))
    }

    /// Validate `candidate` against freshly read requests and the budget of
    /// its start year; store it as a pending request when accepted.
    pub fn submit<S>(
        &self,
        store: &mut S,
        id: impl Into<RequestId>,
        candidate: &Candidate,
        note: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<Verdict>
    where
        S: RequestRepository + BudgetRepository + ?Sized,
    {
        let employee = &candidate.employee_id;
        let budget = self.budget(store, employee, candidate.start.year())?;

        let mut existing: Vec<VacationRequest> = Vec::new();
        for year in candidate.start.year()..=candidate.end.year() {
            for request in store.list_for_employee(employee, year)? {
                if !existing.iter().any(|r| r.id() == request.id()) {
                    existing.push(request);
                }
            }
        }

        let verdict = self.validator().validate(candidate, &existing, &budget)?;
        if verdict.is_accepted() {
            let mut request =
                VacationRequest::new(id, employee.clone(), candidate.start, candidate.end, at)?;
            if let Some(note) = note {
                request = request.with_note(note);
            }
            debug!(request = %request.id(), employee = %employee, "request stored");
            store.insert(request)?;
        }
        Ok(verdict)
    }

    /// Move request `id` to `to` on behalf of `scope`.
    ///
    /// `owner_market` is the market of the request's owner, looked up by the
    /// caller. Approval does not change the budget's `taken` figure.
    pub fn decide<S>(
        &self,
        store: &mut S,
        id: &RequestId,
        scope: &Scope,
        owner_market: Option<&str>,
        to: RequestStatus,
        at: DateTime<Utc>,
    ) -> Result<VacationRequest>
    where
        S: RequestRepository + ?Sized,
    {
        let mut request = store
            .find(id)?
            .ok_or_else(|| Error::NotFound(format!("request {id}")))?;
        ensure!(
            scope.can_decide(request.employee_id(), owner_market),
            "{} may not decide request {id}",
            scope.actor()
        );
        match to {
            RequestStatus::Approved => request.approve(scope.actor().clone(), at)?,
            RequestStatus::Rejected => request.reject(scope.actor().clone(), at)?,
            RequestStatus::Pending => request.reopen()?,
        }
        debug!(request = %id, status = %to, actor = %scope.actor(), "request decided");
        store.update(request.clone())?;
        Ok(request)
    }

    /// The coverage dashboard for `year`.
    ///
    /// Every directory entry gets a budget first, so nobody drops out of the
    /// totals just because their budget was never opened.
    pub fn dashboard<S>(&self, store: &mut S, employees: &[Employee], year: Year) -> Result<CoverageReport>
    where
        S: RequestRepository + BudgetRepository + ?Sized,
    {
        for employee in employees {
            self.budget(store, &employee.id, year)?;
        }
        let budgets = store.list(year)?;
        let requests = store.list_all(year)?;
        self.aggregator().aggregate(employees, &budgets, &requests, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use crate::status::CoverageStatus;
    use crate::submission::Rejection;
    use chrono::TimeZone;
    use urlaub_time::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    #[test]
    fn submit_provisions_and_stores() {
        let engine = Engine::default();
        let mut store = InMemoryStore::new();
        let c = Candidate::new("e", date(2024, 6, 10), date(2024, 6, 14));
        let v = engine.submit(&mut store, "r1", &c, Some("Sommer"), at()).unwrap();
        assert!(v.is_accepted());
        assert_eq!(store.request_count(), 1);
        assert_eq!(
            store.get(&EmployeeId::from("e"), 2024).unwrap().unwrap().entitlement(),
            30
        );

        // same range again overlaps the stored request
        let v = engine.submit(&mut store, "r2", &c, None, at()).unwrap();
        assert!(matches!(v.rejection(), Some(Rejection::Overlap { .. })));
        assert_eq!(store.request_count(), 1);
    }

    #[test]
    fn submit_reads_requests_of_both_years() {
        let engine = Engine::default();
        let mut store = InMemoryStore::new();
        let first = Candidate::new("e", date(2025, 1, 2), date(2025, 1, 4));
        assert!(engine.submit(&mut store, "a", &first, None, at()).unwrap().is_accepted());
        // December is closed by default; drop the rules to reach the boundary
        let config = EngineConfig {
            blocked_periods: Vec::new(),
            ..EngineConfig::default()
        };
        let open = Engine::from_config(config).unwrap();
        let crossing = Candidate::new("e", date(2024, 12, 30), date(2025, 1, 3));
        let v = open.submit(&mut store, "b", &crossing, None, at()).unwrap();
        assert!(matches!(v.rejection(), Some(Rejection::Overlap { .. })));
    }

    #[test]
    fn decide_respects_scope_and_transitions() {
        let engine = Engine::default();
        let mut store = InMemoryStore::new();
        let c = Candidate::new("e", date(2024, 6, 10), date(2024, 6, 14));
        engine.submit(&mut store, "r1", &c, None, at()).unwrap();
        let id = RequestId::from("r1");

        let own = Scope::Own {
            actor: EmployeeId::from("e"),
        };
        assert!(matches!(
            engine.decide(&mut store, &id, &own, Some("Berlin"), RequestStatus::Approved, at()),
            Err(Error::Precondition(_))
        ));

        let manager = Scope::ManagerOfMarket {
            actor: EmployeeId::from("m"),
            market: "Berlin".into(),
        };
        let approved = engine
            .decide(&mut store, &id, &manager, Some("Berlin"), RequestStatus::Approved, at())
            .unwrap();
        assert_eq!(approved.status(), RequestStatus::Approved);
        assert_eq!(approved.decision().unwrap().decided_by.as_str(), "m");

        // approved -> approved is not a transition
        assert!(matches!(
            engine.decide(&mut store, &id, &manager, Some("Berlin"), RequestStatus::Approved, at()),
            Err(Error::InvalidTransition { .. })
        ));
        // approval leaves the taken figure alone
        assert_eq!(store.get(&EmployeeId::from("e"), 2024).unwrap().unwrap().taken(), 0);
    }

    #[test]
    fn snapshot_follows_policy() {
        let engine = Engine::default();
        let mut store = InMemoryStore::new();
        let c = Candidate::new("e", date(2024, 6, 10), date(2024, 6, 14));
        engine.submit(&mut store, "r1", &c, None, at()).unwrap();
        let e = EmployeeId::from("e");
        assert_eq!(engine.snapshot(&mut store, &e, 2024).unwrap().remaining_days, 25);

        let admin = Scope::Admin {
            actor: EmployeeId::from("boss"),
        };
        engine
            .decide(&mut store, &RequestId::from("r1"), &admin, None, RequestStatus::Approved, at())
            .unwrap();
        // pending-only: the approved request no longer counts as planned
        assert_eq!(engine.snapshot(&mut store, &e, 2024).unwrap().remaining_days, 30);
    }

    #[test]
    fn dashboard_provisions_everyone() {
        let engine = Engine::default();
        let mut store = InMemoryStore::new();
        let employees = vec![Employee::new("1", "Berta Brandt"), Employee::new("2", "Anton Adler")];
        let c = Candidate::new("1", date(2024, 6, 10), date(2024, 6, 14));
        engine.submit(&mut store, "r1", &c, None, at()).unwrap();

        let report = engine.dashboard(&mut store, &employees, 2024).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].full_name, "Anton Adler");
        assert_eq!(report.rows[0].status, CoverageStatus::NichtEingetragen);
        assert_eq!(report.rows[1].status, CoverageStatus::Teilweise);
        assert_eq!(report.totals.available_days, 30 + 25);
    }

    #[test]
    fn dashboard_survives_out_of_bounds_prior_budget() {
        let engine = Engine::default();
        let mut store = InMemoryStore::new();
        let stored: Budget =
            serde_json::from_str(r#"{"employeeId": "1", "year": 2024, "jahresanspruch": 45}"#).unwrap();
        store.put(stored).unwrap();
        let employees = vec![Employee::new("1", "Berta Brandt")];

        let report = engine.dashboard(&mut store, &employees, 2025).unwrap();
        assert_eq!(report.totals.available_days, 30);
        assert_eq!(
            store.get(&EmployeeId::from("1"), 2025).unwrap().unwrap().entitlement(),
            30
        );
    }

}
