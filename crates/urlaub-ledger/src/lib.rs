//! # urlaub-ledger
//!
//! The vacation-day accounting engine.
//!
//! Everything here is pure computation over values the caller has already
//! read from storage: blocked-period checks, overlap detection, budget
//! arithmetic, and the coverage classification behind the dashboard. The
//! only I/O is reading an [`EngineConfig`] file, and that is opt-in.
//!
//! Submission runs [`BlockedPeriodRegistry`] → [`find_overlap`] → working-day
//! count → [`BudgetLedger`], stopping at the first [`Rejection`]. The
//! dashboard runs the working-day count per request and then the
//! [`StatusAggregator`] over the whole population.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Administratively blocked periods.
pub mod blocked;

/// Per-employee yearly budget records.
pub mod budget;

/// Engine configuration loaded from JSON.
pub mod config;

/// Wiring of calendar, registry, and ledger into submission and dashboard flows.
pub mod engine;

/// Remaining-days and utilisation arithmetic.
pub mod ledger;

/// Overlap detection between requests.
pub mod overlap;

/// Which requests count as planned, and how many days they plan.
pub mod planning;

/// Storage interfaces and an in-memory implementation.
pub mod repository;

/// Vacation requests and their lifecycle.
pub mod request;

/// Capability scopes handed in by the authorisation layer.
pub mod scope;

/// Per-employee coverage classification and organisation totals.
pub mod status;

/// Validation of a new request.
pub mod submission;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use blocked::{BlockedPeriod, BlockedPeriodRegistry, BlockedPeriodRule};
pub use budget::{Budget, EntitlementBounds};
pub use config::EngineConfig;
pub use engine::Engine;
pub use ledger::{BudgetLedger, BudgetSnapshot, Severity, SeverityThresholds};
pub use overlap::{find_overlap, find_overlap_for_employee};
pub use planning::{planned_days, PlannedDaysPolicy};
pub use repository::{provision_budget, BudgetRepository, InMemoryStore, RequestRepository};
pub use request::{Decision, RequestStatus, VacationRequest};
pub use scope::Scope;
pub use status::{
    surname_key, CoverageReport, CoverageStatus, Employee, EmployeeCoverage, OrganizationTotals,
    StatusAggregator,
};
pub use submission::{Candidate, Rejection, SubmissionValidator, Verdict};
