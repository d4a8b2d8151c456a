//! Integration tests for coverage classification and the submission flow,
//! fed from storage-shaped JSON.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use urlaub_core::EmployeeId;
use urlaub_ledger::{
    BlockedPeriodRegistry, Budget, BudgetLedger, Candidate, CoverageStatus, Employee,
    EntitlementBounds, PlannedDaysPolicy, Rejection, StatusAggregator, SubmissionValidator,
    VacationRequest, Verdict,
};
use urlaub_time::{Date, Germany};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn pending(id: &str, emp: &str, s: Date, e: Date) -> VacationRequest {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    VacationRequest::new(id, emp, s, e, at).unwrap()
}

const STORAGE: &str = r#"{
    "employees": [
        { "id": 1, "fullName": "Greta Özdemir", "market": "Köln" },
        { "id": 2, "fullName": "Hans Albers", "market": "Köln" },
        { "id": "3", "fullName": "Ida Zimmer" }
    ],
    "budgets": [
        { "employeeId": 1, "year": 2024, "jahresanspruch": 30, "genommen": 10, "uebertrag": 3 },
        { "employeeId": "2", "year": 2024, "jahresanspruch": 25 },
        { "employeeId": 3, "year": 2024, "jahresanspruch": 28, "genommen": 28 },
        { "employeeId": 1, "year": 2023, "jahresanspruch": 30, "genommen": 27 }
    ],
    "requests": [
        { "id": 100, "employeeId": 1, "start": "2024-07-01", "end": "2024-07-12", "status": "pending",
          "createdAt": "2024-02-01T10:00:00Z" },
        { "id": 101, "employeeId": 1, "start": "2024-08-05", "end": "2024-08-09", "status": "rejected",
          "createdAt": "2024-02-01T10:00:00Z" },
        { "id": 102, "employeeId": 2, "start": "2024-09-02", "end": "2024-09-06", "status": "genehmigt",
          "createdAt": "2024-02-01T10:00:00Z",
          "decision": { "decidedBy": 9, "decidedAt": "2024-02-02T10:00:00Z" } }
    ]
}"#;

#[derive(serde::Deserialize)]
struct Storage {
    employees: Vec<Employee>,
    budgets: Vec<Budget>,
    requests: Vec<VacationRequest>,
}

fn storage() -> Storage {
    serde_json::from_str(STORAGE).unwrap()
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[test]
fn test_dashboard_from_storage() {
    let s = storage();
    let aggregator =
        StatusAggregator::new(&Germany, BudgetLedger::default(), PlannedDaysPolicy::PendingOnly);
    let report = aggregator
        .aggregate(&s.employees, &s.budgets, &s.requests, 2024)
        .unwrap();

    let names: Vec<&str> = report.rows.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, vec!["Hans Albers", "Greta Özdemir", "Ida Zimmer"]);

    // Albers: approved request does not count as planned
    let albers = &report.rows[0];
    assert_eq!(albers.planned_days, 0);
    assert_eq!(albers.status, CoverageStatus::NichtEingetragen);

    // Özdemir: Mon 01.07. .. Fri 12.07.2024 is 11 working days
    let oezdemir = &report.rows[1];
    assert_eq!(oezdemir.planned_days, 11);
    assert_eq!(oezdemir.available, 9);
    assert_eq!(oezdemir.remaining_days, 12);
    assert_eq!(oezdemir.pending_requests, 1);
    assert_eq!(oezdemir.status, CoverageStatus::Teilweise);

    // Zimmer: everything taken
    assert_eq!(report.rows[2].status, CoverageStatus::Eingetragen);
    assert!(!report.rows[2].over_budget);

    assert_eq!(report.totals.employees, 3);
    assert_eq!(report.totals.available_days, 25 + 9);
    assert_eq!(report.totals.planned_days, 11);
    assert_eq!(report.totals.pending_requests, 1);
}

#[test]
fn test_non_rejected_policy_counts_approvals() {
    let s = storage();
    let aggregator =
        StatusAggregator::new(&Germany, BudgetLedger::default(), PlannedDaysPolicy::NonRejected);
    let status = aggregator
        .classify(&EmployeeId::from(2u32), &s.budgets, &s.requests, 2024)
        .unwrap();
    assert_eq!(status, Some(CoverageStatus::Teilweise));
}

#[test]
fn test_exactly_used_up_is_eingetragen() {
    // Mon 03.06. .. Mon 01.07.2024: 29 days, four Sundays
    let requests = vec![pending("r", "e", date(2024, 6, 3), date(2024, 7, 1))];
    let budgets = vec![Budget::new("e", 2024, 25, &EntitlementBounds::default()).unwrap()];
    let aggregator =
        StatusAggregator::new(&Germany, BudgetLedger::default(), PlannedDaysPolicy::PendingOnly);
    assert_eq!(
        aggregator
            .classify(&EmployeeId::from("e"), &budgets, &requests, 2024)
            .unwrap(),
        Some(CoverageStatus::Eingetragen)
    );
}

// ─── Submission ──────────────────────────────────────────────────────────────

#[test]
fn test_submission_against_storage() {
    let s = storage();
    let registry = BlockedPeriodRegistry::default();
    let validator = SubmissionValidator::new(
        &Germany,
        &registry,
        BudgetLedger::default(),
        PlannedDaysPolicy::PendingOnly,
    );
    let budget = s
        .budgets
        .iter()
        .find(|b| b.employee_id() == &EmployeeId::from(1u32) && b.year() == 2024)
        .unwrap();

    // the rejected August request does not block the same dates
    let v = validator
        .validate(&Candidate::new(1u32, date(2024, 8, 5), date(2024, 8, 9)), &s.requests, budget)
        .unwrap();
    assert_eq!(
        v,
        Verdict::Accepted {
            working_days: 5,
            remaining_after: 7
        }
    );

    // 3 weeks in October: 18 working days minus Oct 3 = 17 > 12
    let v = validator
        .validate(&Candidate::new(1u32, date(2024, 10, 1), date(2024, 10, 21)), &s.requests, budget)
        .unwrap();
    assert!(matches!(
        v,
        Verdict::Rejected(Rejection::InsufficientBudget { requested: 17, available: 12 })
    ));
}

#[test]
fn test_verdict_json() {
    let v = Verdict::Rejected(Rejection::InsufficientBudget {
        requested: 5,
        available: -2,
    });
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["kind"], "insufficient-budget");
    assert_eq!(json["available"], -2);
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_totals_never_negative(
        rows in prop::collection::vec((20u32..=40, 0u32..50, 0u32..120, 1u32..=28), 1..8),
    ) {
        let mut budgets = Vec::new();
        let mut requests = Vec::new();
        for (i, (entitlement, taken, offset, len)) in rows.iter().enumerate() {
            let emp = format!("e{i}");
            budgets.push(
                Budget::new(emp.clone(), 2024, *entitlement, &EntitlementBounds::default())
                    .unwrap()
                    .with_taken(*taken),
            );
            let start = date(2024, 1, 8).add_days(*offset as i32).unwrap();
            let end = start.add_days(*len as i32 - 1).unwrap();
            requests.push(pending(&format!("r{i}"), &emp, start, end));
        }
        let aggregator =
            StatusAggregator::new(&Germany, BudgetLedger::default(), PlannedDaysPolicy::PendingOnly);
        let report = aggregator.aggregate(&[], &budgets, &requests, 2024).unwrap();

        let expected: u64 = report.rows.iter().map(|r| r.available.max(0) as u64).sum();
        prop_assert_eq!(report.totals.available_days, expected);
        prop_assert_eq!(report.totals.employees, rows.len());
        let statuses = report.totals.eingetragen + report.totals.teilweise + report.totals.nicht_eingetragen;
        prop_assert_eq!(statuses, rows.len());
        for row in &report.rows {
            prop_assert_eq!(row.over_budget, row.available < 0);
            if row.available > 0 {
                prop_assert_ne!(row.status, CoverageStatus::Eingetragen);
            }
        }
    }
}
