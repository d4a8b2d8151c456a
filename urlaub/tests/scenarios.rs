//! End-to-end scenarios through the façade.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use urlaub::core::{EmployeeId, RequestId};
use urlaub::ledger::{
    find_overlap, BlockedPeriodRegistry, Budget, BudgetLedger, Candidate, CoverageStatus, Employee,
    Engine, EngineConfig, EntitlementBounds, InMemoryStore, PlannedDaysPolicy, RequestStatus,
    Scope, StatusAggregator, VacationRequest,
};
use urlaub::time::{Calendar, Date, Germany, Weekday};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn request(id: &str, emp: &str, s: Date, e: Date) -> VacationRequest {
    let at = Utc.with_ymd_and_hms(2023, 11, 20, 12, 0, 0).unwrap();
    VacationRequest::new(id, emp, s, e, at).unwrap()
}

fn aggregator() -> StatusAggregator<'static> {
    StatusAggregator::new(&Germany, BudgetLedger::default(), PlannedDaysPolicy::PendingOnly)
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn thirty_six_days_minus_one_pending_week() {
    let budget = Budget::new("e", 2024, 36, &EntitlementBounds::default()).unwrap();
    // Mon 10.06. .. Fri 14.06.2024, no holidays
    let requests = vec![request("r", "e", date(2024, 6, 10), date(2024, 6, 14))];
    let planned = requests[0].working_days_in_year(&Germany, 2024);
    assert_eq!(planned, 5);
    assert_eq!(BudgetLedger::default().remaining_days(&budget, planned), 31);
    assert_eq!(
        aggregator()
            .classify(&EmployeeId::from("e"), &[budget], &requests, 2024)
            .unwrap(),
        Some(CoverageStatus::Teilweise)
    );
}

#[test]
fn twenty_five_of_twenty_five_is_fully_submitted() {
    let budget = Budget::new("e", 2024, 25, &EntitlementBounds::default()).unwrap();
    // Mon 03.06. .. Mon 01.07.2024: 29 days, four Sundays
    let requests = vec![request("r", "e", date(2024, 6, 3), date(2024, 7, 1))];
    assert_eq!(requests[0].working_days_in_year(&Germany, 2024), 25);
    assert_eq!(
        aggregator()
            .classify(&EmployeeId::from("e"), &[budget], &requests, 2024)
            .unwrap(),
        Some(CoverageStatus::Eingetragen)
    );
}

#[test]
fn december_2025_is_blocked() {
    let hit = BlockedPeriodRegistry::default()
        .is_blocked(date(2025, 12, 10), date(2025, 12, 12), 2025)
        .unwrap()
        .expect("blocked");
    assert!(hit.reason.contains("Dezember"));
}

#[test]
fn approved_request_overlaps_candidate() {
    let mut approved = request("a", "e", date(2024, 1, 1), date(2024, 1, 5));
    approved
        .approve(EmployeeId::from("chef"), Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap())
        .unwrap();
    let existing = vec![approved];
    let hit = find_overlap(date(2024, 1, 4), date(2024, 1, 6), &existing).expect("overlap");
    assert_eq!(hit.id(), &RequestId::from("a"));
}

#[test]
fn rejected_request_never_overlaps() {
    let mut rejected = request("a", "e", date(2024, 1, 1), date(2024, 1, 31));
    rejected
        .reject(EmployeeId::from("chef"), Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap())
        .unwrap();
    assert!(find_overlap(date(2024, 1, 4), date(2024, 1, 6), &[rejected]).is_none());
}

#[test]
fn numeric_and_string_ids_are_the_same_employee() {
    let json = r#"[{ "id": 1, "employeeId": 42, "start": "2024-06-10", "end": "2024-06-14",
                     "status": "pending", "createdAt": "2024-01-01T00:00:00Z" }]"#;
    let requests: Vec<VacationRequest> = serde_json::from_str(json).unwrap();
    assert_eq!(requests[0].employee_id(), &EmployeeId::from("42"));
}

// ─── Full planning season ────────────────────────────────────────────────────

#[test]
fn planning_season_with_custom_configuration() {
    let config = EngineConfig::from_json_str(
        r#"{
            "default_entitlement": 28,
            "blocked_periods": [
                { "kind": "month", "month": 12, "reason": "Urlaubssperre im Dezember" },
                { "kind": "iso-weeks", "start_week": 36, "end_week": 37, "reason": "Inventur" }
            ]
        }"#,
    )
    .unwrap();
    let engine = Engine::from_config(config).unwrap();
    let mut store = InMemoryStore::new();
    let staff = vec![
        Employee {
            id: EmployeeId::from(1u32),
            full_name: "Paula Weber".into(),
            market: Some("Bonn".into()),
        },
        Employee {
            id: EmployeeId::from(2u32),
            full_name: "Karl Adam".into(),
            market: Some("Bonn".into()),
        },
    ];
    let at = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();

    // Holy Week is open in this configuration: Mon 14.04. .. Thu 17.04.2025
    let easter_week = Candidate::new(1u32, date(2025, 4, 14), date(2025, 4, 17));
    assert!(engine.submit(&mut store, 1u32, &easter_week, None, at).unwrap().is_accepted());

    // ISO week 36 of 2025 starts Mon 01.09.
    let inventory = Candidate::new(2u32, date(2025, 9, 3), date(2025, 9, 4));
    let verdict = engine.submit(&mut store, 2u32, &inventory, None, at).unwrap();
    assert_eq!(verdict.rejection().unwrap().kind(), "blocked");

    let summer = Candidate::new(2u32, date(2025, 8, 4), date(2025, 8, 16));
    assert!(engine.submit(&mut store, 3u32, &summer, Some("Ostsee"), at).unwrap().is_accepted());

    let manager = Scope::ManagerOfMarket {
        actor: EmployeeId::from(99u32),
        market: "Bonn".into(),
    };
    engine
        .decide(&mut store, &RequestId::from(3u32), &manager, Some("Bonn"), RequestStatus::Approved, at)
        .unwrap();

    let report = engine.dashboard(&mut store, &staff, 2025).unwrap();
    assert_eq!(report.rows[0].full_name, "Karl Adam");
    // approved summer no longer counts as planned
    assert_eq!(report.rows[0].status, CoverageStatus::NichtEingetragen);
    // 4 working days in Holy Week
    assert_eq!(report.rows[1].planned_days, 4);
    assert_eq!(report.rows[1].status, CoverageStatus::Teilweise);
    assert_eq!(report.totals.available_days, 28 + 24);
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_sunday_free_week_counts_every_day(
        year in 1600i32..=9000,
        week in 1u32..=52,
        from in 0u32..6,
        len in 0u32..6,
    ) {
        let monday = Date::from_iso_week(year, week, Weekday::Monday).unwrap();
        let start = monday.add_days(from as i32).unwrap();
        let end = start.add_days(len.min(5 - from) as i32).unwrap();
        let has_holiday =
            (0..=start.days_between(end)).any(|i| Germany.is_holiday(start.add_days(i).unwrap()));
        prop_assume!(!has_holiday);
        prop_assert_eq!(
            Germany.count_working_days(start, end) as i32,
            end - start + 1
        );
    }
}
