//! Overlap detection between a candidate range and existing requests.

use crate::request::{RequestStatus, VacationRequest};
use urlaub_core::EmployeeId;
use urlaub_time::Date;

/// The first non-rejected request in `existing` that `[start, end]`
/// overlaps (inclusive), in input order.
///
/// The caller passes the employee's own requests, read fresh from storage.
pub fn find_overlap<'a>(
    start: Date,
    end: Date,
    existing: &'a [VacationRequest],
) -> Option<&'a VacationRequest> {
    existing.iter().find(|r| {
        r.status() != RequestStatus::Rejected && start <= r.end() && end >= r.start()
    })
}

/// [`find_overlap`] restricted to requests owned by `employee`.
pub fn find_overlap_for_employee<'a>(
    employee: &EmployeeId,
    start: Date,
    end: Date,
    existing: &'a [VacationRequest],
) -> Option<&'a VacationRequest> {
    existing.iter().find(|r| {
        r.employee_id() == employee
            && r.status() != RequestStatus::Rejected
            && start <= r.end()
            && end >= r.start()
    })
}
