//! Which requests count as "planned", and how many working days they plan.
//!
//! Two conventions exist for the planned figure: counting only pending
//! requests (the dashboard's view) or counting every request that is not
//! rejected. They diverge as soon as a request is approved, so the choice
//! is explicit configuration rather than a hidden default.

use crate::request::{RequestStatus, VacationRequest};
use serde::{Deserialize, Serialize};
use urlaub_core::errors::Result;
use urlaub_core::{Days, EmployeeId, Year};
use urlaub_time::HolidayCache;

/// Which request statuses contribute to the planned figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlannedDaysPolicy {
    /// Only pending requests.
    #[default]
    PendingOnly,
    /// Pending and approved requests.
    NonRejected,
}

impl PlannedDaysPolicy {
    /// Whether a request with `status` counts as planned.
    pub fn counts(&self, status: RequestStatus) -> bool {
        match self {
            PlannedDaysPolicy::PendingOnly => status == RequestStatus::Pending,
            PlannedDaysPolicy::NonRejected => status != RequestStatus::Rejected,
        }
    }
}

/// Sum of working days inside `year` over `employee`'s planned requests.
///
/// Requests of other employees in `requests` are skipped.
pub fn planned_days(
    cache: &mut HolidayCache<'_>,
    requests: &[VacationRequest],
    employee: &EmployeeId,
    year: Year,
    policy: PlannedDaysPolicy,
) -> Result<Days> {
    let mut total = 0;
    for request in requests {
        if request.employee_id() != employee || !policy.counts(request.status()) {
            continue;
        }
        if let Some(in_year) = request.range().clip_to_year(year) {
            total += cache.count_working_days_in(&in_year)?;
        }
    }
    Ok(total)
}
