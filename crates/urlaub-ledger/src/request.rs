//! Vacation requests and their lifecycle.
//!
//! A request never changes its date range after creation. Only its status
//! moves, and each move is checked against the allowed transitions:
//!
//! | from       | to                    |
//! |------------|-----------------------|
//! | `pending`  | `approved`, `rejected` |
//! | `approved` | `rejected`, `pending`  |
//! | `rejected` | `pending`              |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use urlaub_core::errors::{Error, Result};
use urlaub_core::{Days, EmployeeId, RequestId, Year};
use urlaub_time::{Calendar, Date, DateRange};

/// Lifecycle status of a request.
///
/// Serialized as the lowercase English tag; deserialized through [`FromStr`],
/// so every spelling storage has ever used is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted, not yet decided.
    Pending,
    /// Approved by a manager or administrator.
    Approved,
    /// Rejected; ignored by every check.
    Rejected,
}

impl RequestStatus {
    /// Storage spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Whether moving from `self` to `to` is allowed.
    pub fn can_transition_to(&self, to: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!(
            (self, to),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, Rejected)
                | (Approved, Pending)
                | (Rejected, Pending)
        )
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "offen" | "beantragt" => Ok(RequestStatus::Pending),
            "approved" | "genehmigt" => Ok(RequestStatus::Approved),
            "rejected" | "abgelehnt" => Ok(RequestStatus::Rejected),
            _ => Err(Error::InvalidArgument(format!(
                "unknown request status {s:?}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Who decided a request, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// The approving or rejecting user.
    pub decided_by: EmployeeId,
    /// Decision timestamp.
    pub decided_at: DateTime<Utc>,
}

/// A vacation request for an inclusive range of calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    id: RequestId,
    employee_id: EmployeeId,
    #[serde(flatten)]
    range: DateRange,
    status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decision: Option<Decision>,
}

impl VacationRequest {
    /// A new pending request. Fails if `start > end`.
    pub fn new(
        id: impl Into<RequestId>,
        employee_id: impl Into<EmployeeId>,
        start: Date,
        end: Date,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            employee_id: employee_id.into(),
            range: DateRange::new(start, end)?,
            status: RequestStatus::Pending,
            note: None,
            created_at,
            decision: None,
        })
    }

    /// Attach a free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Rebuild a request as read from storage, status included.
    pub fn restore(
        id: impl Into<RequestId>,
        employee_id: impl Into<EmployeeId>,
        range: DateRange,
        status: RequestStatus,
        created_at: DateTime<Utc>,
        decision: Option<Decision>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            range,
            status,
            note: None,
            created_at,
            decision,
        }
    }

    /// Identifier.
    pub fn id(&self) -> &RequestId {
        &self.id
    }

    /// Owning employee.
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// First day off (inclusive).
    pub fn start(&self) -> Date {
        self.range.start()
    }

    /// Last day off (inclusive).
    pub fn end(&self) -> Date {
        self.range.end()
    }

    /// The requested range.
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Current status.
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Free-text note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The last approve/reject decision, cleared on reopen.
    pub fn decision(&self) -> Option<&Decision> {
        self.decision.as_ref()
    }

    /// Whether the request is still undecided.
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Whether the request touches `year`.
    pub fn touches_year(&self, year: Year) -> bool {
        self.range.clip_to_year(year).is_some()
    }

    /// Working days of the request that fall inside `year`.
    pub fn working_days_in_year(&self, calendar: &dyn Calendar, year: Year) -> Days {
        self.range
            .clip_to_year(year)
            .map_or(0, |r| calendar.count_working_days_in(&r))
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Approve the request.
    pub fn approve(&mut self, by: EmployeeId, at: DateTime<Utc>) -> Result<()> {
        self.transition(RequestStatus::Approved, Some(Decision { decided_by: by, decided_at: at }))
    }

    /// Reject the request (also revokes an approval).
    pub fn reject(&mut self, by: EmployeeId, at: DateTime<Utc>) -> Result<()> {
        self.transition(RequestStatus::Rejected, Some(Decision { decided_by: by, decided_at: at }))
    }

    /// Put a decided request back to pending.
    pub fn reopen(&mut self) -> Result<()> {
        self.transition(RequestStatus::Pending, None)
    }

    fn transition(&mut self, to: RequestStatus, decision: Option<Decision>) -> Result<()> {
        if !self.status.can_transition_to(to) {
            return Err(Error::InvalidTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        self.decision = decision;
        Ok(())
    }
}
