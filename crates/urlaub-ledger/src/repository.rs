//! Storage interfaces and an in-memory implementation.
//!
//! The engine never talks to a database. Callers read through these traits,
//! hand the values to the pure checks, and write back the outcome. Writes
//! per employee must be serialised by the caller; the overlap check is only
//! as good as the freshness of the list it is given.

use crate::budget::Budget;
use crate::config::EngineConfig;
use crate::request::VacationRequest;
use crate::status::Employee;
use std::collections::BTreeMap;
use tracing::debug;
use urlaub_core::errors::{Error, Result};
use urlaub_core::{EmployeeId, RequestId, Year};

/// Read and write access to vacation requests.
pub trait RequestRepository {
    /// `employee`'s requests touching `year`, in insertion order.
    fn list_for_employee(&self, employee: &EmployeeId, year: Year) -> Result<Vec<VacationRequest>>;

    /// All requests touching `year`, in insertion order.
    fn list_all(&self, year: Year) -> Result<Vec<VacationRequest>>;

    /// The request with `id`, if stored.
    fn find(&self, id: &RequestId) -> Result<Option<VacationRequest>>;

    /// Store a new request. Fails if the id is taken.
    fn insert(&mut self, request: VacationRequest) -> Result<()>;

    /// Replace a stored request. Fails with [`Error::NotFound`] if absent.
    fn update(&mut self, request: VacationRequest) -> Result<()>;

    /// Remove and return a stored request.
    fn delete(&mut self, id: &RequestId) -> Result<VacationRequest>;
}

/// Read and write access to yearly budgets.
pub trait BudgetRepository {
    /// The budget of `employee` for `year`, if stored.
    fn get(&self, employee: &EmployeeId, year: Year) -> Result<Option<Budget>>;

    /// Insert or replace a budget.
    fn put(&mut self, budget: Budget) -> Result<()>;

    /// Every budget stored for `year`.
    fn list(&self, year: Year) -> Result<Vec<Budget>>;
}

/// The budget of `employee` for `year`, creating and storing it first when
/// missing. A new budget copies the prior year's entitlement when it lies
/// within the configured bounds, and uses the configured default otherwise.
pub fn provision_budget<R: BudgetRepository + ?Sized>(
    repo: &mut R,
    employee: &EmployeeId,
    year: Year,
    config: &EngineConfig,
) -> Result<Budget> {
    if let Some(existing) = repo.get(employee, year)? {
        return Ok(existing);
    }
    let prior = repo.get(employee, year - 1)?;
    let budget = Budget::provision(
        employee.clone(),
        year,
        prior.as_ref(),
        config.default_entitlement,
        &config.entitlement_bounds,
    )?;
    debug!(
        employee = %employee,
        year,
        entitlement = budget.entitlement(),
        seeded_from_prior = prior.is_some(),
        "budget provisioned"
    );
    repo.put(budget.clone())?;
    Ok(budget)
}

/// Requests, budgets, and the employee directory held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    requests: Vec<VacationRequest>,
    budgets: BTreeMap<(EmployeeId, Year), Budget>,
    employees: BTreeMap<EmployeeId, Employee>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a directory entry.
    pub fn put_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// A directory entry.
    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// The whole directory, ordered by id.
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    /// Number of stored requests.
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    fn position(&self, id: &RequestId) -> Option<usize> {
        self.requests.iter().position(|r| r.id() == id)
    }
}

impl RequestRepository for InMemoryStore {
    fn list_for_employee(&self, employee: &EmployeeId, year: Year) -> Result<Vec<VacationRequest>> {
        Ok(self
            .requests
            .iter()
            .filter(|r| r.employee_id() == employee && r.touches_year(year))
            .cloned()
            .collect())
    }

    fn list_all(&self, year: Year) -> Result<Vec<VacationRequest>> {
        Ok(self
            .requests
            .iter()
            .filter(|r| r.touches_year(year))
            .cloned()
            .collect())
    }

    fn find(&self, id: &RequestId) -> Result<Option<VacationRequest>> {
        Ok(self.position(id).map(|i| self.requests[i].clone()))
    }

    fn insert(&mut self, request: VacationRequest) -> Result<()> {
        if self.position(request.id()).is_some() {
            return Err(Error::InvalidArgument(format!(
                "request {} already exists",
                request.id()
            )));
        }
        self.requests.push(request);
        Ok(())
    }

    fn update(&mut self, request: VacationRequest) -> Result<()> {
        let i = self
            .position(request.id())
            .ok_or_else(|| Error::NotFound(format!("request {}", request.id())))?;
        self.requests[i] = request;
        Ok(())
    }

    fn delete(&mut self, id: &RequestId) -> Result<VacationRequest> {
        let i = self
            .position(id)
            .ok_or_else(|| Error::NotFound(format!("request {id}")))?;
        Ok(self.requests.remove(i))
    }
}

impl BudgetRepository for InMemoryStore {
    fn get(&self, employee: &EmployeeId, year: Year) -> Result<Option<Budget>> {
        Ok(self.budgets.get(&(employee.clone(), year)).cloned())
    }

    fn put(&mut self, budget: Budget) -> Result<()> {
        self.budgets
            .insert((budget.employee_id().clone(), budget.year()), budget);
        Ok(())
    }

    fn list(&self, year: Year) -> Result<Vec<Budget>> {
        Ok(self
            .budgets
            .values()
            .filter(|b| b.year() == year)
            .cloned()
            .collect())
    }
}
