//! Employee Service - Business rules on top of the employee repository
//!
//! The only rule enforced here is email uniqueness on create. Everything else
//! is delegated straight to the repository.

use std::sync::Arc;

use crate::domain::{DomainError, EmployeeRepository};
use crate::models::Employee;

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Create a new employee, rejecting emails that are already taken
    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, DomainError> {
        if self.repo.find_by_email(&employee.email).await?.is_some() {
            tracing::warn!("Rejected employee with duplicate email {}", employee.email);
            return Err(DomainError::AlreadyExists(employee.email));
        }

        let saved = self.repo.save(employee).await?;
        tracing::info!("Created employee {:?}", saved.id);
        Ok(saved)
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Persist the given employee as-is. Callers are expected to have looked it up first.
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, DomainError> {
        let updated = self.repo.save(employee).await?;
        tracing::info!("Updated employee {:?}", updated.id);
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!("Delete requested for employee {}", id);
        Ok(())
    }
}
