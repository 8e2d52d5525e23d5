//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::Employee;

/// Repository trait for Employee entity
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee, or overwrite the row matching `employee.id`
    async fn save(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Find all employees in storage order
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError>;

    /// Delete an employee by ID. Missing rows are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;

    /// Find an employee by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Find the single employee with the given first and last name.
    ///
    /// Returns `NotFound` when nobody matches and `Internal` when the name is
    /// shared by more than one row.
    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, DomainError>;
}
