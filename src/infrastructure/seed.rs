use crate::domain::DomainError;
use crate::models::Employee;
use crate::services::EmployeeService;

/// Insert a couple of demo employees, skipping emails that are already taken.
/// Returns the number of rows inserted.
pub async fn seed_demo_data(service: &EmployeeService) -> Result<usize, DomainError> {
    let demo = [
        Employee::new("sin", "kang", "sin.kang@example.com"),
        Employee::new("jun", "park", "jun.park@example.com"),
    ];

    let mut inserted = 0;
    for employee in demo {
        match service.save_employee(employee).await {
            Ok(_) => inserted += 1,
            Err(DomainError::AlreadyExists(email)) => {
                tracing::debug!("Demo employee {} already present", email);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}
