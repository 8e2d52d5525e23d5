//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::EmployeeRepository;
use crate::infrastructure::SeaOrmEmployeeRepository;
use crate::services::EmployeeService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Employee service (duplicate-email rule on top of the repository)
    pub employee_service: EmployeeService,
}

impl AppState {
    /// Create a new AppState backed by SeaORM repositories
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo: Arc<dyn EmployeeRepository> =
            Arc::new(SeaOrmEmployeeRepository::new(db.clone()));

        Self {
            db,
            employee_service: EmployeeService::new(employee_repo),
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
