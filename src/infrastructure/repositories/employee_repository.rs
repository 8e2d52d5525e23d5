//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr, Statement,
};

use crate::domain::{DomainError, EmployeeRepository};
use crate::models::Employee;
use crate::models::employee::{ActiveModel, Column, Entity as EmployeeEntity};

/// SeaORM-based implementation of EmployeeRepository
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique index violations on `email` surface as `AlreadyExists`
fn write_error(e: DbErr, email: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(email.to_string())
        }
        _ => DomainError::from(e),
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, DomainError> {
        let email = employee.email.clone();

        let exists = match employee.id {
            Some(id) => EmployeeEntity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };

        let active: ActiveModel = employee.into();
        let model = if exists {
            active.update(&self.db).await
        } else {
            active.insert(&self.db).await
        }
        .map_err(|e| write_error(e, &email))?;

        Ok(Employee::from(model))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = EmployeeEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(employees.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        let employee = EmployeeEntity::find_by_id(id).one(&self.db).await?;
        Ok(employee.map(Employee::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let result = EmployeeEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            tracing::debug!("Delete of employee {} matched no rows", id);
        }

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let employee = EmployeeEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(employee.map(Employee::from))
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, DomainError> {
        let mut matches = EmployeeEntity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                "SELECT * FROM employees WHERE first_name = ? AND last_name = ?",
                [first_name.into(), last_name.into()],
            ))
            .all(&self.db)
            .await?;

        match matches.len() {
            0 => Err(DomainError::NotFound),
            1 => Ok(Employee::from(matches.remove(0))),
            n => Err(DomainError::Internal(format!(
                "expected one employee named {} {}, found {}",
                first_name, last_name, n
            ))),
        }
    }
}
