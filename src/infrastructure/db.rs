use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Bootstrap schema (simple SQL, idempotent)
    create_schema(&db).await?;

    Ok(db)
}

async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Backs the duplicate-email check against concurrent creates
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_email ON employees (email)".to_owned(),
    ))
    .await?;

    tracing::debug!("Employee schema ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");

        // Running the bootstrap again must not fail
        create_schema(&db).await.expect("Second bootstrap failed");
    }
}
