use assert_matches::assert_matches;
use employee_service::db;
use employee_service::domain::{DomainError, EmployeeRepository};
use employee_service::infrastructure::SeaOrmEmployeeRepository;
use employee_service::models::Employee;

// Helper to create a repository over a fresh in-memory database
async fn setup_repo() -> SeaOrmEmployeeRepository {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    SeaOrmEmployeeRepository::new(db)
}

// Helper to insert an employee and return the stored row
async fn insert(repo: &SeaOrmEmployeeRepository, first: &str, last: &str, email: &str) -> Employee {
    repo.save(Employee::new(first, last, email))
        .await
        .expect("Failed to save employee")
}

#[tokio::test]
async fn test_save_assigns_id() {
    let repo = setup_repo().await;

    let saved = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;

    assert!(saved.id.unwrap() > 0);
    assert_eq!(saved.first_name, "sin");
    assert_eq!(saved.last_name, "kang");
    assert_eq!(saved.email, "jlc488@gmail.com");
}

#[tokio::test]
async fn test_find_all_returns_every_row_in_insert_order() {
    let repo = setup_repo().await;
    let first = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;
    let second = insert(&repo, "sin2", "kang2", "jlc2@gmail.com").await;

    let all = repo.find_all().await.unwrap();

    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = setup_repo().await;
    let saved = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;

    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(saved));

    let missing = repo.find_by_id(9999).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_by_email() {
    let repo = setup_repo().await;
    let saved = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;

    let found = repo.find_by_email("jlc488@gmail.com").await.unwrap();
    assert_eq!(found, Some(saved));

    let missing = repo.find_by_email("nobody@gmail.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_by_full_name() {
    let repo = setup_repo().await;
    let saved = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;
    insert(&repo, "sin", "lee", "lee@gmail.com").await;

    let found = repo.find_by_full_name("sin", "kang").await.unwrap();
    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_find_by_full_name_without_match_is_not_found() {
    let repo = setup_repo().await;
    insert(&repo, "sin", "kang", "jlc488@gmail.com").await;

    let result = repo.find_by_full_name("nobody", "kang").await;
    assert_matches!(result, Err(DomainError::NotFound));
}

#[tokio::test]
async fn test_find_by_full_name_with_duplicates_is_internal_error() {
    let repo = setup_repo().await;
    insert(&repo, "sin", "kang", "a@gmail.com").await;
    insert(&repo, "sin", "kang", "b@gmail.com").await;

    let result = repo.find_by_full_name("sin", "kang").await;
    assert_matches!(result, Err(DomainError::Internal(_)));
}

#[tokio::test]
async fn test_save_with_existing_id_updates_in_place() {
    let repo = setup_repo().await;
    let saved = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;

    let updated = repo
        .save(Employee {
            id: saved.id,
            ..Employee::new("sinny", "kang", "test@gmail.com")
        })
        .await
        .unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.first_name, "sinny");
    assert_eq!(updated.email, "test@gmail.com");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_with_unknown_id_inserts_that_id() {
    let repo = setup_repo().await;

    let saved = repo
        .save(Employee {
            id: Some(42),
            ..Employee::new("sin", "kang", "jlc488@gmail.com")
        })
        .await
        .unwrap();

    assert_eq!(saved.id, Some(42));
    assert!(repo.find_by_id(42).await.unwrap().is_some());
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_email() {
    let repo = setup_repo().await;
    insert(&repo, "sin", "kang", "jlc488@gmail.com").await;

    let result = repo
        .save(Employee::new("other", "person", "jlc488@gmail.com"))
        .await;

    assert_matches!(result, Err(DomainError::AlreadyExists(email)) if email == "jlc488@gmail.com");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_by_id_is_idempotent() {
    let repo = setup_repo().await;
    let saved = insert(&repo, "sin", "kang", "jlc488@gmail.com").await;
    let id = saved.id.unwrap();

    repo.delete_by_id(id).await.expect("Delete failed");
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(repo.find_all().await.unwrap().is_empty());

    // Deleting again is a no-op
    repo.delete_by_id(id).await.expect("Second delete failed");
}

#[tokio::test]
async fn test_update_to_taken_email_is_rejected_and_row_unchanged() {
    let repo = setup_repo().await;
    let a = insert(&repo, "sin", "kang", "a@gmail.com").await;
    insert(&repo, "jun", "park", "b@gmail.com").await;

    let result = repo
        .save(Employee {
            id: a.id,
            ..Employee::new("sinny", "kang", "b@gmail.com")
        })
        .await;

    assert_matches!(result, Err(DomainError::AlreadyExists(email)) if email == "b@gmail.com");
    let stored = repo.find_by_id(a.id.unwrap()).await.unwrap();
    assert_eq!(stored, Some(a));
}
