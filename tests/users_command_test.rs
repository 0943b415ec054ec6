//! Tests for the `users` CLI command.

mod common;

use common::{create_test_user, MockService};
use user_directory::cli::args::UsersAction;
use user_directory::commands::users::{format_row, run};
use user_directory::domain::{CreateUser, UserRole};
use user_directory::errors::AppError;

#[tokio::test]
async fn test_add_forwards_arguments_to_service() {
    let mut service = MockService::new();
    service
        .expect_create_user()
        .withf(|input: &CreateUser| {
            input.email == "ada@example.com" && input.name == "Ada" && input.role == "admin"
        })
        .times(1)
        .returning(|_| Ok(create_test_user("Ada", UserRole::Admin)));

    let action = UsersAction::Add {
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
        role: "admin".to_string(),
    };

    assert!(run(action, &service).await.is_ok());
}

#[tokio::test]
async fn test_add_reports_conflict() {
    let mut service = MockService::new();
    service
        .expect_create_user()
        .returning(|_| Err(AppError::conflict("User with email ada@example.com")));

    let action = UsersAction::Add {
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
        role: "user".to_string(),
    };

    assert!(matches!(
        run(action, &service).await,
        Err(AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_list_reads_all_users_once() {
    let mut service = MockService::new();
    service.expect_list_users().times(1).returning(|| {
        Ok(vec![
            create_test_user("Ada", UserRole::Admin),
            create_test_user("Bob", UserRole::User),
        ])
    });

    assert!(run(UsersAction::List, &service).await.is_ok());
}

#[test]
fn test_format_row_contains_key_fields() {
    let user = create_test_user("Ada Lovelace", UserRole::Admin);
    let row = format_row(&user);

    assert!(row.starts_with(&user.id.to_string()));
    assert!(row.contains("ada.lovelace@example.com"));
    assert!(row.contains("admin"));
    assert!(row.ends_with("Ada Lovelace"));
}
