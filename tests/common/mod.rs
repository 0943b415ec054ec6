//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use user_directory::domain::{CreateUser, User, UserRole};
use user_directory::errors::AppResult;
use user_directory::infra::{Database, UserRepository};
use user_directory::services::UserService;

pub fn create_test_user(name: &str, role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        name: name.to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Database handle that never touches a real server
pub fn mock_database() -> Arc<Database> {
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    Arc::new(Database::from_connection(conn))
}

/// Database handle whose next `execute` succeeds (for `/health`)
pub fn pingable_database() -> Arc<Database> {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    Arc::new(Database::from_connection(conn))
}

mock! {
    pub Repo {}

    #[async_trait]
    impl UserRepository for Repo {
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn create(&self, input: CreateUser) -> AppResult<User>;
    }
}

mock! {
    pub Service {}

    #[async_trait]
    impl UserService for Service {
        async fn list_users(&self) -> AppResult<Vec<User>>;
        async fn create_user(&self, input: CreateUser) -> AppResult<User>;
    }
}
