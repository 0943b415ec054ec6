//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use uuid::Uuid;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, User};
use crate::errors::{AppError, AppResult};

/// User repository trait for dependency injection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user record.
    ///
    /// The query is unfiltered and unordered; rows come back in whatever
    /// order the database returns them.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&*self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let email = input.email.clone();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(input.email),
            name: Set(input.name),
            role: Set(input.role),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&*self.db).await.map_err(|e| {
            let kind = e.sql_err();
            insert_error(kind, e, &email)
        })?;

        Ok(User::from(model))
    }
}

/// Map a failed insert, given the driver's SQL error classification.
fn insert_error(kind: Option<SqlErr>, err: DbErr, email: &str) -> AppError {
    match kind {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::conflict(format!("User with email {}", email))
        }
        _ => AppError::from(err),
    }
}
