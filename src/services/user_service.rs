//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users, unfiltered
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Validate and create a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list().await?;
        tracing::debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        input.validate()?;

        let user = self.repo.create(input).await?;
        tracing::info!(user_id = %user.id, email = %user.email, "User created");
        Ok(user)
    }
}
