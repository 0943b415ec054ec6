//! User Directory - a server-rendered listing of every user.
//!
//! The heart of the crate is one page: `GET /users` loads every `User`
//! through SeaORM and renders them with the `users/user_list.html`
//! askama template.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, HTML views and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Add a user
//! cargo run -- users add --email ada@example.com --name Ada
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserRole};
pub use errors::{AppError, AppResult};
