//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories backed by SeaORM

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationStatus, Migrator};
pub use repositories::{UserRepository, UserStore};
