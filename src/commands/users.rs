//! Users command - Add and list users without going through HTTP.

use std::sync::Arc;

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::domain::{CreateUser, User};
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::open(&config).await?;
    let service = UserManager::new(Arc::new(UserStore::new(db.get_connection())));

    run(args.action, &service).await
}

/// Dispatch a users action against any service implementation
pub async fn run(action: UsersAction, service: &dyn UserService) -> AppResult<()> {
    match action {
        UsersAction::Add { email, name, role } => {
            let user = service.create_user(CreateUser { email, name, role }).await?;
            println!("Created {}", format_row(&user));
        }
        UsersAction::List => {
            let users = service.list_users().await?;
            for user in &users {
                println!("{}", format_row(user));
            }
            println!("{} user(s)", users.len());
        }
    }

    Ok(())
}

/// Single-line summary of a user for terminal output
pub fn format_row(user: &User) -> String {
    format!(
        "{}  {:<30}  {:<6}  {}",
        user.id,
        user.email,
        user.role.to_string(),
        user.name
    )
}
