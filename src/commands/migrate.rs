//! Migrate command - apply, revert or inspect schema migrations.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Explicit control: never auto-migrate here
    let db = Database::open(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.migrate_up().await?;
            tracing::info!("Pending migrations applied");
        }
        MigrateAction::Down => {
            db.migrate_down().await?;
            tracing::info!("Last migration reverted");
        }
        MigrateAction::Status => {
            for status in db.migration_status().await? {
                let marker = if status.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, status.name);
            }
        }
    }

    Ok(())
}
