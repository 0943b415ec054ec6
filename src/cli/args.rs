//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::ROLE_USER;

/// User Directory - server-rendered listing of every user
#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage users from the command line
    Users(UsersArgs),
}

/// Arguments for the serve command.
///
/// Both flags override `SERVER_HOST` / `SERVER_PORT` from the config.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User management actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Add a user
    Add {
        /// Email address (must be unique)
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Role ("user" or "admin")
        #[arg(long, default_value = ROLE_USER)]
        role: String,
    },
    /// Print every user
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_add_defaults_role() {
        let cli = Cli::parse_from([
            "user-directory",
            "users",
            "add",
            "--email",
            "ada@example.com",
            "--name",
            "Ada",
        ]);

        match cli.command {
            Commands::Users(UsersArgs {
                action: UsersAction::Add { email, name, role },
            }) => {
                assert_eq!(email, "ada@example.com");
                assert_eq!(name, "Ada");
                assert_eq!(role, "user");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_flags_are_optional() {
        let cli = Cli::parse_from(["user-directory", "serve", "--port", "8080"]);

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_status_with_verbose() {
        let cli = Cli::parse_from(["user-directory", "-v", "migrate", "status"]);

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }
}
