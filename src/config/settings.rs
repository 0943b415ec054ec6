//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_AUTO_MIGRATE, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Apply pending migrations on `serve`
    pub auto_migrate: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("auto_migrate", &self.auto_migrate)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            auto_migrate: DEFAULT_AUTO_MIGRATE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            auto_migrate: lookup("AUTO_MIGRATE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.auto_migrate),
        }
    }

    /// Replace host/port with command-line values where given.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server_host = host;
        }
        if let Some(port) = port {
            self.server_port = port;
        }
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert!(config.auto_migrate);
    }

    #[test]
    fn test_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/test"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("AUTO_MIGRATE", "false"),
        ]));

        assert_eq!(config.database_url, "postgres://db/test");
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert!(!config.auto_migrate);
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not-a-port")]));
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_cli_overrides_win_over_environment() {
        let config = Config::from_lookup(lookup_from(&[("SERVER_PORT", "8080")]))
            .with_overrides(Some("127.0.0.1".to_string()), None);

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://admin:hunter2@db/prod",
        )]));

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
