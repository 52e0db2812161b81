//! Connection parameters for the storage gateway
//!
//! Loaded from environment variables:
//! - `MYSQL_HOST` (default: `mysql`)
//! - `MYSQL_PORT` (default: `3306`)
//! - `MYSQL_USER` (default: `root`)
//! - `MYSQL_PASSWORD` (default: `root`)
//! - `MYSQL_DB` (default: `devops`)

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

pub const DEFAULT_HOST: &str = "mysql";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_PASSWORD: &str = "root";
pub const DEFAULT_DATABASE: &str = "devops";

/// MySQL connection descriptor
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Resolve the descriptor from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the descriptor against an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults. An unparsable
    /// `MYSQL_PORT` is ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("MYSQL_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "MYSQL_PORT is not a valid port, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: var("MYSQL_HOST", DEFAULT_HOST),
            port,
            user: var("MYSQL_USER", DEFAULT_USER),
            password: var("MYSQL_PASSWORD", DEFAULT_PASSWORD),
            database: var("MYSQL_DB", DEFAULT_DATABASE),
        }
    }

    /// Build sqlx connect options for this descriptor.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Password never reaches logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

impl fmt::Display for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mysql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}
