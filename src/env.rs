use std::sync::OnceLock;

use crate::error::{Result, TeardownError};

/// Administrative password for the MySQL server
pub const ROOT_PASSWORD_VAR: &str = "MYSQL_ROOT_PASSWORD";
/// Host of the MySQL server holding the test database
pub const HOST_VAR: &str = "DB_HOST";
/// Port of the MySQL server holding the test database
pub const PORT_VAR: &str = "DB_PORT";
/// Name of the test database to drop
pub const DATABASE_VAR: &str = "DB_NAME";

/// A static cell that ensures environment variables are loaded only once
static ENV_LOADED: OnceLock<()> = OnceLock::new();

/// Loads environment variables from a .env file if they haven't been loaded yet.
///
/// Variables already present in the process environment win over the file.
pub fn load_env() {
    ENV_LOADED.get_or_init(|| {
        dotenvy::dotenv().ok();
    });
}

/// Reads an optional variable, treating an empty value as unset.
pub fn var_opt(key: &str) -> Option<String> {
    load_env();
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Reads a variable or falls back to `default`.
pub fn var_or(key: &str, default: &str) -> String {
    var_opt(key).unwrap_or_else(|| default.to_string())
}

/// Gets the administrative password.
///
/// An unset `MYSQL_ROOT_PASSWORD` means an empty password, not an error.
pub fn get_root_password() -> String {
    load_env();
    std::env::var(ROOT_PASSWORD_VAR).unwrap_or_default()
}

/// Parses a port number, naming the variable it came from on failure.
pub fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| {
        TeardownError::Config(format!(
            "{} must be a port number, got '{}': {}",
            key, raw, e
        ))
    })
}
