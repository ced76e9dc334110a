use std::env;
use tracing::warn;

/// Default database target: a local MySQL server and the project schema.
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_NAME: &str = "project_updates";

/// Default bind address for the status API.
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Database connection settings, resolved from the environment with defaults.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Resolves the configuration from `DB_HOST`, `DB_PORT`, `DB_USER`,
    /// `DB_PASSWORD` and `DB_NAME`. Missing variables fall back to defaults;
    /// a malformed port logs a warning and falls back as well, so resolution
    /// never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    /// `from_env` delegates here; tests inject their own lookup instead of
    /// mutating process-global environment state.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        DbConfig {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port: parse_port(get("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT),
            user: get("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: get("DB_PASSWORD").unwrap_or_default(),
            database: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        }
    }
}

/// Bind settings for the HTTP status surface.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// Resolves the bind address from `HTTP_HOST` and `HTTP_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        HttpConfig {
            host: get("HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
            port: parse_port(get("HTTP_PORT"), "HTTP_PORT", DEFAULT_HTTP_PORT),
        }
    }

    /// The `host:port` string accepted by the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>, key: &str, default: u16) -> u16 {
    match raw {
        None => default,
        Some(text) => match text.trim().parse() {
            Ok(port) => port,
            Err(_) => {
                warn!(%key, value = %text, default, "ignoring malformed port");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_config_defaults() {
        let config = DbConfig::from_lookup(|_| None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.database, "project_updates");
    }

    #[test]
    fn test_db_config_from_variables() {
        let config = DbConfig::from_lookup(|key| match key {
            "DB_HOST" => Some("db.internal".to_string()),
            "DB_PORT" => Some("3307".to_string()),
            "DB_USER" => Some("updates".to_string()),
            "DB_PASSWORD" => Some("hunter2".to_string()),
            "DB_NAME" => Some("updates_prod".to_string()),
            _ => None,
        });
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "updates");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.database, "updates_prod");
    }

    #[test]
    fn test_malformed_port_falls_back() {
        let config = DbConfig::from_lookup(|key| match key {
            "DB_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.port, DEFAULT_DB_PORT);
    }

    #[test]
    fn test_http_config_bind_addr() {
        let config = HttpConfig::from_lookup(|key| match key {
            "HTTP_HOST" => Some("0.0.0.0".to_string()),
            "HTTP_PORT" => Some("9090".to_string()),
            _ => None,
        });
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
    }
}
