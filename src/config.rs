use serde::Deserialize;
use std::env;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "sqlite://empresas.db?mode=rwc";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_body_bytes: Option<usize>,
    /// When set, updating an obligation checks that the new `empresa_id`
    /// exists, the same way creation does.
    #[serde(default)]
    pub obrigacao_update_checks_empresa: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_body_bytes: None,
            obrigacao_update_checks_empresa: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("obrigacao_update_checks_empresa", false)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let config: Config = cfg.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.host.is_empty()
            || !self
                .host
                .chars()
                .all(|c| c.is_alphanumeric() || ".:-_".contains(c))
        {
            return Err(config::ConfigError::Message(
                "Invalid host format".to_string(),
            ));
        }

        if self.port < 1024 {
            return Err(config::ConfigError::Message(
                "Port must be 1024 or higher".to_string(),
            ));
        }

        if self.database_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }

        // 1KB..10MB, request bodies here are a handful of short strings
        if let Some(limit) = self.max_body_bytes {
            let min = 1024;
            let max = 10 * 1024 * 1024;
            if limit < min || limit > max {
                return Err(config::ConfigError::Message(format!(
                    "max_body_bytes must be between {} and {} bytes",
                    min, max
                )));
            }
        }

        Ok(())
    }

    pub fn effective_max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(64 * 1024)
    }

    pub fn database_settings(&self) -> DatabaseSettings {
        DatabaseSettings::default_from_url(self.database_url.clone())
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
    pub sql_log: Option<bool>,
}

impl DatabaseSettings {
    pub fn default_from_url(url: String) -> Self {
        Self {
            url,
            max_connections: parse_env_var("DATABASE_MAX_CONNECTIONS"),
            min_connections: parse_env_var("DATABASE_MIN_CONNECTIONS"),
            connect_timeout_secs: parse_env_var("DATABASE_CONNECT_TIMEOUT_SECS"),
            acquire_timeout_secs: parse_env_var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            idle_timeout_secs: parse_env_var("DATABASE_IDLE_TIMEOUT_SECS"),
            sql_log: parse_env_var("DATABASE_SQL_LOG"),
        }
    }

    /// Single-connection settings. An in-memory SQLite database lives inside
    /// one connection, so the pool must never open a second one.
    pub fn single_connection(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout_secs: None,
            acquire_timeout_secs: None,
            idle_timeout_secs: None,
            sql_log: Some(false),
        }
    }
}

fn parse_env_var<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|value| value.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().effective_max_body_bytes(), 64 * 1024);
    }

    #[test]
    fn rejects_privileged_port() {
        let config = Config {
            port: 80,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_suspicious_host() {
        let config = Config {
            host: "localhost;rm".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_body_limit() {
        let too_small = Config {
            max_body_bytes: Some(10),
            ..Config::default()
        };
        assert!(too_small.validate().is_err());

        let ok = Config {
            max_body_bytes: Some(2048),
            ..Config::default()
        };
        assert!(ok.validate().is_ok());
        assert_eq!(ok.effective_max_body_bytes(), 2048);
    }
}
