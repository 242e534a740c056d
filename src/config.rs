use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Default token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 3600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT signing secret is not configured (set JWT_SECRET or [auth].jwt_secret)")]
    MissingSecret,

    #[error("Token TTL must be greater than zero")]
    ZeroTtl,

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub auth: AuthConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/fabstatus.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3001,
            cors_allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_secret: Option<String>,

    pub token_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

impl AuthConfig {
    /// Returns the configured secret, treating an empty string as absent.
    pub fn secret(&self) -> Result<&str, ConfigError> {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret),
            _ => Err(ConfigError::MissingSecret),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}

impl Config {
    /// Loads the first config file found, then applies environment overrides.
    pub fn load() -> Result<Self> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Applies environment-style overrides. `lookup` is injected so tests do
    /// not have to mutate the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = Some(secret);
        }

        if let Some(raw) = lookup("JWT_TTL_SECONDS") {
            self.auth.token_ttl_seconds =
                raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    key: "JWT_TTL_SECONDS",
                    value: raw.clone(),
                })?;
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.general.database_path = url;
        }

        if let Some(raw) = lookup("FABSTATUS_PORT") {
            self.server.port = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: "FABSTATUS_PORT",
                value: raw.clone(),
            })?;
        }

        if let Some(level) = lookup("FABSTATUS_LOG_LEVEL") {
            self.general.log_level = level;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.secret()?;

        if self.auth.token_ttl_seconds == 0 {
            return Err(ConfigError::ZeroTtl);
        }

        if self.general.max_db_connections == 0 {
            return Err(ConfigError::Invalid(
                "max_db_connections must be greater than zero".to_string(),
            ));
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            return Err(ConfigError::Invalid(
                "min_db_connections cannot exceed max_db_connections".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("fabstatus").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".fabstatus").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.auth.token_ttl_seconds, 3600);
        assert!(config.auth.jwt_secret.is_none());
        assert_eq!(config.general.max_db_connections, 5);
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let config = Config::default();
        assert_eq!(config.validate(), Err(ConfigError::MissingSecret));

        let mut config = Config::default();
        config.auth.jwt_secret = Some(String::new());
        assert_eq!(config.validate(), Err(ConfigError::MissingSecret));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                ("JWT_SECRET", "s3cret"),
                ("JWT_TTL_SECONDS", "120"),
                ("DATABASE_URL", "sqlite::memory:"),
                ("FABSTATUS_PORT", "8080"),
            ]))
            .unwrap();

        assert_eq!(config.auth.secret().unwrap(), "s3cret");
        assert_eq!(config.auth.token_ttl_seconds, 120);
        assert_eq!(config.general.database_path, "sqlite::memory:");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_ttl_env_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(env(&[("JWT_TTL_SECONDS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                key: "JWT_TTL_SECONDS",
                ..
            }
        ));

        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("JWT_SECRET", "x"), ("JWT_TTL_SECONDS", "0")]))
            .unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ZeroTtl));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [auth]
            jwt_secret = "from-file"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.auth.secret().unwrap(), "from-file");
        assert_eq!(config.auth.token_ttl_seconds, DEFAULT_TOKEN_TTL_SECONDS);
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let mut config = Config::default();
        config.auth.jwt_secret = Some("hunter2".to_string());
        let printed = format!("{config:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
