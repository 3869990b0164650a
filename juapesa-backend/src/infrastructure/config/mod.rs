//! Service configuration
//!
//! Built once at process start, either from a JSON file or from the
//! environment, and passed down to every component that needs it:
//! - Server bind address
//! - Log level and format
//! - Summarizer credential
//! - Database and cache connection strings
//! - CORS allow-list
//! - Stub/live selection per integration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const SERVICE_NAME: &str = "juapesa-backend";
pub const SERVICE_VERSION: &str = "0.1.0";

/// Root configuration for the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment label
    #[serde(default = "default_env")]
    pub env: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Credential for the external summarizer; `None` keeps it offline
    #[serde(default)]
    pub groq_api_key: Option<String>,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default)]
    pub redis_url: Option<String>,

    /// Origins allowed by CORS; `"*"` allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

fn default_env() -> String {
    "development".to_string()
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            groq_api_key: None,
            database_url: default_database_url(),
            redis_url: None,
            allowed_origins: default_allowed_origins(),
            integrations: IntegrationsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Stub/live selection flags. Stubs are the default for every integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    #[serde(default = "default_true")]
    pub use_stub_daraja: bool,
    #[serde(default = "default_true")]
    pub use_stub_cctp: bool,
    #[serde(default = "default_true")]
    pub use_stub_hedera: bool,
}

fn default_true() -> bool {
    true
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            use_stub_daraja: true,
            use_stub_cctp: true,
            use_stub_hedera: true,
        }
    }
}

impl IntegrationsConfig {
    /// All integrations on their live clients
    pub fn all_live() -> Self {
        Self {
            use_stub_daraja: false,
            use_stub_cctp: false,
            use_stub_hedera: false,
        }
    }
}

/// Service identity reported by diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub name: &'static str,
    pub version: &'static str,
    pub env: String,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(env) = get("ENV") {
            config.env = env;
        }
        if let Some(host) = get("HOST") {
            config.server.host = host;
        }
        if let Some(port) = get("PORT") {
            config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(level) = get("LOG_LEVEL") {
            config.logging.level = level.trim().to_lowercase();
        }
        if let Some(format) = get("LOG_FORMAT") {
            config.logging.format = match format.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT".to_string(),
                        value: format,
                    });
                }
            };
        }
        config.groq_api_key = get("GROQ_API_KEY");
        if let Some(url) = get("DATABASE_URL") {
            config.database_url = url;
        }
        config.redis_url = get("REDIS_URL");
        if let Some(origins) = get("ALLOWED_ORIGINS") {
            config.allowed_origins = parse_origins(&origins);
        }

        let flag = |key: &str| -> Result<bool, ConfigError> {
            match get(key) {
                Some(value) => parse_bool(key, &value),
                None => Ok(true),
            }
        };
        config.integrations = IntegrationsConfig {
            use_stub_daraja: flag("USE_STUB_DARAJA")?,
            use_stub_cctp: flag("USE_STUB_CCTP")?,
            use_stub_hedera: flag("USE_STUB_HEDERA")?,
        };

        Ok(config)
    }

    pub fn info(&self) -> Info {
        Info {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            env: self.env.clone(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Split a comma-separated origin list, trimming blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.env, "development");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.integrations, IntegrationsConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "env": "staging",
            "server": { "host": "127.0.0.1", "port": 9000 },
            "logging": { "level": "debug", "format": "json" },
            "groq_api_key": "gsk-test",
            "database_url": "sqlite://data/juapesa.db",
            "allowed_origins": ["*"],
            "integrations": { "use_stub_daraja": false }
        }"#;

        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk-test"));
        assert!(config.allows_any_origin());
        assert!(!config.integrations.use_stub_daraja);
        assert!(config.integrations.use_stub_cctp);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.logging.level, "info");
        assert!(config.integrations.use_stub_hedera);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ENV", "production"),
            ("PORT", "8080"),
            ("LOG_LEVEL", "DEBUG"),
            ("GROQ_API_KEY", "gsk-live"),
            ("REDIS_URL", "redis://localhost:6379"),
            ("ALLOWED_ORIGINS", " http://a.com , http://b.com "),
            ("USE_STUB_DARAJA", "false"),
            ("USE_STUB_CCTP", "0"),
        ]))
        .unwrap();

        assert_eq!(config.info().env, "production");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk-live"));
        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(config.allowed_origins, vec!["http://a.com", "http://b.com"]);
        assert!(!config.integrations.use_stub_daraja);
        assert!(!config.integrations.use_stub_cctp);
        assert!(config.integrations.use_stub_hedera);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[("GROQ_API_KEY", ""), ("PORT", "  ")])).unwrap();
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("USE_STUB_HEDERA", "maybe")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_info() {
        let info = AppConfig::default().info();
        assert_eq!(info.name, "juapesa-backend");
        assert_eq!(info.version, "0.1.0");
        assert_eq!(info.env, "development");
    }

    #[test]
    fn test_parse_origins_drops_blanks() {
        assert_eq!(parse_origins("a, ,b,"), vec!["a", "b"]);
        assert!(parse_origins("").is_empty());
    }
}
