//! Application configuration management.
//!
//! Provides typed configuration loaded from environment variables with validation.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// Number of HTTP workers; 0 keeps actix-web's default (one per core)
    pub workers: usize,

    /// Request size limits
    pub limits: LimitsConfig,

    /// Observability settings
    pub observability: ObservabilityConfig,
}

/// Request size limits.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes
    pub json_payload_bytes: usize,
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Whether `/metrics` is exposed
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: 0,
            limits: LimitsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            json_payload_bytes: 256 * 1024, // 256KB, actix-web's own default
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration error for '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Server port (default: 8000)
    /// - `WORKERS`: HTTP worker count, 0 for one per core (default: 0)
    /// - `JSON_PAYLOAD_LIMIT`: Max request body size in bytes (default: 262144)
    /// - `METRICS_ENABLED`: Expose `/metrics` (default: 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env_or("PORT", defaults.port)?,
            workers: parse_env_or("WORKERS", defaults.workers)?,
            limits: LimitsConfig {
                json_payload_bytes: parse_env_or(
                    "JSON_PAYLOAD_LIMIT",
                    defaults.limits.json_payload_bytes,
                )?,
            },
            observability: ObservabilityConfig {
                metrics_enabled: parse_env_or("METRICS_ENABLED", 1)? != 0,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError {
                field: "HOST".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(ConfigError {
                field: "PORT".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.limits.json_payload_bytes == 0 {
            return Err(ConfigError {
                field: "JSON_PAYLOAD_LIMIT".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse an environment variable or return a default value.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val.parse().map_err(|_| ConfigError {
            field: name.to_string(),
            message: format!("Invalid value '{}', expected a valid number", val),
        }),
        Err(_) => Ok(default),
    }
}
