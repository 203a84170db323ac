use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use tracing::{debug, info, warn};

use app_error::{AppError, AppResult};

/// Environment variable naming a JSON file that replaces the embedded config
pub const CONFIG_PATH_ENV: &str = "APP_CONFIG_PATH";

/// Complete application configuration loaded from JSON file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub swapi: SwapiConfig,
    pub security: SecurityConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub request_timeout_secs: u64,
}

/// Where and how the Star Wars dataset is queried
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwapiConfig {
    pub base_url: String,
    pub format: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SecurityConfig {
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitoringConfig {
    pub sentry: SentryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SentryConfig {
    pub dsn: String,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
    pub environment: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
        debug!("Configuration loaded from file");
        Ok(config)
    }

    /// Load configuration from `APP_CONFIG_PATH` or the embedded default file
    pub fn load() -> AppResult<Self> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                let conf = Self::from_file(&path).map_err(|e| {
                    AppError::ConfigError(e.context(format!("Failed to read config file '{}'", path)))
                })?;
                info!("Loaded configuration from: {}", path);
                conf
            }
            Err(_) => Self::embedded(),
        };

        config.validate()?;
        Ok(config)
    }

    fn embedded() -> Self {
        let config_content = include_str!("../res/app-config.json");

        match serde_json::from_str::<AppConfig>(config_content) {
            Ok(conf) => {
                info!("Loaded configuration for: {:?}", conf.environment);
                conf
            }
            Err(e) => {
                warn!(
                    "Failed to load config file: {}. Using default configuration.",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Validate the configuration, reporting every problem at once
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        let is_production = self.is_production();

        if self.server.host.trim().is_empty() {
            errors.push("Server host cannot be empty".to_string());
        }

        if self.server.port == 0 {
            errors.push("Server port cannot be 0".to_string());
        }

        if self.server.body_limit == 0 {
            errors.push("Server body limit must be greater than 0".to_string());
        }

        if self.server.request_timeout_secs == 0 {
            errors.push("Server request timeout must be greater than 0".to_string());
        }

        self.validate_swapi_config(is_production, &mut errors);

        if is_production && self.monitoring.sentry.dsn.trim().is_empty() {
            errors.push("Sentry DSN should be configured in production".to_string());
        }

        if !errors.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Invalid configuration: {}",
                errors.join(", ")
            )));
        }
        Ok(())
    }

    fn validate_swapi_config(&self, is_production: bool, errors: &mut Vec<String>) {
        let swapi = &self.swapi;

        if swapi.base_url.trim().is_empty() {
            errors.push("SWAPI base URL cannot be empty".to_string());
        } else if !swapi.base_url.starts_with("http://") && !swapi.base_url.starts_with("https://")
        {
            errors.push("SWAPI base URL must start with http:// or https://".to_string());
        } else if is_production && !swapi.base_url.starts_with("https://") {
            errors.push("Production should use a secure 'https://' SWAPI connection".to_string());
        }

        if swapi.format.trim().is_empty() {
            errors.push("SWAPI response format cannot be empty".to_string());
        }

        if swapi.timeout_secs == 0 {
            errors.push("SWAPI timeout must be greater than 0".to_string());
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 1234,
                body_limit: 1048576, // 1MB
                request_timeout_secs: 30,
            },
            swapi: SwapiConfig {
                base_url: "https://swapi.dev/api".to_string(),
                format: "json".to_string(),
                timeout_secs: 10,
            },
            security: SecurityConfig {
                cors: CorsConfig {
                    allowed_origins: vec!["*".to_string()],
                    allowed_methods: vec![
                        "GET".to_string(),
                        "POST".to_string(),
                        "OPTIONS".to_string(),
                    ],
                    allowed_headers: vec!["Content-Type".to_string()],
                },
            },
            monitoring: MonitoringConfig {
                sentry: SentryConfig {
                    dsn: "".to_string(),
                    sample_rate: 1.0,
                    traces_sample_rate: 0.2,
                    environment: "development".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    format: "text".to_string(),
                },
            },
        }
    }
}
