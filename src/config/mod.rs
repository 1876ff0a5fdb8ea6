use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::engine::ScoringWeights;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Composite-score weight overrides. Defaults match the standard weight set;
/// each variable accepts a non-negative finite float.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = ScoringWeights::default();
        Ok(Self {
            weights: ScoringWeights {
                eligibility_fit: weight_var("APP_WEIGHT_ELIGIBILITY_FIT", defaults.eligibility_fit)?,
                deadline_urgency: weight_var(
                    "APP_WEIGHT_DEADLINE_URGENCY",
                    defaults.deadline_urgency,
                )?,
                award_size: weight_var("APP_WEIGHT_AWARD_SIZE", defaults.award_size)?,
                effort_level: weight_var("APP_WEIGHT_EFFORT_LEVEL", defaults.effort_level)?,
                strategic_fit: weight_var("APP_WEIGHT_STRATEGIC_FIT", defaults.strategic_fit)?,
            },
        })
    }
}

fn weight_var(name: &'static str, default: f32) -> Result<f32, ConfigError> {
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidWeight { name })?;
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name });
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeight { name } => {
                write!(f, "{name} must be a non-negative finite float")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidWeight { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_WEIGHT_ELIGIBILITY_FIT");
        env::remove_var("APP_WEIGHT_DEADLINE_URGENCY");
        env::remove_var("APP_WEIGHT_AWARD_SIZE");
        env::remove_var("APP_WEIGHT_EFFORT_LEVEL");
        env::remove_var("APP_WEIGHT_STRATEGIC_FIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.weights, ScoringWeights::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn weight_override_applies() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEIGHT_ELIGIBILITY_FIT", "0.5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.weights.eligibility_fit, 0.5);
        assert_eq!(
            config.scoring.weights.strategic_fit,
            ScoringWeights::default().strategic_fit
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEIGHT_AWARD_SIZE", "-0.2");
        let err = AppConfig::load().expect_err("negative weight rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidWeight {
                name: "APP_WEIGHT_AWARD_SIZE"
            }
        ));
    }
}
