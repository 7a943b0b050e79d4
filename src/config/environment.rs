//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Intervalo por defecto del monitoreo en vivo (segundos)
pub const DEFAULT_LIVE_INTERVAL_SECS: u64 = 5;
/// Inactividad tras la cual se cierra una sesión (segundos)
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Periodo del monitoreo en vivo
    pub live_interval: Duration,
    /// Semilla para la simulación; None = entropía del sistema
    pub simulation_seed: Option<u64>,
    /// Sesiones sin requests durante este tiempo se cierran con su monitor
    pub session_idle: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            live_interval: Duration::from_secs(DEFAULT_LIVE_INTERVAL_SECS),
            simulation_seed: None,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        _ => Ok(None),
    }
}

impl EnvironmentConfig {
    /// Cargar configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let live_secs: u64 = parse_var("LIVE_INTERVAL_SECS")?.unwrap_or(DEFAULT_LIVE_INTERVAL_SECS);
        if live_secs == 0 {
            return Err(ConfigError::Zero("LIVE_INTERVAL_SECS"));
        }

        let idle_secs: u64 = parse_var("SESSION_IDLE_SECS")?.unwrap_or(DEFAULT_SESSION_IDLE_SECS);
        if idle_secs == 0 {
            return Err(ConfigError::Zero("SESSION_IDLE_SECS"));
        }

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            live_interval: Duration::from_secs(live_secs),
            simulation_seed: parse_var("SIMULATION_SEED")?,
            session_idle: Duration::from_secs(idle_secs),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
