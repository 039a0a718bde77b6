//! Configuración de variables de entorno
//! 
//! Este módulo construye `AppConfig` a partir de variables de entorno,
//! aplicando valores por defecto cuando no están definidas.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::Level;

use super::database::DatabaseConfig;

/// Errores al leer la configuración
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} tiene un valor inválido: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuración del servidor HTTP
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuración completa de la aplicación
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Leer la configuración del entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración con una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_defaults = ServerConfig::default();
        let db_defaults = DatabaseConfig::default();

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or(server_defaults.host),
            port: parse_var(&lookup, "PORT", server_defaults.port)?,
            log_level: parse_var(&lookup, "LOG_LEVEL", server_defaults.log_level)?,
        };

        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or(db_defaults.host),
            name: lookup("DB_NAME").unwrap_or(db_defaults.name),
            user: lookup("DB_USER").unwrap_or(db_defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(db_defaults.password),
            port: parse_var(&lookup, "DB_PORT", db_defaults.port)?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
            min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS", db_defaults.min_connections)?,
            acquire_timeout: Duration::from_secs(parse_var(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                db_defaults.acquire_timeout.as_secs(),
            )?),
            run_migrations: parse_bool(&lookup, "DB_RUN_MIGRATIONS", db_defaults.run_migrations)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::InvalidValue {
                key: "DB_MIN_CONNECTIONS",
                value: database.min_connections.to_string(),
            });
        }

        Ok(Self { server, database })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "si" | "sí" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue { key, value: raw }),
        },
    }
}
