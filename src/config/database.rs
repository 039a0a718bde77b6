//! Configuración de base de datos
//! 
//! Este módulo maneja los parámetros de conexión a PostgreSQL y la creación
//! del pool de conexiones con SQLx.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            name: "proyectos_informaticos".to_string(),
            user: "usuario".to_string(),
            password: "1234".to_string(),
            port: 5432,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Opciones de conexión de PostgreSQL
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
    }

    /// Crear un nuevo pool de conexiones, verificando la conexión
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options()
            .connect_with(self.connect_options())
            .await
    }

    /// Crear un pool que no conecta hasta la primera consulta
    pub fn create_lazy_pool(&self) -> PgPool {
        self.pool_options().connect_lazy_with(self.connect_options())
    }

    /// Destino de conexión apto para logs (sin contraseña)
    pub fn redacted(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}
