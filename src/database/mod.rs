//! Módulo de base de datos
//! 
//! Maneja las migraciones y la verificación de conexión con PostgreSQL

pub mod connection;

pub use connection::{check_connection, run_migrations, MIGRATOR};
