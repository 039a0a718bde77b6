//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración de base de datos y del servidor,
//! construida una sola vez al arrancar a partir de variables de entorno.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::*;
