//! Gestión de proyectos informáticos
//! 
//! Aplicación web CRUD para docentes y proyectos sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_router;
pub use state::AppState;
