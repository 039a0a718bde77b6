//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean las tablas
//! `docente` y `proyecto` de PostgreSQL.

pub mod docente;
pub mod proyecto;

pub use docente::{Docente, DocenteOpcion};
pub use proyecto::{Proyecto, ProyectoConJefe};
