pub mod docente_repository;
pub mod proyecto_repository;
