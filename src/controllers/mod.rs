pub mod docente_controller;
pub mod proyecto_controller;
