pub mod docente_dto;
pub mod proyecto_dto;
