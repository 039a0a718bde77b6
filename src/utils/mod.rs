//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación
//! y mensajes flash.

pub mod errors;
pub mod flash;
pub mod validation;

pub use errors::AppError;
pub use flash::{Flash, FlashKind, FlashQuery, FlashRedirect};
