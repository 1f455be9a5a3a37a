//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: helpers y utilidades para lectura/parseo de Excel
//! - `nuevo_ingreso`: lectura de la planilla de bloques de primer año

/// Helpers de IO y utilidades para parsing de Excel
mod io;

/// Lectura de la planilla de nuevo ingreso: `leer_nuevo_ingreso_excel`
pub mod nuevo_ingreso;

/// Directorio donde quedan las planillas subidas por el usuario
pub const UPLOADS_DIR: &str = "uploads";

// Re-exports: los helpers de IO quedan internos; se expone sólo el nivel alto
pub use nuevo_ingreso::leer_nuevo_ingreso_excel;
pub use nuevo_ingreso::parsear_filas;
