// Biblioteca raíz del crate `blockshift`.
// Reexporta los módulos principales: el generador de bloques de primer año,
// la lectura de planillas y el almacén de carreras.
pub mod algorithm;
pub mod excel;
mod handlers;
pub mod models;
pub mod server;
pub mod store;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
