// Módulo de alto nivel para la generación de bloques de primer año
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod builder;
pub mod conflict;
pub mod labels;
pub mod modulos;

// Reexportar solo la API pública que se quiere exponer desde aquí
pub use builder::{construir_bloques, orden_dia};
pub use conflict::hay_conflicto;
pub use labels::NombresBloques;
pub use modulos::{modulo_desde_hora, modulo_desde_rango, normalizar_hora};
