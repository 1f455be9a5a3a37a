// Nombres personalizados de bloques, por carrera e índice.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapa de dos niveles carrera -> índice de bloque -> nombre.
///
/// Es el único estado que sobrevive a una regeneración de bloques: los
/// bloques se recalculan desde cero, pero el nombre que el usuario puso al
/// "Bloque 2" de una carrera se conserva por posición. Último que escribe
/// gana.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NombresBloques {
    nombres: BTreeMap<String, BTreeMap<usize, String>>,
}

impl NombresBloques {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nombre por defecto de un bloque según su posición.
    pub fn nombre_por_defecto(indice: usize) -> String {
        format!("Bloque {}", indice + 1)
    }

    /// Nombre efectivo: el personalizado si existe, si no el por defecto.
    pub fn nombre_de(&self, carrera: &str, indice: usize) -> String {
        self.nombres
            .get(carrera)
            .and_then(|m| m.get(&indice))
            .cloned()
            .unwrap_or_else(|| Self::nombre_por_defecto(indice))
    }

    /// Guarda un nombre personalizado y devuelve el nombre efectivo.
    /// Un nombre vacío (tras recortar espacios) restaura el por defecto.
    pub fn guardar(&mut self, carrera: &str, indice: usize, nombre: &str) -> String {
        let limpio = nombre.trim();
        if limpio.is_empty() {
            if let Some(m) = self.nombres.get_mut(carrera) {
                m.remove(&indice);
            }
            return Self::nombre_por_defecto(indice);
        }
        self.nombres
            .entry(carrera.to_string())
            .or_default()
            .insert(indice, limpio.to_string());
        limpio.to_string()
    }
}
