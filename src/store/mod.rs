// Almacén de carreras y planificación: el "backend" de datos del sistema.
use std::collections::BTreeMap;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{BloquePlan, Carrera};

const DATA_DIR: &str = "data";
const ARCHIVO_CARRERAS: &str = "data/carreras.json";

fn periodo_por_defecto() -> u8 {
    1
}

/// Identificación de un bloque existente más sus nuevos valores editables.
/// NRC, sección y materia identifican al bloque y no se pueden cambiar.
#[derive(Debug, Clone, Deserialize)]
pub struct EdicionBloque {
    pub malla: String,
    pub semestre: String,
    pub old_dia: String,
    pub old_modulo: String,
    pub nrc: String,
    pub seccion: String,
    pub new_dia: String,
    pub new_modulo: String,
    pub new_tipo: String,
}

/// Carreras indexadas por código más el período académico activo
/// (1 = semestres impares, 2 = pares).
///
/// Pensado para un único usuario interactivo: las mutaciones son
/// último-que-escribe-gana y cada una se persiste completa a disco.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarreraStore {
    pub carreras: BTreeMap<String, Carrera>,
    #[serde(default = "periodo_por_defecto")]
    pub periodo: u8,
}

impl Default for CarreraStore {
    fn default() -> Self {
        CarreraStore {
            carreras: BTreeMap::new(),
            periodo: 1,
        }
    }
}

impl CarreraStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carga el almacén desde `data/carreras.json`. Si el archivo no existe
    /// o no parsea, parte con un almacén vacío.
    pub fn cargar() -> Self {
        if Path::new(ARCHIVO_CARRERAS).exists() {
            match std::fs::read_to_string(ARCHIVO_CARRERAS) {
                Ok(contenido) if !contenido.trim().is_empty() => {
                    match serde_json::from_str::<CarreraStore>(&contenido) {
                        Ok(store) => return store,
                        Err(e) => {
                            eprintln!("carreras.json inválido, partiendo de cero: {}", e);
                        }
                    }
                }
                _ => { /* archivo vacío o ilegible -> partir de cero */ }
            }
        }
        Self::default()
    }

    /// Persiste el almacén completo a `data/carreras.json`.
    pub fn guardar_en_disco(&self) -> Result<(), String> {
        create_dir_all(DATA_DIR).map_err(|e| format!("no se pudo crear {}: {}", DATA_DIR, e))?;
        let texto = serde_json::to_string_pretty(self)
            .map_err(|e| format!("no se pudo serializar carreras: {}", e))?;
        let mut f = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(ARCHIVO_CARRERAS)
            .map_err(|e| format!("no se pudo abrir {}: {}", ARCHIVO_CARRERAS, e))?;
        f.write_all(texto.as_bytes())
            .map_err(|e| format!("no se pudo escribir {}: {}", ARCHIVO_CARRERAS, e))
    }

    /// Cambia el período académico activo. Sólo se aceptan 1 (impares) y
    /// 2 (pares).
    pub fn establecer_periodo(&mut self, periodo: u8) -> Result<u8, String> {
        match periodo {
            1 | 2 => {
                self.periodo = periodo;
                Ok(self.periodo)
            }
            otro => Err(format!("Período inválido: {} (use 1 o 2)", otro)),
        }
    }

    /// Crea o actualiza una carrera. Al actualizar se conserva la
    /// planificación de bloques existente.
    pub fn guardar_carrera(
        &mut self,
        code: &str,
        nombre: &str,
        semestres: &str,
        mallas: Vec<String>,
    ) -> Result<(), String> {
        let code = code.trim().to_uppercase();
        let nombre = nombre.trim();
        if code.is_empty() || nombre.is_empty() {
            return Err("Faltan datos de la carrera (código o nombre)".to_string());
        }
        if mallas.is_empty() {
            return Err("Debe seleccionar al menos una malla".to_string());
        }
        let semestres: u8 = semestres
            .trim()
            .parse()
            .map_err(|_| format!("Número de semestres inválido: '{}'", semestres))?;

        let horario = self
            .carreras
            .get(&code)
            .map(|c| c.horario.clone())
            .unwrap_or_default();

        self.carreras.insert(
            code,
            Carrera {
                nombre: nombre.to_string(),
                semestres,
                mallas,
                horario,
            },
        );
        Ok(())
    }

    /// Elimina una carrera y toda su planificación. Permanente.
    pub fn eliminar_carrera(&mut self, code: &str) -> Result<(), String> {
        match self.carreras.remove(code) {
            Some(_) => Ok(()),
            None => Err(format!("Carrera '{}' no encontrada", code)),
        }
    }

    /// Agrega un bloque al plan de una carrera (al final de la lista).
    pub fn agregar_bloque(&mut self, code: &str, bloque: BloquePlan) -> Result<(), String> {
        let carrera = self
            .carreras
            .get_mut(code)
            .ok_or_else(|| format!("Carrera '{}' no encontrada", code))?;
        carrera.horario.push(bloque);
        Ok(())
    }

    /// Edita un bloque identificado por (malla, semestre, día, módulo, NRC,
    /// sección) anteriores. Sólo cambian día, módulo y tipo.
    pub fn editar_bloque(&mut self, code: &str, edicion: &EdicionBloque) -> Result<(), String> {
        let carrera = self
            .carreras
            .get_mut(code)
            .ok_or_else(|| format!("Carrera '{}' no encontrada", code))?;

        let bloque = carrera
            .horario
            .iter_mut()
            .find(|b| {
                b.malla == edicion.malla
                    && b.semestre == edicion.semestre
                    && b.dia == edicion.old_dia
                    && b.modulo == edicion.old_modulo
                    && b.nrc == edicion.nrc
                    && b.seccion == edicion.seccion
            })
            .ok_or_else(|| "Bloque no encontrado".to_string())?;

        bloque.dia = edicion.new_dia.clone();
        bloque.modulo = edicion.new_modulo.clone();
        bloque.tipo = edicion.new_tipo.clone();
        Ok(())
    }

    /// Elimina un bloque por su índice posicional dentro del plan. Los
    /// índices posteriores se corren; el llamador es responsable de no usar
    /// índices viejos después de un borrado.
    pub fn eliminar_bloque(&mut self, code: &str, indice: usize) -> Result<(), String> {
        let carrera = self
            .carreras
            .get_mut(code)
            .ok_or_else(|| format!("Carrera '{}' no encontrada", code))?;
        if indice >= carrera.horario.len() {
            return Err(format!("Índice de bloque fuera de rango: {}", indice));
        }
        carrera.horario.remove(indice);
        Ok(())
    }
}
