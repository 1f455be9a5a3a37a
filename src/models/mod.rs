// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Una fila de la planilla de nuevo ingreso ya normalizada: una sección en un
/// día concreto. La misma sección (NRC + seccion) aparece una vez por cada día
/// en que dicta clases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeccionNI {
    /// Nombre de la asignatura (no el código)
    pub materia: String,
    pub codigo_materia: String,
    pub nrc: String,
    pub seccion: String,
    pub n_curso: String,
    /// Tipo de actividad normalizado en mayúsculas: TEO, LAB, TAL, SIM
    pub tipo: String,
    /// Valor original de la columna COMPONENTE, tal como venía en el Excel
    pub componente: String,
    /// Día normalizado: lunes..sabado, sin tildes
    pub dia_norm: String,
    /// Rango horario en texto, p.ej. "08:00 - 09:20"
    pub horario_texto: String,
    /// Módulo académico 1-8 según la hora de inicio; 0 si no coincide
    pub modulo: u8,
    pub vacantes: i32,
    /// Indicador de nuevo ingreso ("NI") tal como venía en la planilla
    pub ni_an: String,
    pub carrera: String,
    pub ubicacion: String,
}

/// Un bloque de alumnos generado: una sección por cada combinación
/// materia-tipo de la carrera, sin choques de horario entre materias
/// distintas, con cupo igual al mínimo de vacantes de sus secciones.
#[derive(Debug, Clone, Serialize)]
pub struct BloqueGenerado {
    pub nombre: String,
    pub size: i32,
    pub secciones: Vec<SeccionNI>,
}

/// Una carrera con su planificación de horarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrera {
    pub nombre: String,
    pub semestres: u8,
    /// Años de malla curricular activos, p.ej. ["2018", "2020"]
    pub mallas: Vec<String>,
    #[serde(default)]
    pub horario: Vec<BloquePlan>,
}

/// Un bloque dentro del plan de una carrera. NRC, sección y código de materia
/// identifican el bloque y no cambian una vez creado; sólo día, módulo y tipo
/// son editables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloquePlan {
    pub malla: String,
    pub semestre: String,
    pub dia: String,
    pub modulo: String,
    pub codigo_materia: String,
    pub n_curso: String,
    pub nrc: String,
    pub seccion: String,
    pub tipo: String,
}
