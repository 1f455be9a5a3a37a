// Detección de choques de horario entre secciones.
use crate::algorithm::modulos::modulo_desde_rango;
use crate::models::SeccionNI;

/// True si dos secciones chocan en horario.
///
/// Reglas:
/// - Secciones de la MISMA materia nunca chocan: una TEO y un TAL de
///   "Comunicación Efectiva" pueden compartir día y módulo.
/// - Materias distintas chocan sólo si coinciden en día y en el mismo módulo
///   reconocido (1-8).
/// - Si alguno de los rangos no mapea a un módulo canónico, queda fuera del
///   chequeo y no se considera choque.
pub fn hay_conflicto(a: &SeccionNI, b: &SeccionNI) -> bool {
    if a.materia == b.materia {
        return false;
    }
    if a.dia_norm != b.dia_norm {
        return false;
    }
    match (
        modulo_desde_rango(&a.horario_texto),
        modulo_desde_rango(&b.horario_texto),
    ) {
        (Some(ma), Some(mb)) => ma == mb,
        _ => false,
    }
}
