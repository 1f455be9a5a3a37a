// Construcción de bloques de alumnos de primer año.
use crate::algorithm::conflict::hay_conflicto;
use crate::models::{BloqueGenerado, SeccionNI};

/// Tope duro de iteraciones: protege contra datos inconsistentes que nunca
/// agoten las vacantes.
const MAX_ITERACIONES: usize = 100;

/// Particiona las secciones de nuevo ingreso de una carrera en bloques de
/// alumnos del mismo tamaño, sin choques de horario, limitados por vacantes.
///
/// Estrategia greedy:
/// 1. La plantilla son las combinaciones (materia, tipo) únicas en orden de
///    aparición; cada bloque debe cubrir todas exactamente una vez.
/// 2. Por cada combinación se elige la sección con MÁS vacantes restantes que
///    no choque con las ya elegidas (empates: gana la primera encontrada).
/// 3. El tamaño del bloque es el mínimo de vacantes entre las elegidas; se
///    descuenta de cada una y se repite hasta que alguna combinación quede
///    sin candidatas o el tamaño llegue a cero.
///
/// No es un asignador óptimo y no intenta serlo: reparte carga entre
/// secciones espejo y se detiene en cuanto no puede formar un bloque
/// completo. Nunca emite bloques parciales ni falla por datos de mala
/// calidad; simplemente produce menos bloques.
///
/// La entrada no se modifica: las vacantes restantes viven en un arreglo
/// propio de la llamada, así que dos invocaciones con la misma entrada
/// producen la misma salida.
pub fn construir_bloques(secciones: &[SeccionNI]) -> Vec<BloqueGenerado> {
    if secciones.is_empty() {
        return Vec::new();
    }

    // Vacantes restantes, paralelo al slice de entrada.
    let mut vacantes: Vec<i32> = secciones.iter().map(|s| s.vacantes.max(0)).collect();

    // Plantilla: combinaciones materia-tipo únicas, en orden de aparición.
    let mut plantilla: Vec<(&str, &str)> = Vec::new();
    for s in secciones {
        let clave = (s.materia.as_str(), s.tipo.as_str());
        if !plantilla.contains(&clave) {
            plantilla.push(clave);
        }
    }

    let mut bloques: Vec<BloqueGenerado> = Vec::new();

    for _iteracion in 0..MAX_ITERACIONES {
        let mut elegidas: Vec<usize> = Vec::new();
        let mut completo = true;

        for &(materia, tipo) in &plantilla {
            let mut mejor: Option<usize> = None;
            for (i, s) in secciones.iter().enumerate() {
                if s.materia != materia || s.tipo != tipo || vacantes[i] <= 0 {
                    continue;
                }
                if elegidas.iter().any(|&j| hay_conflicto(s, &secciones[j])) {
                    continue;
                }
                if mejor.is_none_or(|m| vacantes[i] > vacantes[m]) {
                    mejor = Some(i);
                }
            }
            match mejor {
                Some(i) => elegidas.push(i),
                None => {
                    // Sin candidatas para esta materia-tipo: se descarta el
                    // bloque en curso y termina la generación.
                    completo = false;
                    break;
                }
            }
        }

        if !completo || elegidas.is_empty() {
            break;
        }

        let size = elegidas.iter().map(|&i| vacantes[i]).min().unwrap_or(0);
        if size <= 0 {
            break;
        }

        for &i in &elegidas {
            vacantes[i] -= size;
        }

        bloques.push(BloqueGenerado {
            nombre: format!("Bloque {}", bloques.len() + 1),
            size,
            secciones: elegidas.iter().map(|&i| secciones[i].clone()).collect(),
        });
    }

    bloques
}

/// Orden de los días para presentación (lunes primero, desconocidos al final).
pub fn orden_dia(dia: &str) -> u8 {
    match dia {
        "lunes" => 1,
        "martes" => 2,
        "miercoles" => 3,
        "jueves" => 4,
        "viernes" => 5,
        "sabado" => 6,
        _ => 7,
    }
}
