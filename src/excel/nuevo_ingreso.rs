// Lectura de la planilla de nuevo ingreso (bloques de primer año).
use std::collections::HashMap;

use calamine::{Data, Reader, open_workbook_auto};

use crate::algorithm::modulos::{modulo_desde_hora, normalizar_hora};
use crate::excel::io::{cell_to_string, leer_hoja, normalize_header};
use crate::models::SeccionNI;

const DIAS: [&str; 6] = [
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
];

/// Mapeo oficial de columnas: traduce los encabezados del Excel (ya en
/// minúsculas) a los nombres internos. COMPONENTE debe mapearse a "tipo"
/// para que el generador distinga TEO/LAB/TAL/SIM.
fn mapear_columna(encabezado: &str) -> Option<&'static str> {
    let interno = match encabezado {
        // --- asignatura ---
        "nombre" => "nombre_asignatura",
        "materia" => "codigo_materia",
        "nrc" => "nrc",
        "seccion" | "sección" => "seccion",
        "n_curso" => "n_curso",
        // --- tipo de actividad ---
        "componente" | "tipo" | "tip" => "tipo",
        // --- ubicación y tiempo ---
        "sala" => "ubicacion",
        "hr_inicio" => "inicio",
        "hr_fin" => "fin",
        // --- filtros ---
        "carrera_reserva" => "carrera",
        "carrera" => "carrera",
        "ni_an" => "ni_an",
        // --- vacantes (prioridad: cupo disponible) ---
        "cupo_disp" => "vacantes",
        // --- días ---
        "lunes" => "lunes",
        "martes" => "martes",
        "miercoles" | "miércoles" => "miercoles",
        "jueves" => "jueves",
        "viernes" => "viernes",
        "sabado" | "sábado" => "sabado",
        _ => return None,
    };
    Some(interno)
}

/// Construye el índice nombre-interno -> posición de columna.
///
/// Reglas heredadas de la planilla real:
/// - una columna llamada literalmente "vacantes" NO es la buena (la buena es
///   CUPO_DISP), así que se aparta;
/// - si existen "carrera" y "carrera_reserva", manda carrera_reserva.
fn mapear_encabezados(encabezados: &[String]) -> HashMap<&'static str, usize> {
    let normalizados: Vec<String> = encabezados.iter().map(|h| normalize_header(h)).collect();
    let hay_reserva = normalizados.iter().any(|h| h == "carrera_reserva");

    let mut columnas: HashMap<&'static str, usize> = HashMap::new();
    for (idx, h) in normalizados.iter().enumerate() {
        if h == "vacantes" {
            continue;
        }
        if h == "carrera" && hay_reserva {
            continue;
        }
        if let Some(interno) = mapear_columna(h) {
            // la primera aparición gana; duplicados posteriores se ignoran
            columnas.entry(interno).or_insert(idx);
        }
    }
    columnas
}

fn celda<'a>(fila: &'a [String], columnas: &HashMap<&'static str, usize>, clave: &str) -> &'a str {
    columnas
        .get(clave)
        .and_then(|&i| fila.get(i))
        .map(|s| s.trim())
        .unwrap_or("")
}

/// Parsea una fila de la planilla, emitiendo una entrada por cada día marcado.
/// Filas sin NRC se descartan completas.
fn parsear_fila(fila: &[String], columnas: &HashMap<&'static str, usize>) -> Vec<SeccionNI> {
    let nrc = celda(fila, columnas, "nrc").replace(".0", "");
    if nrc.is_empty() || nrc.eq_ignore_ascii_case("nan") {
        return Vec::new();
    }

    let inicio = normalizar_hora(celda(fila, columnas, "inicio"));
    let fin = normalizar_hora(celda(fila, columnas, "fin"));
    let horario_texto = if inicio.is_empty() && fin.is_empty() {
        String::new()
    } else {
        format!("{} - {}", inicio, fin)
    };
    let modulo = modulo_desde_hora(&inicio);

    let nombre = celda(fila, columnas, "nombre_asignatura");
    let materia = if nombre.is_empty() {
        "Sin Nombre".to_string()
    } else {
        nombre.to_string()
    };

    let componente = celda(fila, columnas, "tipo").to_string();
    let tipo = if componente.is_empty() {
        "TEO".to_string()
    } else {
        componente.to_uppercase()
    };

    let mut ni_an = celda(fila, columnas, "ni_an").to_uppercase();
    if ni_an == "NAN" {
        ni_an.clear();
    }

    let v_str = celda(fila, columnas, "vacantes");
    let vacantes = if v_str.is_empty() || v_str.eq_ignore_ascii_case("nan") {
        0
    } else {
        // pasar por float para aceptar "15.0"
        match v_str.parse::<f64>() {
            Ok(f) => f as i32,
            Err(e) => {
                eprintln!("ERROR leyendo vacantes NRC {}: {}", nrc, e);
                0
            }
        }
    };

    let mut entradas = Vec::new();
    for dia in DIAS {
        let marca = celda(fila, columnas, dia).to_lowercase();
        if marca.is_empty() || marca == "nan" || marca == "none" {
            continue;
        }
        entradas.push(SeccionNI {
            materia: materia.clone(),
            codigo_materia: celda(fila, columnas, "codigo_materia").to_string(),
            nrc: nrc.clone(),
            seccion: celda(fila, columnas, "seccion").to_string(),
            n_curso: celda(fila, columnas, "n_curso").to_string(),
            tipo: tipo.clone(),
            componente: componente.clone(),
            dia_norm: dia.to_string(),
            horario_texto: horario_texto.clone(),
            modulo,
            vacantes,
            ni_an: ni_an.clone(),
            carrera: celda(fila, columnas, "carrera").to_string(),
            ubicacion: celda(fila, columnas, "ubicacion").to_string(),
        });
    }
    entradas
}

/// Parsea una tabla completa (primera fila = encabezados) a secciones NI.
/// Compartida por la lectura con calamine, el fallback zip y los tests.
pub fn parsear_filas(filas: &[Vec<String>]) -> Vec<SeccionNI> {
    let Some(encabezados) = filas.first() else {
        return Vec::new();
    };
    let columnas = mapear_encabezados(encabezados);

    let mut entradas = Vec::new();
    for fila in &filas[1..] {
        if fila.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        entradas.extend(parsear_fila(fila, &columnas));
    }
    entradas
}

/// Lee la planilla de nuevo ingreso y devuelve las secciones expandidas por
/// día. Resuelve el nombre contra `UPLOADS_DIR` si la ruta no existe tal cual.
pub fn leer_nuevo_ingreso_excel(
    nombre_archivo: &str,
) -> Result<Vec<SeccionNI>, Box<dyn std::error::Error>> {
    let resolved = if std::path::Path::new(nombre_archivo).exists() {
        nombre_archivo.to_string()
    } else {
        let candidate = format!("{}/{}", crate::excel::UPLOADS_DIR, nombre_archivo);
        if std::path::Path::new(&candidate).exists() {
            candidate
        } else {
            nombre_archivo.to_string()
        }
    };

    // Intentar primero con calamine (más rápido si funciona)
    if let Ok(mut workbook) = open_workbook_auto(&resolved) {
        let sheet_names = workbook.sheet_names().to_owned();

        for sheet in sheet_names.iter() {
            if let Ok(range) = workbook.worksheet_range(sheet) {
                let filas: Vec<Vec<String>> = range
                    .rows()
                    .map(|r| r.iter().map(|c: &Data| cell_to_string(c)).collect())
                    .collect();
                let entradas = parsear_filas(&filas);
                if !entradas.is_empty() {
                    return Ok(entradas);
                }
            }
        }
    }

    // Fallback: listar hojas vía zip si calamine falló o no devolvió datos
    eprintln!(
        "DEBUG: calamine falló o no devolvió datos, intentando leer vía zip para '{}'",
        resolved
    );
    if let Ok(archive) = zip::ZipArchive::new(std::fs::File::open(&resolved)?) {
        let file_list: Vec<String> = archive.file_names().map(|s| s.to_string()).collect();

        for fname in file_list.iter() {
            if !fname.starts_with("xl/worksheets/sheet") {
                continue;
            }
            if let Ok(filas) = leer_hoja(&resolved, fname) {
                let entradas = parsear_filas(&filas);
                if !entradas.is_empty() {
                    eprintln!(
                        "DEBUG: leer_nuevo_ingreso_excel cargó {} entradas vía zip",
                        entradas.len()
                    );
                    return Ok(entradas);
                }
            }
        }
    }

    Err(format!("No se pudo leer ninguna hoja del archivo '{}'.", nombre_archivo).into())
}
