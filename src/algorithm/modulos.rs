// Normalización de horas y mapeo a módulos académicos.

/// Normaliza una hora a formato "HH:MM".
///
/// Maneja las formas habituales de las planillas:
/// - "800"  -> "08:00"
/// - "1430" -> "14:30"
/// - "9:30" -> "9:30" (ya trae ':', se deja igual)
/// - "14:00.0" -> "14:00" (residuo de celdas numéricas)
///
/// Devuelve cadena vacía si la entrada está vacía o es "nan".
pub fn normalizar_hora(hora: &str) -> String {
    let h = hora.trim().replace(".0", "");
    if h.is_empty() || h.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    if h.contains(':') {
        return h;
    }
    if !h.chars().all(|c| c.is_ascii_digit()) {
        return h;
    }
    match h.len() {
        3 => format!("0{}:{}", &h[..1], &h[1..]),
        4 => format!("{}:{}", &h[..2], &h[2..]),
        _ => h,
    }
}

/// Módulo académico según la hora de inicio.
///
/// Módulos:
/// - M1: 08:00   - M5: 14:00
/// - M2: 09:30   - M6: 15:30
/// - M3: 11:00   - M7: 17:00
/// - M4: 12:30   - M8: 18:30
///
/// Sólo coinciden las 8 horas canónicas exactas; cualquier otra cosa da 0.
pub fn modulo_desde_hora(inicio: &str) -> u8 {
    match normalizar_hora(inicio).as_str() {
        "08:00" | "8:00" => 1,
        "09:30" | "9:30" => 2,
        "11:00" => 3,
        "12:30" => 4,
        "14:00" => 5,
        "15:30" => 6,
        "17:00" => 7,
        "18:30" => 8,
        _ => 0,
    }
}

/// Convierte un rango horario ("08:00 - 09:20", "0800-0920") al número de
/// módulo 1-8 según su hora de inicio, o `None` si el texto no trae un rango
/// o el inicio no coincide con ningún módulo.
pub fn modulo_desde_rango(rango: &str) -> Option<u8> {
    let rango = rango.trim();
    if rango.is_empty() {
        return None;
    }
    let mut partes = rango.splitn(2, '-');
    let inicio = partes.next()?;
    // sin '-' no hay rango
    partes.next()?;
    match modulo_desde_hora(inicio) {
        0 => None,
        m => Some(m),
    }
}
