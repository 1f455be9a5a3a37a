use calamine::{Data, open_workbook_auto};
use std::path::Path;

/// Convierte un `Data` de calamine a String (versión genérica para celdas)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Normaliza un encabezado de planilla: recorta espacios y pasa a minúsculas.
/// Los espacios internos se conservan (los nombres oficiales no los tienen).
pub fn normalize_header(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Intenta leer una hoja del archivo Excel y devolverla como Vec<Vec<String>>.
/// Si la hoja pedida no existe (o el nombre viene vacío) usa la primera.
pub fn leer_hoja<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    use calamine::Reader;
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = if sheet_name.is_empty() {
        names.first().cloned().unwrap_or_default()
    } else {
        names
            .iter()
            .find(|s| *s == sheet_name)
            .cloned()
            .unwrap_or_else(|| names.first().cloned().unwrap_or_default())
    };

    if sheet_to_use.is_empty() {
        return Ok(Vec::new());
    }

    match workbook.worksheet_range(&sheet_to_use) {
        Ok(range) => {
            let mut rows: Vec<Vec<String>> = Vec::new();
            for r in range.rows() {
                rows.push(r.iter().map(cell_to_string).collect());
            }
            Ok(rows)
        }
        Err(_) => Ok(Vec::new()),
    }
}
