// Ayuda en línea de la API.
use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// GET /help
pub async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "API de gestión académica: carreras, planificación de horarios y generación experimental de bloques de primer año. Todas las respuestas usan el sobre {success, data|error}.",
        "endpoints": {
            "GET /get_careers": "Carreras y período académico activo",
            "POST /set_planning_period": "{period: 1|2} — 1 = semestres impares, 2 = pares",
            "POST /save_career": "{code, name, semesters, meshes} — crea o actualiza",
            "POST /delete_career": "{code} — eliminación permanente",
            "POST /add_block": "{career_code, malla, semestre, dia, modulo, codigo_materia, n_curso, nrc, seccion, tipo}",
            "POST /edit_block": "{career_code, malla, semestre, old_dia, old_modulo, nrc, seccion, new_dia, new_modulo, new_tipo} — sólo día/módulo/tipo son editables",
            "POST /delete_planning_block": "{career_code, block_index} — por índice posicional",
            "POST /groups/upload": "multipart con la planilla de nuevo ingreso; devuelve {schedule_ni}",
            "POST /groups/build": "{carrera, secciones} — construye los bloques (no se persisten)",
            "POST /groups/save_name": "{carrera, indice, nombre} — nombre personalizado de un bloque"
        },
        "note": "Los bloques generados son de sesión: se recalculan en cada /groups/build y sólo los nombres personalizados se conservan."
    });

    HttpResponse::Ok().json(help)
}
