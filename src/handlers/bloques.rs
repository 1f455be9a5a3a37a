// Handlers del generador de bloques de primer año.
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};
use futures_util::stream::StreamExt;
use serde::Deserialize;
use serde_json::json;
use tokio::io::AsyncWriteExt;

use crate::algorithm::{construir_bloques, orden_dia};
use crate::excel::leer_nuevo_ingreso_excel;
use crate::handlers::{respuesta_error, respuesta_exito};
use crate::models::SeccionNI;
use crate::server::EstadoApp;

#[derive(Debug, Deserialize)]
pub struct ConstruirBloquesRequest {
    pub carrera: String,
    pub secciones: Vec<SeccionNI>,
}

#[derive(Debug, Deserialize)]
pub struct GuardarNombreRequest {
    pub carrera: String,
    pub indice: usize,
    pub nombre: String,
}

/// POST /groups/upload
/// Recibe la planilla de nuevo ingreso, la guarda en `uploads/` y devuelve
/// las secciones parseadas (una entrada por sección y día).
pub async fn groups_upload_handler(mut payload: Multipart) -> impl Responder {
    let base = std::path::Path::new(crate::excel::UPLOADS_DIR);
    if let Err(e) = std::fs::create_dir_all(base) {
        return HttpResponse::InternalServerError()
            .json(json!({"success": false, "error": format!("no se pudo crear uploads: {}", e)}));
    }

    let mut guardado: Option<std::path::PathBuf> = None;
    while let Some(field_res) = payload.next().await {
        match field_res {
            Ok(mut field) => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| {
                        format!("upload-{}.xlsx", chrono::Utc::now().timestamp_millis())
                    });

                if filename.contains("..") {
                    continue;
                }

                let filepath = base.join(&filename);
                match tokio::fs::File::create(&filepath).await {
                    Ok(mut f) => {
                        let mut completo = true;
                        while let Some(chunk) = field.next().await {
                            match chunk {
                                Ok(bytes) => {
                                    if let Err(e) = f.write_all(&bytes).await {
                                        eprintln!("fallo escribiendo chunk de subida: {}", e);
                                        completo = false;
                                        break;
                                    }
                                }
                                Err(e) => {
                                    eprintln!("error en stream de subida: {}", e);
                                    completo = false;
                                    break;
                                }
                            }
                        }
                        if completo {
                            guardado = Some(filepath);
                            break;
                        }
                    }
                    Err(e) => {
                        eprintln!("no se pudo crear archivo de subida: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("error en campo multipart: {}", e);
            }
        }
    }

    let Some(path) = guardado else {
        return respuesta_error("No file");
    };

    match leer_nuevo_ingreso_excel(&path.to_string_lossy()) {
        Ok(entradas) => respuesta_exito(json!({ "schedule_ni": entradas })),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"success": false, "error": format!("{}", e)})),
    }
}

/// POST /groups/build
/// Filtra las secciones a la carrera pedida (sólo nuevo ingreso) y construye
/// los bloques. Los bloques no se persisten: se recalculan en cada llamada y
/// sólo los nombres personalizados sobreviven.
pub async fn groups_build_handler(
    body: web::Json<ConstruirBloquesRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let req = body.into_inner();
    let carrera = req.carrera.trim().to_string();
    if carrera.is_empty() {
        return respuesta_error("carrera es requerida");
    }

    let filtradas: Vec<SeccionNI> = req
        .secciones
        .into_iter()
        .filter(|s| s.carrera == carrera && s.ni_an.trim().to_uppercase() == "NI")
        .collect();

    println!("Bloques para {} (solo NI): {}", carrera, filtradas.len());

    let mut bloques = construir_bloques(&filtradas);

    let nombres = datos.bloquear_nombres();
    for (idx, bloque) in bloques.iter_mut().enumerate() {
        bloque.nombre = nombres.nombre_de(&carrera, idx);
        // orden de presentación: por día y luego por módulo
        bloque
            .secciones
            .sort_by_key(|s| (orden_dia(&s.dia_norm), s.modulo));
    }

    respuesta_exito(json!({ "carrera": carrera, "bloques": bloques }))
}

/// POST /groups/save_name
/// Guarda el nombre personalizado de un bloque (por carrera e índice).
/// Un nombre vacío restaura el por defecto.
pub async fn groups_save_name_handler(
    body: web::Json<GuardarNombreRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let req = body.into_inner();
    if req.carrera.trim().is_empty() {
        return respuesta_error("carrera es requerida");
    }

    let mut nombres = datos.bloquear_nombres();
    let efectivo = nombres.guardar(&req.carrera, req.indice, &req.nombre);
    respuesta_exito(json!({ "nombre": efectivo }))
}
