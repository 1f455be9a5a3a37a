// Handlers del almacén de carreras y su planificación.
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;

use crate::handlers::{respuesta_error, respuesta_exito};
use crate::models::BloquePlan;
use crate::server::EstadoApp;
use crate::store::{CarreraStore, EdicionBloque};

#[derive(Debug, Deserialize)]
pub struct PeriodoRequest {
    pub period: u8,
}

#[derive(Debug, Deserialize)]
pub struct GuardarCarreraRequest {
    pub code: String,
    pub name: String,
    pub semesters: String,
    pub meshes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EliminarCarreraRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct AgregarBloqueRequest {
    pub career_code: String,
    #[serde(flatten)]
    pub bloque: BloquePlan,
}

#[derive(Debug, Deserialize)]
pub struct EditarBloqueRequest {
    pub career_code: String,
    #[serde(flatten)]
    pub edicion: EdicionBloque,
}

#[derive(Debug, Deserialize)]
pub struct EliminarBloqueRequest {
    pub career_code: String,
    pub block_index: usize,
}

fn persistir_o_error(store: &CarreraStore) -> Option<HttpResponse> {
    match store.guardar_en_disco() {
        Ok(()) => None,
        Err(e) => Some(
            HttpResponse::InternalServerError().json(json!({"success": false, "error": e})),
        ),
    }
}

/// GET /get_careers
/// Devuelve todas las carreras y el período académico activo.
pub async fn get_careers_handler(datos: web::Data<EstadoApp>) -> impl Responder {
    let store = datos.bloquear_store();
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": store.carreras,
        "period": store.periodo
    }))
}

/// POST /set_planning_period
/// Cambia el período activo (1 = semestres impares, 2 = pares).
pub async fn set_planning_period_handler(
    body: web::Json<PeriodoRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let mut store = datos.bloquear_store();
    match store.establecer_periodo(body.period) {
        Ok(periodo) => {
            if let Some(resp) = persistir_o_error(&store) {
                return resp;
            }
            HttpResponse::Ok().json(json!({"success": true, "period": periodo}))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// POST /save_career
/// Crea o actualiza una carrera; al actualizar se conserva su planificación.
pub async fn save_career_handler(
    body: web::Json<GuardarCarreraRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let req = body.into_inner();
    let mut store = datos.bloquear_store();
    match store.guardar_carrera(&req.code, &req.name, &req.semesters, req.meshes) {
        Ok(()) => {
            if let Some(resp) = persistir_o_error(&store) {
                return resp;
            }
            respuesta_exito(json!(store.carreras))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// POST /delete_career
/// Elimina una carrera y toda su planificación. Permanente.
pub async fn delete_career_handler(
    body: web::Json<EliminarCarreraRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let mut store = datos.bloquear_store();
    match store.eliminar_carrera(&body.code) {
        Ok(()) => {
            if let Some(resp) = persistir_o_error(&store) {
                return resp;
            }
            respuesta_exito(json!(store.carreras))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// POST /add_block
/// Agrega un bloque al plan de la carrera.
pub async fn add_block_handler(
    body: web::Json<AgregarBloqueRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let req = body.into_inner();
    let mut store = datos.bloquear_store();
    match store.agregar_bloque(&req.career_code, req.bloque) {
        Ok(()) => {
            if let Some(resp) = persistir_o_error(&store) {
                return resp;
            }
            respuesta_exito(json!(store.carreras))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// POST /edit_block
/// Edita día, módulo y tipo de un bloque existente; la identidad (NRC,
/// sección, materia) no cambia.
pub async fn edit_block_handler(
    body: web::Json<EditarBloqueRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let req = body.into_inner();
    let mut store = datos.bloquear_store();
    match store.editar_bloque(&req.career_code, &req.edicion) {
        Ok(()) => {
            if let Some(resp) = persistir_o_error(&store) {
                return resp;
            }
            respuesta_exito(json!(store.carreras))
        }
        Err(e) => respuesta_error(&e),
    }
}

/// POST /delete_planning_block
/// Elimina un bloque por índice posicional; los índices posteriores se
/// corren.
pub async fn delete_planning_block_handler(
    body: web::Json<EliminarBloqueRequest>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let mut store = datos.bloquear_store();
    match store.eliminar_bloque(&body.career_code, body.block_index) {
        Ok(()) => {
            if let Some(resp) = persistir_o_error(&store) {
                return resp;
            }
            respuesta_exito(json!(store.carreras))
        }
        Err(e) => respuesta_error(&e),
    }
}
