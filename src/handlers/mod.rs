pub mod bloques;
pub mod carreras;
pub mod docs;

pub use bloques::*;
pub use carreras::*;
pub use docs::*;

use actix_web::HttpResponse;
use serde_json::json;

/// Sobre de respuesta uniforme: éxito con payload.
pub(crate) fn respuesta_exito(data: serde_json::Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({"success": true, "data": data}))
}

/// Sobre de respuesta uniforme: fallo con mensaje para el usuario.
pub(crate) fn respuesta_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"success": false, "error": msg}))
}
