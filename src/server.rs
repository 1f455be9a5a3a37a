use std::sync::{Mutex, MutexGuard, PoisonError};

use actix_web::{App, HttpServer, web};

use crate::algorithm::NombresBloques;
use crate::handlers::{
    add_block_handler, delete_career_handler, delete_planning_block_handler, edit_block_handler,
    get_careers_handler, groups_build_handler, groups_save_name_handler, groups_upload_handler,
    help_handler, save_career_handler, set_planning_period_handler,
};
use crate::store::CarreraStore;

/// Estado compartido entre workers: el almacén de carreras y los nombres
/// personalizados de bloques. Un único usuario interactivo; el Mutex existe
/// sólo porque actix reparte las peticiones entre workers.
pub struct EstadoApp {
    store: Mutex<CarreraStore>,
    nombres: Mutex<NombresBloques>,
}

impl EstadoApp {
    pub fn nuevo(store: CarreraStore) -> Self {
        EstadoApp {
            store: Mutex::new(store),
            nombres: Mutex::new(NombresBloques::new()),
        }
    }

    pub fn bloquear_store(&self) -> MutexGuard<'_, CarreraStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn bloquear_nombres(&self) -> MutexGuard<'_, NombresBloques> {
        self.nombres.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let estado = web::Data::new(EstadoApp::nuevo(CarreraStore::cargar()));

    HttpServer::new(move || {
        App::new()
            .app_data(estado.clone())
            .route("/get_careers", web::get().to(get_careers_handler))
            .route("/set_planning_period", web::post().to(set_planning_period_handler))
            .route("/save_career", web::post().to(save_career_handler))
            .route("/delete_career", web::post().to(delete_career_handler))
            .route("/add_block", web::post().to(add_block_handler))
            .route("/edit_block", web::post().to(edit_block_handler))
            .route("/delete_planning_block", web::post().to(delete_planning_block_handler))
            .route("/groups/upload", web::post().to(groups_upload_handler))
            .route("/groups/build", web::post().to(groups_build_handler))
            .route("/groups/save_name", web::post().to(groups_save_name_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
