use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use std::sync::Mutex;

use crate::admin::{AdminError, AdminService};
use crate::config::AppConfig;
use crate::server_handlers as h;
use crate::store::KeyValueStore;
use crate::timetable::{default_configurations, DraftHistory, TimetableConfig};

pub type SharedStore = Box<dyn KeyValueStore + Send>;

/// Estado compartido por todos los workers de actix.
pub struct AppState {
    pub admin: Mutex<AdminService<SharedStore>>,
    pub drafts: DraftHistory,
    pub configs: Vec<TimetableConfig>,
    pub demo_mode: bool,
}

impl AppState {
    pub fn new(store: SharedStore, demo_mode: bool) -> Result<Self, AdminError> {
        Ok(AppState {
            admin: Mutex::new(AdminService::open(store)?),
            drafts: DraftHistory::new(),
            configs: default_configurations(),
            demo_mode,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AdminError> {
        let store = config.store.open()?;
        Self::new(store, config.demo_mode)
    }
}

/// Cuerpos JSON inválidos responden 400 con `{"error": ...}` en vez del texto plano de actix.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = json!({"error": format!("invalid body: {}", err)});
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Registra todas las rutas; se usa tanto en `run_server` como en los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/help", web::get().to(h::help_handler))
        .route("/allocations", web::get().to(h::allocations_handler))
        .route("/admin/{collection}", web::get().to(h::list_collection))
        .route("/admin/{collection}", web::put().to(h::replace_collection))
        .route("/admin/{collection}", web::post().to(h::add_entity))
        .route("/admin/{collection}", web::delete().to(h::reset_collection))
        .route("/admin/{collection}/{id}", web::put().to(h::update_entity))
        .route("/admin/{collection}/{id}", web::delete().to(h::delete_entity))
        .route("/timetable/configs", web::get().to(h::configs_handler))
        .route("/timetable/request", web::get().to(h::generation_request_handler))
        .route("/timetable/generate", web::post().to(h::generate_handler))
        .route("/timetable/drafts", web::get().to(h::drafts_list_handler))
        .route("/timetable/drafts/{id}", web::get().to(h::draft_details_handler))
        .route("/timetable/drafts/{id}", web::put().to(h::draft_update_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let state = AppState::from_config(&config).map_err(std::io::Error::other)?;
    let data = web::Data::new(state);

    tracing::info!(bind = %config.bind_addr, store = ?config.store, demo_mode = config.demo_mode, "starting admin server");

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
