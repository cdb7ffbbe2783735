pub mod admin;
pub mod timetable;
pub mod docs;

pub use admin::*;
pub use timetable::*;
pub use docs::*;

use actix_web::HttpResponse;
use serde_json::json;
use std::sync::MutexGuard;

use crate::admin::{AdminError, AdminService};
use crate::server::{AppState, SharedStore};

/// Traduce un `AdminError` a la respuesta HTTP correspondiente.
pub(crate) fn admin_error_response(e: &AdminError) -> HttpResponse {
    let body = json!({"error": e.to_string()});
    match e {
        AdminError::Validation(_) => HttpResponse::BadRequest().json(body),
        AdminError::NotFound { .. } => HttpResponse::NotFound().json(body),
        AdminError::Conflict(_) => HttpResponse::Conflict().json(body),
        AdminError::Store(err) => {
            tracing::error!(error = %err, "store failure");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

pub(crate) fn lock_admin(state: &AppState) -> Result<MutexGuard<'_, AdminService<SharedStore>>, HttpResponse> {
    state.admin.lock().map_err(|_| {
        tracing::error!("admin state mutex poisoned");
        HttpResponse::InternalServerError().json(json!({"error": "admin state unavailable"}))
    })
}
