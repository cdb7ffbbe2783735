use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use super::lock_admin;
use crate::allocation::GenerationRequest;
use crate::server::AppState;
use crate::timetable::{generate_demo_draft, DraftUpdate};

/// GET /timetable/configs
pub async fn configs_handler(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.configs)
}

/// GET /timetable/request
/// Payload que se enviaría al servicio de generación con los datos actuales.
pub async fn generation_request_handler(state: web::Data<AppState>) -> impl Responder {
    let admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    HttpResponse::Ok().json(admin.generation_inputs())
}

/// POST /timetable/generate
/// Espera `{ "config_id": 1, "inputs": {...} }`. Si `inputs` no viene, se arma
/// con los datos de referencia actuales.
pub async fn generate_handler(state: web::Data<AppState>, body: web::Json<GenerationRequest>) -> impl Responder {
    let req = body.into_inner();

    let config_id = match req.config_id {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(json!({"error": "Missing config_id"})),
    };
    let config = match state.configs.iter().find(|c| c.id == config_id) {
        Some(c) => c,
        None => return HttpResponse::NotFound().json(json!({"error": "Timetable configuration not found"})),
    };

    let inputs = match req.inputs {
        Some(i) => i,
        None => match lock_admin(&state) {
            Ok(admin) => admin.generation_inputs(),
            Err(resp) => return resp,
        },
    };

    if !state.demo_mode {
        tracing::warn!(config_id, "generation requested but demo mode is off and no generation service is wired");
        return HttpResponse::ServiceUnavailable().json(json!({
            "error": "timetable generation service is not available; demo mode is disabled",
            "request": {"config_id": config_id, "inputs": inputs}
        }));
    }

    let start = std::time::Instant::now();
    let draft = state.drafts.push_with(|id| generate_demo_draft(id, config, &inputs, Utc::now()));
    tracing::info!(
        draft_id = draft.id,
        config_id,
        allocations = inputs.subject_allocations.len(),
        logs = draft.xai_logs.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "demo draft generated"
    );

    HttpResponse::Created().json(json!({
        "message": "Timetable draft generated successfully",
        "draft_id": draft.id,
        "draft_content": draft.draft_content,
        "xai_logs": draft.xai_logs
    }))
}

/// GET /timetable/drafts
/// Resumen de los borradores, el más reciente primero.
pub async fn drafts_list_handler(state: web::Data<AppState>) -> impl Responder {
    let out: Vec<serde_json::Value> = state
        .drafts
        .list()
        .into_iter()
        .map(|d| {
            let config_name = state
                .configs
                .iter()
                .find(|c| c.id == d.config_id)
                .map(|c| c.config_name.clone());
            json!({
                "id": d.id,
                "config_id": d.config_id,
                "generation_date": d.created_at,
                "status": d.status,
                "config_name": config_name
            })
        })
        .collect();
    HttpResponse::Ok().json(out)
}

/// GET /timetable/drafts/{id}
pub async fn draft_details_handler(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();
    match state.drafts.get(id) {
        Some(d) => HttpResponse::Ok().json(d),
        None => HttpResponse::NotFound().json(json!({"error": "Timetable draft not found"})),
    }
}

/// PUT /timetable/drafts/{id}
/// Acepta `status` y/o `draft_content`.
pub async fn draft_update_handler(state: web::Data<AppState>, path: web::Path<u64>, body: web::Json<DraftUpdate>) -> impl Responder {
    let id = path.into_inner();
    match state.drafts.update(id, body.into_inner()) {
        Some(d) => {
            tracing::info!(draft_id = d.id, status = ?d.status, "draft updated");
            HttpResponse::Ok().json(json!({"message": "Timetable draft updated successfully", "draft_id": d.id}))
        }
        None => HttpResponse::NotFound().json(json!({"error": "Timetable draft not found"})),
    }
}
