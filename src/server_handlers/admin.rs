use actix_web::{web, HttpResponse, Responder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::{admin_error_response, lock_admin};
use crate::admin::{AdminService, Entity};
use crate::models::{Faculty, Room, Section, Subject};
use crate::server::{AppState, SharedStore};
use crate::store::Collection;

fn unknown_collection(name: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": format!("unknown collection '{}'", name),
        "collections": Collection::ALL.iter().map(|c| c.name()).collect::<Vec<_>>()
    }))
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, HttpResponse> {
    serde_json::from_value::<T>(body)
        .map_err(|e| HttpResponse::BadRequest().json(json!({"error": format!("invalid body: {}", e)})))
}

fn list_as<T: Entity + Serialize>(admin: &AdminService<SharedStore>) -> HttpResponse {
    HttpResponse::Ok().json(admin.list::<T>())
}

fn replace_as<T: Entity + Serialize + DeserializeOwned>(admin: &mut AdminService<SharedStore>, body: Value) -> HttpResponse {
    let items: Vec<T> = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match admin.replace(items) {
        Ok(()) => HttpResponse::Ok().json(admin.list::<T>()),
        Err(e) => admin_error_response(&e),
    }
}

fn add_as<T: Entity + Serialize + DeserializeOwned>(admin: &mut AdminService<SharedStore>, body: Value) -> HttpResponse {
    let item: T = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match admin.add(item) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => admin_error_response(&e),
    }
}

fn update_as<T: Entity + Serialize + DeserializeOwned>(admin: &mut AdminService<SharedStore>, id: u64, body: Value) -> HttpResponse {
    let item: T = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match admin.update(id, item) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => admin_error_response(&e),
    }
}

fn delete_as<T: Entity + Serialize>(admin: &mut AdminService<SharedStore>, id: u64) -> HttpResponse {
    match admin.delete::<T>(id) {
        Ok(removed) => HttpResponse::Ok().json(json!({"status": "ok", "deleted": removed})),
        Err(e) => admin_error_response(&e),
    }
}

/// GET /admin/{collection}
pub async fn list_collection(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    match Collection::from_name(&name) {
        Some(Collection::Subjects) => list_as::<Subject>(&admin),
        Some(Collection::Faculty) => list_as::<Faculty>(&admin),
        Some(Collection::Sections) => list_as::<Section>(&admin),
        Some(Collection::Rooms) => list_as::<Room>(&admin),
        None => unknown_collection(&name),
    }
}

/// PUT /admin/{collection}
/// Sustituye la colección completa por la lista recibida.
pub async fn replace_collection(state: web::Data<AppState>, path: web::Path<String>, body: web::Json<Value>) -> impl Responder {
    let name = path.into_inner();
    let body = body.into_inner();
    let mut admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    match Collection::from_name(&name) {
        Some(Collection::Subjects) => replace_as::<Subject>(&mut admin, body),
        Some(Collection::Faculty) => replace_as::<Faculty>(&mut admin, body),
        Some(Collection::Sections) => replace_as::<Section>(&mut admin, body),
        Some(Collection::Rooms) => replace_as::<Room>(&mut admin, body),
        None => unknown_collection(&name),
    }
}

/// POST /admin/{collection}
pub async fn add_entity(state: web::Data<AppState>, path: web::Path<String>, body: web::Json<Value>) -> impl Responder {
    let name = path.into_inner();
    let body = body.into_inner();
    let mut admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    match Collection::from_name(&name) {
        Some(Collection::Subjects) => add_as::<Subject>(&mut admin, body),
        Some(Collection::Faculty) => add_as::<Faculty>(&mut admin, body),
        Some(Collection::Sections) => add_as::<Section>(&mut admin, body),
        Some(Collection::Rooms) => add_as::<Room>(&mut admin, body),
        None => unknown_collection(&name),
    }
}

/// DELETE /admin/{collection}
/// Devuelve la colección a los datos semilla.
pub async fn reset_collection(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let collection = match Collection::from_name(&name) {
        Some(c) => c,
        None => return unknown_collection(&name),
    };
    let mut admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    match admin.reset(collection) {
        Ok(()) => {
            tracing::info!(collection = collection.name(), "collection reset to seed data");
            HttpResponse::Ok().json(json!({"status": "ok", "collection": collection.name()}))
        }
        Err(e) => admin_error_response(&e),
    }
}

/// PUT /admin/{collection}/{id}
pub async fn update_entity(state: web::Data<AppState>, path: web::Path<(String, u64)>, body: web::Json<Value>) -> impl Responder {
    let (name, id) = path.into_inner();
    let body = body.into_inner();
    let mut admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    match Collection::from_name(&name) {
        Some(Collection::Subjects) => update_as::<Subject>(&mut admin, id, body),
        Some(Collection::Faculty) => update_as::<Faculty>(&mut admin, id, body),
        Some(Collection::Sections) => update_as::<Section>(&mut admin, id, body),
        Some(Collection::Rooms) => update_as::<Room>(&mut admin, id, body),
        None => unknown_collection(&name),
    }
}

/// DELETE /admin/{collection}/{id}
pub async fn delete_entity(state: web::Data<AppState>, path: web::Path<(String, u64)>) -> impl Responder {
    let (name, id) = path.into_inner();
    let mut admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    match Collection::from_name(&name) {
        Some(Collection::Subjects) => delete_as::<Subject>(&mut admin, id),
        Some(Collection::Faculty) => delete_as::<Faculty>(&mut admin, id),
        Some(Collection::Sections) => delete_as::<Section>(&mut admin, id),
        Some(Collection::Rooms) => delete_as::<Room>(&mut admin, id),
        None => unknown_collection(&name),
    }
}

/// GET /allocations
/// Asignaciones calculadas con los datos actuales (no se guardan).
pub async fn allocations_handler(state: web::Data<AppState>) -> impl Responder {
    let admin = match lock_admin(&state) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let allocations = admin.allocations();
    HttpResponse::Ok().json(json!({"count": allocations.len(), "allocations": allocations}))
}
