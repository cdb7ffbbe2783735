use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::allocation::build_generation_inputs;
use crate::store::AdminData;

pub async fn help_handler() -> impl Responder {
    // Ejemplo armado con los datos semilla
    let example = build_generation_inputs(&AdminData::default());

    let help = json!({
        "description": "API de administración de horarios. Las colecciones (subjects, faculty, sections, rooms) se editan bajo /admin/{collection}; /allocations muestra las asignaciones calculadas y POST /timetable/generate crea un borrador.",
        "routes": {
            "GET /admin/{collection}": "lista la colección",
            "PUT /admin/{collection}": "reemplaza la colección completa",
            "POST /admin/{collection}": "agrega un elemento (id asignado por el servidor)",
            "DELETE /admin/{collection}": "vuelve la colección a los datos semilla",
            "PUT /admin/{collection}/{id}": "actualiza un elemento",
            "DELETE /admin/{collection}/{id}": "elimina un elemento",
            "GET /allocations": "asignaciones asignatura/docente/sección",
            "GET /timetable/configs": "configuraciones de horario",
            "GET /timetable/request": "payload de generación con los datos actuales",
            "POST /timetable/generate": "genera un borrador: {\"config_id\": 1, \"inputs\": opcional}",
            "GET /timetable/drafts": "historial de borradores",
            "GET /timetable/drafts/{id}": "detalle de un borrador",
            "PUT /timetable/drafts/{id}": "actualiza status y/o draft_content"
        },
        "generate_example": {"config_id": 1, "inputs": example},
        "note": "Las asignaciones eligen el primer docente del mismo departamento (o 'General'); no se revisa disponibilidad ni carga."
    });

    HttpResponse::Ok().json(help)
}
