use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Allocation, Availability, Faculty, Section, Subject};
use crate::store::AdminData;

use super::generate_subject_allocations;

/// Entradas que recibe el servicio externo de generación de horarios.
///
/// Ejemplo (abreviado):
/// ```json
/// {
///   "target_branches": ["CSE", "ECE"],
///   "target_sections": {"CSE": ["A", "B"], "ECE": ["A"]},
///   "faculty_preferences": {"F001": {"Monday": ["09:00-10:00"]}},
///   "subject_allocations": [{"subject_code": "CS301", "faculty": "F001", "branch": "CSE", "section": "A", "periods_per_week": 3}],
///   "available_subjects": [...],
///   "available_faculty": [...],
///   "available_sections": [...]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationInputs {
    pub target_branches: Vec<String>,
    pub target_sections: BTreeMap<String, Vec<String>>,
    pub faculty_preferences: BTreeMap<String, Availability>,
    pub subject_allocations: Vec<Allocation>,
    #[serde(default)]
    pub available_subjects: Vec<Subject>,
    #[serde(default)]
    pub available_faculty: Vec<Faculty>,
    #[serde(default)]
    pub available_sections: Vec<Section>,
}

/// Cuerpo de `POST /timetable/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub config_id: Option<u64>,
    pub inputs: Option<GenerationInputs>,
}

/// Arma el payload de generación a partir de una instantánea de los datos de
/// referencia. Las asignaciones se recalculan en cada llamada.
pub fn build_generation_inputs(data: &AdminData) -> GenerationInputs {
    let mut target_branches: Vec<String> = Vec::new();
    let mut target_sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for s in &data.sections {
        if !target_branches.contains(&s.branch) {
            target_branches.push(s.branch.clone());
        }
        let labels = target_sections.entry(s.branch.clone()).or_default();
        if !labels.contains(&s.section) {
            labels.push(s.section.clone());
        }
    }

    // employee_id repetido: gana el último, igual que al armar un objeto JSON.
    let faculty_preferences = data
        .faculty
        .iter()
        .map(|f| (f.employee_id.clone(), f.availability.clone()))
        .collect();

    GenerationInputs {
        target_branches,
        target_sections,
        faculty_preferences,
        subject_allocations: generate_subject_allocations(&data.sections, &data.subjects, &data.faculty),
        available_subjects: data.subjects.clone(),
        available_faculty: data.faculty.clone(),
        available_sections: data.sections.clone(),
    }
}
