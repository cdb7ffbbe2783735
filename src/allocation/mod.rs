// Resolución de asignaciones asignatura/docente/sección.
pub mod request;

pub use request::{build_generation_inputs, GenerationInputs, GenerationRequest};

use crate::models::{Allocation, Faculty, Section, Subject};

/// Departamento comodín: sus asignaturas aplican a todas las ramas y sus
/// docentes pueden dictar asignaturas de cualquier departamento.
pub const GENERAL_DEPARTMENT: &str = "General";

/// True si `department` sirve para `target`. Un departamento vacío nunca coincide.
fn department_matches(department: &str, target: &str) -> bool {
    !department.is_empty() && (department == target || department == GENERAL_DEPARTMENT)
}

/// Calcula una asignación por cada par (sección, asignatura) que tenga al menos
/// un docente compatible.
///
/// - Asignaturas candidatas de una sección: las de su rama o de "General".
/// - Docentes candidatos de una asignatura: los de su departamento o de "General".
/// - Se elige siempre el primer docente candidato en el orden de entrada; no se
///   revisa disponibilidad ni carga, y el mismo docente puede repetirse sin límite.
/// - Los pares sin docente se omiten en silencio.
///
/// El orden de salida sigue el orden de `sections` y, dentro de cada sección,
/// el de `subjects`.
pub fn generate_subject_allocations(sections: &[Section], subjects: &[Subject], faculty: &[Faculty]) -> Vec<Allocation> {
    let mut allocations = Vec::new();

    for section in sections {
        for subject in subjects.iter().filter(|s| department_matches(&s.department, &section.branch)) {
            let assigned = faculty.iter().find(|f| department_matches(&f.department, &subject.department));
            if let Some(f) = assigned {
                allocations.push(Allocation {
                    subject_code: subject.code.clone(),
                    faculty: f.employee_id.clone(),
                    branch: section.branch.clone(),
                    section: section.section.clone(),
                    periods_per_week: subject.required_frequency_per_week,
                });
            }
        }
    }

    allocations
}

#[cfg(test)]
mod tests {
    use super::department_matches;

    #[test]
    fn empty_department_never_matches() {
        assert!(!department_matches("", ""));
        assert!(!department_matches("", "CSE"));
        assert!(department_matches("General", ""));
        assert!(department_matches("CSE", "CSE"));
        assert!(!department_matches("ECE", "CSE"));
    }
}
