// Estructuras de datos principales: datos de referencia editados por el operador
// (asignaturas, docentes, secciones, salas) y las asignaciones derivadas.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Errores al construir entidades desde su forma plana (JSON).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("subject {code}: lab subjects need a positive lab_periods")]
    MissingLabPeriods { code: String },

    #[error("subject {code}: lecture subjects need a positive lecture_periods")]
    MissingLecturePeriods { code: String },

    #[error("subject {code}: required_frequency_per_week must be at least 1")]
    InvalidFrequency { code: String },
}

/// Días de la semana tal como los usa la disponibilidad docente ("Monday", ...).
/// El orden de declaración es el orden del calendario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Días lectivos usados por los borradores de horario.
    pub const WORKING_DAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Franjas ("09:00-10:00") en las que un docente puede dictar clase, por día.
pub type Availability = BTreeMap<Weekday, BTreeSet<String>>;

/// Tipo de asignatura: teórica o de laboratorio, cada una con su número de periodos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Lecture { lecture_periods: u32 },
    Lab { lab_periods: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubjectRecord", into = "SubjectRecord")]
pub struct Subject {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub department: String,
    pub credits: u32,
    pub required_frequency_per_week: u32,
    pub kind: SubjectKind,
}

impl Subject {
    pub fn is_lab(&self) -> bool {
        matches!(self.kind, SubjectKind::Lab { .. })
    }
}

/// Forma plana en la que viajan y se persisten las asignaturas.
/// Sólo uno de `lecture_periods` / `lab_periods` es significativo según `is_lab`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SubjectRecord {
    id: u64,
    name: String,
    code: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    is_lab: bool,
    #[serde(default)]
    credits: u32,
    required_frequency_per_week: u32,
    #[serde(default)]
    lecture_periods: Option<u32>,
    #[serde(default)]
    lab_periods: Option<u32>,
}

impl TryFrom<SubjectRecord> for Subject {
    type Error = ModelError;

    fn try_from(r: SubjectRecord) -> Result<Self, Self::Error> {
        if r.required_frequency_per_week < 1 {
            return Err(ModelError::InvalidFrequency { code: r.code });
        }
        let kind = if r.is_lab {
            match r.lab_periods {
                Some(n) if n > 0 => SubjectKind::Lab { lab_periods: n },
                _ => return Err(ModelError::MissingLabPeriods { code: r.code }),
            }
        } else {
            match r.lecture_periods {
                Some(n) if n > 0 => SubjectKind::Lecture { lecture_periods: n },
                _ => return Err(ModelError::MissingLecturePeriods { code: r.code }),
            }
        };
        Ok(Subject {
            id: r.id,
            name: r.name,
            code: r.code,
            department: r.department,
            credits: r.credits,
            required_frequency_per_week: r.required_frequency_per_week,
            kind,
        })
    }
}

impl From<Subject> for SubjectRecord {
    fn from(s: Subject) -> Self {
        let (is_lab, lecture_periods, lab_periods) = match s.kind {
            SubjectKind::Lecture { lecture_periods } => (false, Some(lecture_periods), None),
            SubjectKind::Lab { lab_periods } => (true, None, Some(lab_periods)),
        };
        SubjectRecord {
            id: s.id,
            name: s.name,
            code: s.code,
            department: s.department,
            is_lab,
            credits: s.credits,
            required_frequency_per_week: s.required_frequency_per_week,
            lecture_periods,
            lab_periods,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: u64,
    pub name: String,
    pub employee_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub max_weekly_workload: u32,
    #[serde(default)]
    pub max_daily_periods: u32,
    #[serde(default)]
    pub availability: Availability,
}

/// Cohorte de estudiantes. Para asignación se identifica por (branch, section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: u64,
    #[serde(default)]
    pub branch: String,
    pub section: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub student_count: u32,
}

impl Section {
    /// Etiqueta "CSE-A" usada como clave de los horarios por sección.
    pub fn label(&self) -> String {
        format!("{}-{}", self.branch, self.section)
    }
}

/// Sala física. Informativa: el resolvedor no la consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub is_lab: bool,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// Asignación propuesta (asignatura, docente, sección) con su carga semanal.
/// `faculty` es el `employee_id` del docente elegido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub subject_code: String,
    pub faculty: String,
    pub branch: String,
    pub section: String,
    pub periods_per_week: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lab_subject_drops_lecture_periods() {
        let s: Subject = serde_json::from_value(json!({
            "id": 3, "name": "Data Structures Lab", "code": "CSL301", "department": "CSE",
            "is_lab": true, "credits": 2, "required_frequency_per_week": 1,
            "lecture_periods": 1, "lab_periods": 2
        }))
        .unwrap();
        assert_eq!(s.kind, SubjectKind::Lab { lab_periods: 2 });

        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["is_lab"], json!(true));
        assert_eq!(v["lab_periods"], json!(2));
        assert!(v["lecture_periods"].is_null());
    }

    #[test]
    fn rejects_lab_without_periods() {
        let r = serde_json::from_value::<Subject>(json!({
            "id": 9, "name": "Lab", "code": "X1", "department": "CSE",
            "is_lab": true, "required_frequency_per_week": 1, "lab_periods": 0
        }));
        assert!(r.is_err());
    }

    #[test]
    fn rejects_zero_frequency() {
        let r = serde_json::from_value::<Subject>(json!({
            "id": 9, "name": "Theory", "code": "X2", "department": "CSE",
            "is_lab": false, "required_frequency_per_week": 0, "lecture_periods": 1
        }));
        assert!(r.is_err());
    }

    #[test]
    fn weekday_keys_serialize_by_name() {
        let mut availability = Availability::new();
        availability.entry(Weekday::Tuesday).or_default().insert("09:00-10:00".to_string());
        let v = serde_json::to_value(&availability).unwrap();
        assert_eq!(v, json!({"Tuesday": ["09:00-10:00"]}));
    }
}
