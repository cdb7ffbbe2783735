// Configuraciones de horario, borradores generados y su historial.
pub mod demo;
pub mod drafts;

pub use demo::generate_demo_draft;
pub use drafts::{DraftHistory, DraftUpdate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Weekday;

/// Etiqueta con la que se muestran las franjas de descanso.
pub const BREAK_LABEL: &str = "Lunch Break";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Lecture,
    Break,
    LabLectureCombined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
}

impl SlotDefinition {
    /// "09:00 - 10:00", o "Lunch Break" para los descansos.
    pub fn label(&self) -> String {
        match self.slot_type {
            SlotType::Break => BREAK_LABEL.to_string(),
            _ => format!("{} - {}", self.start, self.end),
        }
    }

    pub fn is_teaching(&self) -> bool {
        self.slot_type != SlotType::Break
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableConfig {
    pub id: u64,
    pub config_name: String,
    pub academic_year: String,
    pub semester: String,
    pub branches: Vec<String>,
    pub sections_per_branch: BTreeMap<String, Vec<String>>,
    pub slots_per_day: Vec<SlotDefinition>,
    pub created_at: String,
}

pub fn default_configurations() -> Vec<TimetableConfig> {
    let slot = |start: &str, end: &str, slot_type: SlotType| SlotDefinition {
        start: start.to_string(),
        end: end.to_string(),
        slot_type,
    };
    let mut sections_per_branch = BTreeMap::new();
    sections_per_branch.insert("CSE".to_string(), vec!["A".to_string(), "B".to_string()]);
    sections_per_branch.insert("ECE".to_string(), vec!["A".to_string()]);

    vec![TimetableConfig {
        id: 1,
        config_name: "Fall 2025 Semester Config".to_string(),
        academic_year: "2025-2026".to_string(),
        semester: "Fall".to_string(),
        branches: vec!["CSE".to_string(), "ECE".to_string()],
        sections_per_branch,
        slots_per_day: vec![
            slot("09:00", "10:00", SlotType::Lecture),
            slot("10:00", "11:00", SlotType::Lecture),
            slot("11:00", "12:00", SlotType::Lecture),
            slot("12:00", "13:00", SlotType::Break),
            slot("13:00", "14:00", SlotType::Lecture),
            slot("14:00", "15:00", SlotType::Lecture),
            slot("15:00", "16:00", SlotType::LabLectureCombined),
        ],
        created_at: "2025-01-28T00:00:00".to_string(),
    }]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Draft,
    Validated,
    Approved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    Choice,
    Conflict,
    Info,
}

/// Explicación de una decisión tomada al generar el borrador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XaiLog {
    pub log_type: LogType,
    pub rule_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_details: Option<String>,
    pub explanation: String,
    pub priority: u32,
}

/// día -> franja -> contenido de la celda
pub type WeekGrid = BTreeMap<Weekday, BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftMetadata {
    pub configuration: u64,
    pub total_sections: usize,
    pub total_faculty: usize,
    #[serde(default)]
    pub total_allocations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftContent {
    pub section_timetables: BTreeMap<String, WeekGrid>,
    pub faculty_timetables: BTreeMap<String, WeekGrid>,
    #[serde(default)]
    pub metadata: DraftMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: u64,
    pub config_id: u64,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
    pub last_validated_at: Option<DateTime<Utc>>,
    pub draft_content: DraftContent,
    pub xai_logs: Vec<XaiLog>,
}
