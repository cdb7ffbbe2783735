//! Generador de borradores para el modo demo.
//!
//! Sustituye al servicio externo de generación cuando éste no está disponible.
//! No resuelve restricciones: reparte los periodos de cada asignación en orden
//! round-robin sobre las franjas lectivas de lunes a viernes y deja constancia
//! (en `xai_logs`) de los choques de docentes y de los periodos que no caben.
//! El resultado es determinista para las mismas entradas.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::{Draft, DraftContent, DraftMetadata, DraftStatus, LogType, TimetableConfig, WeekGrid, XaiLog};
use crate::allocation::GenerationInputs;
use crate::models::{Allocation, Weekday};

pub const FREE_CELL: &str = "Free";
pub const LUNCH_CELL: &str = "Lunch";

/// (rama, sección) a programar: las secciones disponibles o, si no vienen,
/// las de `target_sections`. Cada par aparece una sola vez aunque haya varias
/// cohortes (años, semestres) con la misma etiqueta.
fn sections_to_schedule(inputs: &GenerationInputs) -> Vec<(String, String)> {
    let pairs: Vec<(String, String)> = if !inputs.available_sections.is_empty() {
        inputs
            .available_sections
            .iter()
            .map(|s| (s.branch.clone(), s.section.clone()))
            .collect()
    } else {
        inputs
            .target_branches
            .iter()
            .filter_map(|b| inputs.target_sections.get(b).map(|labels| (b, labels)))
            .flat_map(|(b, labels)| labels.iter().map(move |l| (b.clone(), l.clone())))
            .collect()
    };

    let mut out: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        if !out.contains(&pair) {
            out.push(pair);
        }
    }
    out
}

fn empty_grid(config: &TimetableConfig) -> WeekGrid {
    let mut grid = WeekGrid::new();
    for day in Weekday::WORKING_DAYS {
        let row = grid.entry(day).or_default();
        for slot in &config.slots_per_day {
            let cell = if slot.is_teaching() { FREE_CELL } else { LUNCH_CELL };
            row.insert(slot.label(), cell.to_string());
        }
    }
    grid
}

pub fn generate_demo_draft(id: u64, config: &TimetableConfig, inputs: &GenerationInputs, created_at: DateTime<Utc>) -> Draft {
    let teaching_slots: Vec<String> = config
        .slots_per_day
        .iter()
        .filter(|s| s.is_teaching())
        .map(|s| s.label())
        .collect();

    let sections = sections_to_schedule(inputs);
    let mut section_timetables: BTreeMap<String, WeekGrid> = BTreeMap::new();
    let mut faculty_timetables: BTreeMap<String, WeekGrid> = BTreeMap::new();
    let mut xai_logs: Vec<XaiLog> = Vec::new();

    for (branch, section) in &sections {
        let key = format!("{}-{}", branch, section);
        let mut grid = empty_grid(config);

        // cohortes con la misma etiqueta repiten asignaciones idénticas
        let mut allocations: Vec<&Allocation> = Vec::new();
        for a in inputs.subject_allocations.iter().filter(|a| &a.branch == branch && &a.section == section) {
            if !allocations.contains(&a) {
                allocations.push(a);
            }
        }
        if allocations.is_empty() {
            xai_logs.push(XaiLog {
                log_type: LogType::Info,
                rule_name: "No_Allocations".to_string(),
                slot_details: None,
                explanation: format!("Section {} has no subject allocations; every slot stays free", key),
                priority: 3,
            });
            section_timetables.insert(key, grid);
            continue;
        }

        let mut remaining: Vec<u32> = allocations.iter().map(|a| a.periods_per_week).collect();
        let mut cursor = 0usize;

        'days: for day in Weekday::WORKING_DAYS {
            for slot in &teaching_slots {
                if remaining.iter().all(|r| *r == 0) {
                    break 'days;
                }
                while remaining[cursor % allocations.len()] == 0 {
                    cursor += 1;
                }
                let idx = cursor % allocations.len();
                remaining[idx] -= 1;
                cursor += 1;

                let alloc = allocations[idx];
                if let Some(row) = grid.get_mut(&day) {
                    row.insert(slot.clone(), alloc.subject_code.clone());
                }

                let faculty_row = faculty_timetables
                    .entry(alloc.faculty.clone())
                    .or_insert_with(|| empty_grid(config))
                    .entry(day)
                    .or_default();
                let busy = faculty_row.get(slot).map(|c| c != FREE_CELL && c != LUNCH_CELL).unwrap_or(false);
                if busy {
                    xai_logs.push(XaiLog {
                        log_type: LogType::Conflict,
                        rule_name: "Faculty_Double_Booked".to_string(),
                        slot_details: Some(format!("{} {}", day, slot)),
                        explanation: format!(
                            "{} is already teaching {} when {} for {} was placed",
                            alloc.faculty, faculty_row[slot], alloc.subject_code, key
                        ),
                        priority: 2,
                    });
                } else {
                    faculty_row.insert(slot.clone(), format!("{} ({})", alloc.subject_code, key));
                }
            }
        }

        for (alloc, left) in allocations.iter().zip(remaining.iter()) {
            if *left > 0 {
                xai_logs.push(XaiLog {
                    log_type: LogType::Conflict,
                    rule_name: "Unplaced_Periods".to_string(),
                    slot_details: None,
                    explanation: format!(
                        "{} of {} periods of {} for {} did not fit in the week",
                        left, alloc.periods_per_week, alloc.subject_code, key
                    ),
                    priority: 2,
                });
            }
        }

        section_timetables.insert(key, grid);
    }

    xai_logs.push(XaiLog {
        log_type: LogType::Choice,
        rule_name: "Timetable_Generated".to_string(),
        slot_details: None,
        explanation: "Timetable generated successfully based on admin data".to_string(),
        priority: 1,
    });

    Draft {
        id,
        config_id: config.id,
        status: DraftStatus::Draft,
        created_at,
        last_validated_at: None,
        draft_content: DraftContent {
            section_timetables,
            faculty_timetables,
            metadata: DraftMetadata {
                configuration: config.id,
                total_sections: sections.len(),
                total_faculty: inputs.available_faculty.len(),
                total_allocations: inputs.subject_allocations.len(),
            },
        },
        xai_logs,
    }
}
