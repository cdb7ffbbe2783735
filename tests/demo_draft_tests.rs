use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;
use timetable_admin::allocation::{build_generation_inputs, GenerationInputs};
use timetable_admin::models::{Allocation, Weekday};
use timetable_admin::store::AdminData;
use timetable_admin::timetable::demo::{FREE_CELL, LUNCH_CELL};
use timetable_admin::timetable::{
    default_configurations, generate_demo_draft, DraftHistory, DraftStatus, DraftUpdate, LogType, TimetableConfig,
};

fn config() -> TimetableConfig {
    default_configurations().remove(0)
}

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 28, 10, 0, 0).unwrap()
}

#[test]
fn test_seed_draft_layout() {
    let inputs = build_generation_inputs(&AdminData::default());
    let draft = generate_demo_draft(1, &config(), &inputs, fixed_time());

    assert_eq!(draft.status, DraftStatus::Draft);
    assert_eq!(draft.config_id, 1);
    assert!(draft.last_validated_at.is_none());

    let content = &draft.draft_content;
    let keys: Vec<&String> = content.section_timetables.keys().collect();
    assert_eq!(keys, vec!["CSE-A", "CSE-B", "ECE-A"]);
    assert_eq!(content.metadata.total_sections, 3);
    assert_eq!(content.metadata.total_faculty, 3);
    assert_eq!(content.metadata.total_allocations, 8);

    let cse_a = &content.section_timetables["CSE-A"];
    assert_eq!(cse_a.len(), 5);
    let monday = &cse_a[&Weekday::Monday];
    assert_eq!(monday["09:00 - 10:00"], "CS301");
    assert_eq!(monday["10:00 - 11:00"], "CS302");
    assert_eq!(monday["11:00 - 12:00"], "CSL301");
    assert_eq!(monday["Lunch Break"], LUNCH_CELL);
    assert_eq!(monday["13:00 - 14:00"], "CS301");
    assert_eq!(monday["14:00 - 15:00"], "CS302");
    assert_eq!(monday["15:00 - 16:00"], "CS301");
    assert!(cse_a[&Weekday::Tuesday].values().all(|c| c == FREE_CELL || c == LUNCH_CELL));

    let f002 = &content.faculty_timetables["F002"];
    assert_eq!(f002[&Weekday::Monday]["09:00 - 10:00"], "EC301 (ECE-A)");
    assert_eq!(f002[&Weekday::Monday]["10:00 - 11:00"], "ECL301 (ECE-A)");
}

#[test]
fn test_seed_draft_logs_double_booking() {
    let inputs = build_generation_inputs(&AdminData::default());
    let draft = generate_demo_draft(1, &config(), &inputs, fixed_time());

    // F001 dicta en CSE-A y CSE-B a la misma hora los 6 bloques del lunes
    let clashes: Vec<_> = draft.xai_logs.iter().filter(|l| l.rule_name == "Faculty_Double_Booked").collect();
    assert_eq!(clashes.len(), 6);
    assert!(clashes.iter().all(|l| l.log_type == LogType::Conflict));
    assert_eq!(clashes[0].slot_details.as_deref(), Some("Monday 09:00 - 10:00"));

    let last = draft.xai_logs.last().expect("Debe haber logs");
    assert_eq!(last.log_type, LogType::Choice);
    assert_eq!(last.rule_name, "Timetable_Generated");

    // la primera reserva gana en la grilla del docente
    let f001 = &draft.draft_content.faculty_timetables["F001"];
    assert_eq!(f001[&Weekday::Monday]["09:00 - 10:00"], "CS301 (CSE-A)");
}

#[test]
fn test_unplaced_periods_are_reported() {
    let inputs = GenerationInputs {
        target_branches: vec!["CSE".to_string()],
        target_sections: BTreeMap::from([("CSE".to_string(), vec!["A".to_string()])]),
        subject_allocations: vec![Allocation {
            subject_code: "CS999".to_string(),
            faculty: "F001".to_string(),
            branch: "CSE".to_string(),
            section: "A".to_string(),
            periods_per_week: 32,
        }],
        ..GenerationInputs::default()
    };
    let draft = generate_demo_draft(7, &config(), &inputs, fixed_time());

    // 6 franjas lectivas x 5 días = 30
    let grid = &draft.draft_content.section_timetables["CSE-A"];
    let placed = grid.values().flat_map(|row| row.values()).filter(|c| *c == "CS999").count();
    assert_eq!(placed, 30);

    let unplaced = draft.xai_logs.iter().find(|l| l.rule_name == "Unplaced_Periods").expect("Debe reportar sobrante");
    assert!(unplaced.explanation.starts_with("2 of 32"));
}

#[test]
fn test_section_without_allocations_gets_info_log() {
    let mut data = AdminData::default();
    data.faculty.retain(|f| f.department != "ECE");
    let inputs = build_generation_inputs(&data);
    let draft = generate_demo_draft(1, &config(), &inputs, fixed_time());

    let info = draft.xai_logs.iter().find(|l| l.log_type == LogType::Info).expect("Debe haber log informativo");
    assert_eq!(info.rule_name, "No_Allocations");
    assert!(info.explanation.contains("ECE-A"));
    let ece = &draft.draft_content.section_timetables["ECE-A"];
    assert!(ece.values().flat_map(|r| r.values()).all(|c| c == FREE_CELL || c == LUNCH_CELL));
}

#[test]
fn test_generation_is_deterministic() {
    let inputs = build_generation_inputs(&AdminData::default());
    let a = generate_demo_draft(1, &config(), &inputs, fixed_time());
    let b = generate_demo_draft(1, &config(), &inputs, fixed_time());
    assert_eq!(a, b);
}

#[test]
fn test_draft_history_ids_and_updates() {
    let history = DraftHistory::new();
    let inputs = build_generation_inputs(&AdminData::default());
    let cfg = config();

    let first = history.push_with(|id| generate_demo_draft(id, &cfg, &inputs, fixed_time()));
    let second = history.push_with(|id| generate_demo_draft(id, &cfg, &inputs, fixed_time()));
    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(history.len(), 2);
    assert_eq!(history.list()[0].id, 2);

    let approved = history
        .update(1, DraftUpdate { status: Some(DraftStatus::Approved), draft_content: None })
        .expect("Debe existir");
    assert_eq!(approved.status, DraftStatus::Approved);
    assert!(approved.last_validated_at.is_none());

    let edited = history
        .update(2, DraftUpdate { status: None, draft_content: Some(Default::default()) })
        .expect("Debe existir");
    assert!(edited.last_validated_at.is_some());
    assert!(edited.draft_content.section_timetables.is_empty());

    assert!(history.update(9, DraftUpdate::default()).is_none());
    assert!(history.get(9).is_none());
}

#[test]
fn test_cohorts_sharing_a_label_get_one_grid() {
    let mut data = AdminData::default();
    let mut second_year = data.sections[0].clone(); // CSE-A
    second_year.id = 10;
    second_year.year = "2".to_string();
    data.sections.push(second_year);

    let inputs = build_generation_inputs(&data);
    assert_eq!(inputs.target_sections.get("CSE"), Some(&vec!["A".to_string(), "B".to_string()]));

    let draft = generate_demo_draft(1, &config(), &inputs, fixed_time());
    let content = &draft.draft_content;
    assert_eq!(content.section_timetables.len(), 3);
    assert_eq!(content.metadata.total_sections, 3);

    // CSE-A conserva sus 6 periodos: CS301 x3, CS302 x2, CSL301 x1
    let cse_a = &content.section_timetables["CSE-A"];
    let placed = cse_a.values().flat_map(|row| row.values()).filter(|c| *c != FREE_CELL && *c != LUNCH_CELL).count();
    assert_eq!(placed, 6);
    assert!(cse_a[&Weekday::Tuesday].values().all(|c| c == FREE_CELL || c == LUNCH_CELL));
}
