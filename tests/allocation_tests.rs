use timetable_admin::generate_subject_allocations;
use timetable_admin::models::{Allocation, Availability, Faculty, Section, Subject, SubjectKind};

fn section(id: u64, branch: &str, label: &str) -> Section {
    Section {
        id,
        branch: branch.to_string(),
        section: label.to_string(),
        year: "3".to_string(),
        semester: "Fall".to_string(),
        student_count: 60,
    }
}

fn subject(id: u64, code: &str, department: &str, frequency: u32) -> Subject {
    Subject {
        id,
        name: format!("Subject {}", code),
        code: code.to_string(),
        department: department.to_string(),
        credits: 3,
        required_frequency_per_week: frequency,
        kind: SubjectKind::Lecture { lecture_periods: 1 },
    }
}

fn faculty(id: u64, employee_id: &str, department: &str) -> Faculty {
    Faculty {
        id,
        name: format!("Prof. {}", employee_id),
        employee_id: employee_id.to_string(),
        department: department.to_string(),
        max_weekly_workload: 20,
        max_daily_periods: 4,
        availability: Availability::new(),
    }
}

#[test]
fn single_section_picks_first_matching_faculty() {
    let sections = vec![section(1, "CSE", "A")];
    let subjects = vec![subject(1, "CS301", "CSE", 3)];
    let staff = vec![faculty(1, "F001", "CSE"), faculty(3, "F003", "CSE")];

    let out = generate_subject_allocations(&sections, &subjects, &staff);
    assert_eq!(
        out,
        vec![Allocation {
            subject_code: "CS301".to_string(),
            faculty: "F001".to_string(),
            branch: "CSE".to_string(),
            section: "A".to_string(),
            periods_per_week: 3,
        }]
    );
}

#[test]
fn subject_without_eligible_faculty_is_dropped() {
    let sections = vec![section(1, "ECE", "A"), section(2, "ECE", "B"), section(3, "ECE", "C")];
    let subjects = vec![subject(4, "EC301", "ECE", 3)];
    let staff = vec![faculty(1, "F001", "CSE"), faculty(2, "F003", "MECH")];

    assert!(generate_subject_allocations(&sections, &subjects, &staff).is_empty());
}

#[test]
fn same_pairing_repeats_for_every_matching_section() {
    let sections = vec![section(1, "CSE", "A"), section(2, "CSE", "B")];
    let subjects = vec![subject(1, "CS301", "CSE", 3)];
    let staff = vec![faculty(1, "F001", "CSE")];

    let out = generate_subject_allocations(&sections, &subjects, &staff);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].section, "A");
    assert_eq!(out[1].section, "B");
    for a in &out {
        assert_eq!(a.subject_code, "CS301");
        assert_eq!(a.faculty, "F001");
    }
}

#[test]
fn empty_inputs_yield_no_allocations() {
    let sections = vec![section(1, "CSE", "A")];
    let subjects = vec![subject(1, "CS301", "CSE", 3)];
    let staff = vec![faculty(1, "F001", "CSE")];

    assert!(generate_subject_allocations(&[], &subjects, &staff).is_empty());
    assert!(generate_subject_allocations(&sections, &[], &staff).is_empty());
    assert!(generate_subject_allocations(&sections, &subjects, &[]).is_empty());
    assert!(generate_subject_allocations(&[], &[], &[]).is_empty());
}

#[test]
fn general_subjects_apply_to_every_branch() {
    let sections = vec![section(1, "CSE", "A"), section(2, "ECE", "A")];
    let subjects = vec![subject(1, "MA201", "General", 2)];
    let staff = vec![faculty(1, "F010", "General")];

    let out = generate_subject_allocations(&sections, &subjects, &staff);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].branch, "CSE");
    assert_eq!(out[1].branch, "ECE");
    assert!(out.iter().all(|a| a.faculty == "F010" && a.periods_per_week == 2));
}

#[test]
fn general_faculty_covers_departments_without_staff() {
    let sections = vec![section(1, "ECE", "A")];
    let subjects = vec![subject(4, "EC301", "ECE", 3)];
    // el docente "General" aparece antes que el de ECE, así que gana
    let staff = vec![faculty(1, "F001", "CSE"), faculty(9, "F009", "General"), faculty(2, "F002", "ECE")];

    let out = generate_subject_allocations(&sections, &subjects, &staff);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].faculty, "F009");
}

#[test]
fn partial_results_when_only_some_subjects_are_staffed() {
    let sections = vec![section(1, "CSE", "A")];
    let subjects = vec![subject(1, "CS301", "CSE", 3), subject(2, "EC301", "ECE", 3), subject(3, "CS302", "CSE", 2)];
    let staff = vec![faculty(1, "F001", "CSE")];

    let out = generate_subject_allocations(&sections, &subjects, &staff);
    let codes: Vec<&str> = out.iter().map(|a| a.subject_code.as_str()).collect();
    assert_eq!(codes, vec!["CS301", "CS302"]);
}

#[test]
fn workload_and_availability_are_not_checked() {
    let sections: Vec<Section> = (0..10).map(|i| section(i, "CSE", &format!("S{}", i))).collect();
    let subjects = vec![subject(1, "CS301", "CSE", 5)];
    let mut busy = faculty(1, "F001", "CSE");
    busy.max_weekly_workload = 1;
    busy.max_daily_periods = 0;

    let out = generate_subject_allocations(&sections, &subjects, &[busy]);
    assert_eq!(out.len(), 10);
    assert!(out.iter().all(|a| a.faculty == "F001"));
}

#[test]
fn empty_department_never_matches() {
    let sections = vec![section(1, "", "A")];
    let subjects = vec![subject(1, "XX100", "", 1)];
    let staff = vec![faculty(1, "F001", "")];

    assert!(generate_subject_allocations(&sections, &subjects, &staff).is_empty());
}

#[test]
fn output_is_bounded_consistent_and_deterministic() {
    let sections = vec![section(1, "CSE", "A"), section(2, "CSE", "B"), section(3, "ECE", "A"), section(4, "MECH", "A")];
    let subjects = vec![
        subject(1, "CS301", "CSE", 3),
        subject(2, "CS302", "CSE", 2),
        subject(3, "EC301", "ECE", 3),
        subject(4, "HS101", "General", 1),
        subject(5, "ME201", "MECH", 4),
    ];
    let staff = vec![faculty(1, "F001", "CSE"), faculty(2, "F002", "ECE"), faculty(3, "F003", "CSE")];

    let first = generate_subject_allocations(&sections, &subjects, &staff);
    let second = generate_subject_allocations(&sections, &subjects, &staff);
    assert_eq!(first, second);
    assert!(first.len() <= sections.len() * subjects.len());

    for a in &first {
        assert!(sections.iter().any(|s| s.branch == a.branch && s.section == a.section));
        let sub = subjects.iter().find(|s| s.code == a.subject_code).expect("subject must exist");
        assert!(sub.department == a.branch || sub.department == "General");
        assert_eq!(a.periods_per_week, sub.required_frequency_per_week);
    }

    // CSE: CS301, CS302 ; ECE: EC301 ; MECH: nada (ME201 sin docente, HS101 sin docente General)
    let summary: Vec<String> = first.iter().map(|a| format!("{}-{}:{}:{}", a.branch, a.section, a.subject_code, a.faculty)).collect();
    assert_eq!(
        summary,
        vec!["CSE-A:CS301:F001", "CSE-A:CS302:F001", "CSE-B:CS301:F001", "CSE-B:CS302:F001", "ECE-A:EC301:F002"]
    );
}

#[test]
fn inputs_are_left_untouched() {
    let sections = vec![section(1, "CSE", "A")];
    let subjects = vec![subject(1, "CS301", "CSE", 3)];
    let staff = vec![faculty(1, "F001", "CSE")];
    let (s0, sub0, f0) = (sections.clone(), subjects.clone(), staff.clone());

    let _ = generate_subject_allocations(&sections, &subjects, &staff);
    assert_eq!(sections, s0);
    assert_eq!(subjects, sub0);
    assert_eq!(staff, f0);
}
