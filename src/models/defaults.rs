//! Datos semilla usados cuando una colección nunca fue guardada.

use super::{Availability, Faculty, Room, Section, Subject, SubjectKind, Weekday};

fn subject(id: u64, name: &str, code: &str, department: &str, credits: u32, frequency: u32, kind: SubjectKind) -> Subject {
    Subject {
        id,
        name: name.to_string(),
        code: code.to_string(),
        department: department.to_string(),
        credits,
        required_frequency_per_week: frequency,
        kind,
    }
}

fn availability(days: &[(Weekday, &[&str])]) -> Availability {
    let mut out = Availability::new();
    for (day, slots) in days {
        out.insert(*day, slots.iter().map(|s| s.to_string()).collect());
    }
    out
}

pub fn default_subjects() -> Vec<Subject> {
    let lecture = SubjectKind::Lecture { lecture_periods: 1 };
    let lab = SubjectKind::Lab { lab_periods: 2 };
    vec![
        subject(1, "Data Structures and Algorithms", "CS301", "CSE", 4, 3, lecture),
        subject(2, "Computer Networks", "CS302", "CSE", 3, 2, lecture),
        subject(3, "Data Structures Lab", "CSL301", "CSE", 2, 1, lab),
        subject(4, "Digital Logic Design", "EC301", "ECE", 4, 3, lecture),
        subject(5, "Digital Logic Design Lab", "ECL301", "ECE", 2, 1, lab),
    ]
}

pub fn default_faculty() -> Vec<Faculty> {
    use Weekday::*;
    vec![
        Faculty {
            id: 1,
            name: "Dr. Anya Sharma".to_string(),
            employee_id: "F001".to_string(),
            department: "CSE".to_string(),
            max_weekly_workload: 20,
            max_daily_periods: 4,
            availability: availability(&[
                (Monday, &["09:00-10:00", "10:00-11:00"]),
                (Tuesday, &["13:00-14:00", "14:00-15:00"]),
                (Wednesday, &[]),
                (Thursday, &["09:00-10:00", "10:00-11:00", "15:00-16:00"]),
                (Friday, &["09:00-10:00", "10:00-11:00"]),
            ]),
        },
        Faculty {
            id: 2,
            name: "Prof. Ben Carter".to_string(),
            employee_id: "F002".to_string(),
            department: "ECE".to_string(),
            max_weekly_workload: 18,
            max_daily_periods: 3,
            availability: availability(&[
                (Monday, &["13:00-14:00", "14:00-15:00"]),
                (Tuesday, &["09:00-10:00"]),
                (Wednesday, &["10:00-11:00", "11:00-12:00"]),
                (Thursday, &[]),
                (Friday, &["13:00-14:00", "14:00-15:00"]),
            ]),
        },
        Faculty {
            id: 3,
            name: "Dr. Cathy Lee".to_string(),
            employee_id: "F003".to_string(),
            department: "CSE".to_string(),
            max_weekly_workload: 22,
            max_daily_periods: 5,
            availability: availability(&[
                (Monday, &["09:00-10:00", "10:00-11:00", "11:00-12:00"]),
                (Tuesday, &["09:00-10:00", "10:00-11:00", "11:00-12:00", "13:00-14:00"]),
                (Wednesday, &["09:00-10:00"]),
                (Thursday, &["13:00-14:00", "14:00-15:00"]),
                (Friday, &["09:00-10:00", "10:00-11:00"]),
            ]),
        },
    ]
}

pub fn default_sections() -> Vec<Section> {
    let section = |id: u64, branch: &str, label: &str, student_count: u32| Section {
        id,
        branch: branch.to_string(),
        section: label.to_string(),
        year: "3".to_string(),
        semester: "Fall".to_string(),
        student_count,
    };
    vec![
        section(1, "CSE", "A", 65),
        section(2, "CSE", "B", 62),
        section(3, "ECE", "A", 58),
    ]
}

pub fn default_rooms() -> Vec<Room> {
    let room = |id: u64, name: &str, room_type: &str, capacity: u32, is_lab: bool, building: &str, floor: &str, equipment: &[&str]| Room {
        id,
        name: name.to_string(),
        room_type: room_type.to_string(),
        capacity,
        is_lab,
        building: building.to_string(),
        floor: floor.to_string(),
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
    };
    vec![
        room(1, "LH101", "Lecture Hall", 60, false, "Main Block", "1st Floor", &["Projector", "Whiteboard"]),
        room(2, "LH102", "Lecture Hall", 60, false, "Main Block", "1st Floor", &["Projector", "Whiteboard", "Sound System"]),
        room(3, "CSE_Lab1", "Computer Lab", 30, true, "CS Block", "Ground Floor", &["Computers", "Projector", "Whiteboard", "Printer"]),
        room(4, "ECE_Lab1", "Electronics Lab", 25, true, "ECE Block", "1st Floor", &["Oscilloscopes", "Power Supplies", "Multimeters", "Projector"]),
    ]
}
