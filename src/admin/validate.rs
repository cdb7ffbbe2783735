// Reglas de validación de los formularios de administración.
use super::AdminError;
use crate::models::{Faculty, Room, Section, Subject};

fn require(value: &str, field: &str) -> Result<(), AdminError> {
    if value.trim().is_empty() {
        return Err(AdminError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub(super) fn subject(s: &Subject, _others: &[Subject]) -> Result<(), AdminError> {
    require(&s.name, "name")?;
    require(&s.code, "code")?;
    require(&s.department, "department")
}

pub(super) fn faculty(f: &Faculty, others: &[Faculty]) -> Result<(), AdminError> {
    require(&f.name, "name")?;
    require(&f.employee_id, "employee_id")?;
    if others.iter().any(|o| o.employee_id == f.employee_id) {
        return Err(AdminError::Conflict(format!("employee_id {} is already in use", f.employee_id)));
    }
    Ok(())
}

pub(super) fn section(s: &Section, others: &[Section]) -> Result<(), AdminError> {
    require(&s.branch, "branch")?;
    require(&s.section, "section")?;
    let duplicate = others
        .iter()
        .any(|o| o.branch == s.branch && o.section == s.section && o.year == s.year && o.semester == s.semester);
    if duplicate {
        return Err(AdminError::Conflict(format!(
            "section {} (year {}, {}) already exists",
            s.label(),
            s.year,
            s.semester
        )));
    }
    Ok(())
}

pub(super) fn room(r: &Room, others: &[Room]) -> Result<(), AdminError> {
    require(&r.name, "name")?;
    if others.iter().any(|o| o.name.to_lowercase() == r.name.to_lowercase()) {
        return Err(AdminError::Conflict(format!("a room named {} already exists", r.name)));
    }
    Ok(())
}
