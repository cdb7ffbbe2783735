use chrono::Utc;
use serde::Deserialize;
use std::sync::Mutex;

use super::{Draft, DraftContent, DraftStatus};

/// Cambios aceptados por `PUT /timetable/drafts/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftUpdate {
    pub status: Option<DraftStatus>,
    pub draft_content: Option<DraftContent>,
}

/// Historial en memoria de borradores generados. Los ids empiezan en 1.
#[derive(Debug, Default)]
pub struct DraftHistory {
    drafts: Mutex<Vec<Draft>>,
}

impl DraftHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra el borrador construido por `build`, que recibe el id asignado.
    pub fn push_with<F>(&self, build: F) -> Draft
    where
        F: FnOnce(u64) -> Draft,
    {
        let mut guard = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
        let id = guard.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let draft = build(id);
        guard.push(draft.clone());
        draft
    }

    /// Todos los borradores, el más reciente primero.
    pub fn list(&self) -> Vec<Draft> {
        let guard = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
        guard.iter().rev().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Draft> {
        let guard = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
        guard.iter().find(|d| d.id == id).cloned()
    }

    /// Aplica `update`. Un contenido nuevo marca el borrador como revisado
    /// (`last_validated_at`).
    pub fn update(&self, id: u64, update: DraftUpdate) -> Option<Draft> {
        let mut guard = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
        let draft = guard.iter_mut().find(|d| d.id == id)?;
        if let Some(content) = update.draft_content {
            draft.draft_content = content;
            draft.last_validated_at = Some(Utc::now());
        }
        if let Some(status) = update.status {
            draft.status = status;
        }
        Some(draft.clone())
    }

    pub fn len(&self) -> usize {
        self.drafts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
