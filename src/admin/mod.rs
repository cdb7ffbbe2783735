//! Operaciones de administración sobre los datos de referencia.
//!
//! `AdminService` mantiene en memoria la última versión cargada de las
//! colecciones y persiste la colección completa después de cada cambio.

mod validate;

use crate::allocation::{build_generation_inputs, generate_subject_allocations, GenerationInputs};
use crate::models::{Allocation, Faculty, Room, Section, Subject};
use crate::store::{AdminData, AdminRepository, Collection, KeyValueStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Entidad editable con identificador numérico.
pub trait Entity: Clone {
    const KIND: &'static str;
    const COLLECTION: Collection;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn items(data: &AdminData) -> &Vec<Self>;
    fn items_mut(data: &mut AdminData) -> &mut Vec<Self>;
    /// Revisa campos obligatorios y unicidad contra `others` (que excluye a la propia entidad).
    fn validate(&self, others: &[Self]) -> Result<(), AdminError>;
}

impl Entity for Subject {
    const KIND: &'static str = "subject";
    const COLLECTION: Collection = Collection::Subjects;

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
    fn items(data: &AdminData) -> &Vec<Self> { &data.subjects }
    fn items_mut(data: &mut AdminData) -> &mut Vec<Self> { &mut data.subjects }
    fn validate(&self, others: &[Self]) -> Result<(), AdminError> { validate::subject(self, others) }
}

impl Entity for Faculty {
    const KIND: &'static str = "faculty";
    const COLLECTION: Collection = Collection::Faculty;

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
    fn items(data: &AdminData) -> &Vec<Self> { &data.faculty }
    fn items_mut(data: &mut AdminData) -> &mut Vec<Self> { &mut data.faculty }
    fn validate(&self, others: &[Self]) -> Result<(), AdminError> { validate::faculty(self, others) }
}

impl Entity for Section {
    const KIND: &'static str = "section";
    const COLLECTION: Collection = Collection::Sections;

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
    fn items(data: &AdminData) -> &Vec<Self> { &data.sections }
    fn items_mut(data: &mut AdminData) -> &mut Vec<Self> { &mut data.sections }
    fn validate(&self, others: &[Self]) -> Result<(), AdminError> { validate::section(self, others) }
}

impl Entity for Room {
    const KIND: &'static str = "room";
    const COLLECTION: Collection = Collection::Rooms;

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
    fn items(data: &AdminData) -> &Vec<Self> { &data.rooms }
    fn items_mut(data: &mut AdminData) -> &mut Vec<Self> { &mut data.rooms }
    fn validate(&self, others: &[Self]) -> Result<(), AdminError> { validate::room(self, others) }
}

/// Nuevo id: milisegundos desde epoch, siempre mayor que cualquier id existente.
/// Si el máximo ya es `u64::MAX` (posible vía `replace`), usa el menor id libre.
fn next_id<T: Entity>(items: &[T]) -> u64 {
    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let max_existing = items.iter().map(|i| i.id()).max().unwrap_or(0);
    match max_existing.checked_add(1) {
        Some(above) => now.max(above),
        None => (1..u64::MAX)
            .find(|candidate| !items.iter().any(|i| i.id() == *candidate))
            .unwrap_or(0),
    }
}

pub struct AdminService<S: KeyValueStore> {
    repo: AdminRepository<S>,
    data: AdminData,
}

impl<S: KeyValueStore> AdminService<S> {
    /// Carga las colecciones desde el almacén.
    pub fn open(store: S) -> Result<Self, AdminError> {
        let repo = AdminRepository::new(store);
        let data = repo.load()?;
        tracing::info!(
            subjects = data.subjects.len(),
            faculty = data.faculty.len(),
            sections = data.sections.len(),
            rooms = data.rooms.len(),
            "admin data loaded"
        );
        Ok(AdminService { repo, data })
    }

    pub fn data(&self) -> &AdminData {
        &self.data
    }

    pub fn list<T: Entity>(&self) -> &[T] {
        T::items(&self.data)
    }

    pub fn get<T: Entity>(&self, id: u64) -> Result<&T, AdminError> {
        T::items(&self.data)
            .iter()
            .find(|i| i.id() == id)
            .ok_or(AdminError::NotFound { entity: T::KIND, id })
    }

    /// Agrega una entidad con un id nuevo (el id recibido se ignora).
    pub fn add<T: Entity>(&mut self, mut item: T) -> Result<T, AdminError> {
        let items = T::items(&self.data);
        item.validate(items)?;
        item.set_id(next_id(items));
        T::items_mut(&mut self.data).push(item.clone());
        self.persist(T::COLLECTION)?;
        tracing::info!(entity = T::KIND, id = item.id(), "entity added");
        Ok(item)
    }

    /// Reemplaza la entidad `id`, conservando su id y su posición.
    pub fn update<T: Entity>(&mut self, id: u64, mut item: T) -> Result<T, AdminError> {
        let items = T::items(&self.data);
        let pos = items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(AdminError::NotFound { entity: T::KIND, id })?;
        let others: Vec<T> = items.iter().filter(|i| i.id() != id).cloned().collect();
        item.validate(&others)?;
        item.set_id(id);
        T::items_mut(&mut self.data)[pos] = item.clone();
        self.persist(T::COLLECTION)?;
        tracing::info!(entity = T::KIND, id, "entity updated");
        Ok(item)
    }

    pub fn delete<T: Entity>(&mut self, id: u64) -> Result<T, AdminError> {
        let items = T::items_mut(&mut self.data);
        let pos = items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(AdminError::NotFound { entity: T::KIND, id })?;
        let removed = items.remove(pos);
        self.persist(T::COLLECTION)?;
        tracing::info!(entity = T::KIND, id, "entity deleted");
        Ok(removed)
    }

    /// Sustituye la colección completa. Cada elemento se valida contra los
    /// anteriores en la lista; los ids se conservan tal como vienen.
    pub fn replace<T: Entity>(&mut self, items: Vec<T>) -> Result<(), AdminError> {
        for (i, item) in items.iter().enumerate() {
            item.validate(&items[..i])?;
        }
        *T::items_mut(&mut self.data) = items;
        self.persist(T::COLLECTION)
    }

    /// Vuelve una colección a sus datos semilla.
    pub fn reset(&mut self, collection: Collection) -> Result<(), AdminError> {
        self.repo.reset(collection)?;
        let seeded = AdminData::default();
        match collection {
            Collection::Subjects => self.data.subjects = seeded.subjects,
            Collection::Faculty => self.data.faculty = seeded.faculty,
            Collection::Sections => self.data.sections = seeded.sections,
            Collection::Rooms => self.data.rooms = seeded.rooms,
        }
        Ok(())
    }

    pub fn allocations(&self) -> Vec<Allocation> {
        generate_subject_allocations(&self.data.sections, &self.data.subjects, &self.data.faculty)
    }

    pub fn generation_inputs(&self) -> GenerationInputs {
        build_generation_inputs(&self.data)
    }

    fn persist(&mut self, collection: Collection) -> Result<(), AdminError> {
        self.repo.save(&self.data, collection)?;
        Ok(())
    }
}
