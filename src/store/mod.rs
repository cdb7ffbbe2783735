//! Persistencia de los datos de referencia.
//!
//! Cada colección (asignaturas, docentes, secciones, salas) se guarda completa
//! como un único valor JSON bajo la clave `admin_data_<colección>`; cada escritura
//! reemplaza el valor anterior. El backend concreto (memoria, archivos JSON o
//! SQLite) se abstrae detrás de [`KeyValueStore`].

mod error;
pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::defaults::{default_faculty, default_rooms, default_sections, default_subjects};
use crate::models::{Faculty, Room, Section, Subject};

/// Prefijo común de todas las claves de datos de administración.
pub const STORAGE_KEY_PREFIX: &str = "admin_data_";

/// Almacén clave/valor de cadenas.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Subjects,
    Faculty,
    Sections,
    Rooms,
}

impl Collection {
    pub const ALL: [Collection; 4] = [Collection::Subjects, Collection::Faculty, Collection::Sections, Collection::Rooms];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Subjects => "subjects",
            Collection::Faculty => "faculty",
            Collection::Sections => "sections",
            Collection::Rooms => "rooms",
        }
    }

    pub fn storage_key(&self) -> String {
        format!("{}{}", STORAGE_KEY_PREFIX, self.name())
    }

    pub fn from_name(name: &str) -> Option<Collection> {
        Collection::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Instantánea de las cuatro colecciones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminData {
    pub subjects: Vec<Subject>,
    pub faculty: Vec<Faculty>,
    pub sections: Vec<Section>,
    pub rooms: Vec<Room>,
}

impl Default for AdminData {
    /// Los datos semilla de una instalación nueva.
    fn default() -> Self {
        AdminData {
            subjects: default_subjects(),
            faculty: default_faculty(),
            sections: default_sections(),
            rooms: default_rooms(),
        }
    }
}

impl AdminData {
    pub fn empty() -> Self {
        AdminData { subjects: Vec::new(), faculty: Vec::new(), sections: Vec::new(), rooms: Vec::new() }
    }
}

pub struct AdminRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AdminRepository<S> {
    pub fn new(store: S) -> Self {
        AdminRepository { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Carga todas las colecciones.
    ///
    /// Una clave ausente devuelve los datos semilla. Un valor ilegible se
    /// registra como warning y se reemplaza por los datos semilla (asignaturas)
    /// o por una lista vacía (el resto). Sólo los fallos del backend son error.
    pub fn load(&self) -> Result<AdminData, StoreError> {
        Ok(AdminData {
            subjects: self.load_collection(Collection::Subjects, default_subjects, default_subjects)?,
            faculty: self.load_collection(Collection::Faculty, default_faculty, Vec::new)?,
            sections: self.load_collection(Collection::Sections, default_sections, Vec::new)?,
            rooms: self.load_collection(Collection::Rooms, default_rooms, Vec::new)?,
        })
    }

    fn load_collection<T, D, C>(&self, collection: Collection, on_missing: D, on_corrupt: C) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
        D: FnOnce() -> Vec<T>,
        C: FnOnce() -> Vec<T>,
    {
        let key = collection.storage_key();
        match self.store.get(&key)? {
            None => Ok(on_missing()),
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "stored collection is unreadable, falling back");
                    Ok(on_corrupt())
                }
            },
        }
    }

    /// Sobrescribe una colección completa con su contenido actual en `data`.
    pub fn save(&mut self, data: &AdminData, collection: Collection) -> Result<(), StoreError> {
        let json = match collection {
            Collection::Subjects => serde_json::to_string(&data.subjects)?,
            Collection::Faculty => serde_json::to_string(&data.faculty)?,
            Collection::Sections => serde_json::to_string(&data.sections)?,
            Collection::Rooms => serde_json::to_string(&data.rooms)?,
        };
        self.store.set(&collection.storage_key(), &json)?;
        tracing::debug!(collection = collection.name(), bytes = json.len(), "collection saved");
        Ok(())
    }

    pub fn save_all(&mut self, data: &AdminData) -> Result<(), StoreError> {
        for c in Collection::ALL {
            self.save(data, c)?;
        }
        Ok(())
    }

    /// Borra la colección guardada; la próxima carga vuelve a los datos semilla.
    pub fn reset(&mut self, collection: Collection) -> Result<(), StoreError> {
        self.store.remove(&collection.storage_key())
    }
}
