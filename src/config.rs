//! Configuración del servicio a partir de variables de entorno (y `.env`).
//!
//! - `ADMIN_BIND_ADDR`: dirección del servidor HTTP (por defecto `127.0.0.1:5000`)
//! - `ADMIN_STORE`: `memory`, `json` o `sqlite` (por defecto `json`)
//! - `ADMIN_DATA_PATH`: directorio (json) o archivo (sqlite) de datos
//! - `ADMIN_DEMO_MODE`: `true`/`false`; en modo demo los borradores se generan localmente

use std::env;
use std::path::PathBuf;

use crate::store::{JsonFileStore, KeyValueStore, MemoryStore, SqliteStore, StoreError};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_JSON_DIR: &str = "data";
pub const DEFAULT_SQLITE_PATH: &str = "data/admin_data.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ADMIN_STORE uses unsupported backend: {0}")]
    UnsupportedStore(String),

    #[error("{name} must be true or false, got {value}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Json(PathBuf),
    Sqlite(PathBuf),
}

impl StoreBackend {
    /// Abre el almacén correspondiente.
    pub fn open(&self) -> Result<Box<dyn KeyValueStore + Send>, StoreError> {
        let store: Box<dyn KeyValueStore + Send> = match self {
            StoreBackend::Memory => Box::new(MemoryStore::new()),
            StoreBackend::Json(dir) => Box::new(JsonFileStore::open(dir)?),
            StoreBackend::Sqlite(path) => Box::new(SqliteStore::open(path)?),
        };
        Ok(store)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store: StoreBackend,
    pub demo_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            store: StoreBackend::Json(PathBuf::from(DEFAULT_JSON_DIR)),
            demo_mode: true,
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value: value.to_string() }),
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso, cargando `.env` si existe.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_empty("ADMIN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let data_path = non_empty("ADMIN_DATA_PATH").map(PathBuf::from);

        let store = match non_empty("ADMIN_STORE").map(|s| s.trim().to_lowercase()).as_deref() {
            None | Some("json") => StoreBackend::Json(data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_DIR))),
            Some("sqlite") => StoreBackend::Sqlite(data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SQLITE_PATH))),
            Some("memory") => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::UnsupportedStore(other.to_string())),
        };

        let demo_mode = match non_empty("ADMIN_DEMO_MODE") {
            Some(v) => parse_flag("ADMIN_DEMO_MODE", &v)?,
            None => true,
        };

        Ok(AppConfig { bind_addr, store, demo_mode })
    }
}
