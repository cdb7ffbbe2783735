// Biblioteca raíz del crate `timetable_admin`.
// Datos de referencia de la consola de horarios, resolución de asignaciones
// y el servidor HTTP que los expone.
pub mod admin;
pub mod allocation;
pub mod config;
pub mod models;
pub mod server;
pub mod server_handlers;
pub mod store;
pub mod timetable;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use allocation::{generate_subject_allocations, GENERAL_DEPARTMENT};
