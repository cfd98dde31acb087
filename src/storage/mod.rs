//! Almacenamiento del sistema
//!
//! Este módulo contiene el store en memoria de los registros de
//! mantenimiento y el store de usuarios.

pub mod memory;
pub mod users;

pub use memory::FleetStore;
pub use users::UserStore;
