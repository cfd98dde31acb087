//! Repositorios de acceso al store
//!
//! Un repositorio por tipo de registro. Todas las búsquedas filtran por
//! el par (bus_id, record_id): un registro nunca es visible fuera del
//! scope de su bus.

pub mod breakdown_repository;
pub mod technical_visit_repository;
pub mod insurance_repository;
pub mod vidange_repository;
