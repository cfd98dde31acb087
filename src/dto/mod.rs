//! DTOs de la API
//!
//! Requests de creación/actualización con sus reglas de validación y
//! responses compartidas. Los campos requeridos se modelan como Option
//! para que un campo ausente produzca un error de validación por campo
//! (mapa {campo: [mensajes]}) y no un error de deserialización.

pub mod auth_dto;
pub mod breakdown_dto;
pub mod technical_visit_dto;
pub mod insurance_dto;
pub mod vidange_dto;
