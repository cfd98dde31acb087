//! Controllers de la API
//!
//! Validan el request, resuelven el registro dentro del scope del bus
//! y delegan en el repositorio correspondiente.

pub mod auth_controller;
pub mod breakdown_controller;
pub mod technical_visit_controller;
pub mod insurance_controller;
pub mod vidange_controller;
