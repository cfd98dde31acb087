//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del dominio de
//! mantenimiento, con las convenciones de nombres de la API original.

pub mod breakdown;
pub mod technical_visit;
pub mod insurance;
pub mod vidange;
pub mod user;
