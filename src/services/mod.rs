//! Servicios del sistema

pub mod jwt_service;
