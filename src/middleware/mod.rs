//! Middleware del sistema

pub mod auth;
pub mod cors;
