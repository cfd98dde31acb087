//! Art Luxury Bus - API de mantenimiento de flota
//!
//! Backend HTTP/JSON para el seguimiento de mantenimiento de los buses:
//! pannes (averías), visitas técnicas, seguros y vidanges (cambios de aceite).

pub mod config;
pub mod state;
pub mod storage;
pub mod models;
pub mod dto;
pub mod repositories;
pub mod controllers;
pub mod routes;
pub mod middleware;
pub mod services;
pub mod utils;
