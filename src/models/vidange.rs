//! Modelo de Vidange (cambio de aceite)
//!
//! Todas las fechas son opcionales: una vidange puede registrarse como
//! planificada (planned_date) sin haberse realizado todavía.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Vidange de un bus
#[derive(Debug, Clone, Serialize)]
pub struct Vidange {
    pub id: i64,
    pub bus_id: i64,
    #[serde(rename = "type")]
    pub vidange_type: String,
    pub vidange_date: Option<NaiveDate>,
    pub next_vidange_date: Option<NaiveDate>,
    pub planned_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub service_provider: Option<String>,
    pub mileage: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
