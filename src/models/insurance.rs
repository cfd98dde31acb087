//! Modelo de InsuranceRecord (assurance)

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Seguro de un bus
#[derive(Debug, Clone, Serialize)]
pub struct InsuranceRecord {
    pub id: i64,
    pub bus_id: i64,
    pub insurance_company: String,
    pub policy_number: String,
    pub start_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub coverage_type: String,
    pub premium: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
