//! Modelo de TechnicalVisit (visite technique)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Resultado de la visita técnica - mapea a Favorable/Défavorable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResultatVisite {
    Favorable,
    #[serde(rename = "Défavorable")]
    Defavorable,
}

impl ResultatVisite {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultatVisite::Favorable => "Favorable",
            ResultatVisite::Defavorable => "Défavorable",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Favorable" => Some(ResultatVisite::Favorable),
            "Défavorable" => Some(ResultatVisite::Defavorable),
            _ => None,
        }
    }

    pub const ALLOWED: [&'static str; 2] = ["Favorable", "Défavorable"];
}

/// Visita técnica de un bus
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalVisit {
    pub id: i64,
    pub bus_id: i64,
    pub visit_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub result: ResultatVisite,
    pub visit_center: Option<String>,
    pub cost: Option<f64>,
    pub certificate_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
