//! Modelo de Breakdown (panne)
//!
//! Registro de avería de un bus. Los nombres de campos siguen el wire
//! format francés de la API original (date_panne, statut_reparation, etc.).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Estado de la reparación - valores fijos del wire format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatutReparation {
    EnCours,
    Terminee,
    EnAttentePieces,
}

impl StatutReparation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatutReparation::EnCours => "en_cours",
            StatutReparation::Terminee => "terminee",
            StatutReparation::EnAttentePieces => "en_attente_pieces",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en_cours" => Some(StatutReparation::EnCours),
            "terminee" => Some(StatutReparation::Terminee),
            "en_attente_pieces" => Some(StatutReparation::EnAttentePieces),
            _ => None,
        }
    }

    /// Valores aceptados, para mensajes de validación
    pub const ALLOWED: [&'static str; 3] = ["en_cours", "terminee", "en_attente_pieces"];
}

/// Panne de un bus
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub id: i64,
    pub bus_id: i64,
    pub date_panne: NaiveDate,
    pub description_probleme: String,
    pub diagnostic_mecanicien: String,
    pub reparation_effectuee: String,
    pub statut_reparation: StatutReparation,
    pub kilometrage: Option<i64>,
    pub piece_remplacee: Option<String>,
    pub prix_piece: Option<f64>,
    pub facture_photo: Option<String>,
    pub notes_complementaires: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
