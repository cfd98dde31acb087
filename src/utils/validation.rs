//! Utilidades de validación
//!
//! Este módulo contiene los validadores custom usados por los DTOs
//! (pertenencia a enums del wire format).

use validator::ValidationError;

use crate::models::breakdown::StatutReparation;
use crate::models::technical_visit::ResultatVisite;

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum(value: &str, allowed_values: &[&str]) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

/// Validar el statut_reparation de una panne
pub fn validate_statut_reparation(value: &str) -> Result<(), ValidationError> {
    validate_enum(value, &StatutReparation::ALLOWED).map_err(|mut e| {
        e.message = Some(
            "Le statut de réparation doit être en_cours, terminee ou en_attente_pieces.".into(),
        );
        e
    })
}

/// Validar el resultado de una visita técnica
pub fn validate_resultat_visite(value: &str) -> Result<(), ValidationError> {
    validate_enum(value, &ResultatVisite::ALLOWED).map_err(|mut e| {
        e.message = Some("Le résultat doit être Favorable ou Défavorable.".into());
        e
    })
}
