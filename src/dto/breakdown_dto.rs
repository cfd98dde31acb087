use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_statut_reparation;

// Request para crear una panne
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBreakdownRequest {
    #[validate(required(message = "Le champ date_panne est obligatoire."))]
    pub date_panne: Option<NaiveDate>,

    #[validate(
        required(message = "Le champ description_probleme est obligatoire."),
        length(min = 1, message = "Le champ description_probleme est obligatoire.")
    )]
    pub description_probleme: Option<String>,

    #[validate(
        required(message = "Le champ diagnostic_mecanicien est obligatoire."),
        length(min = 1, message = "Le champ diagnostic_mecanicien est obligatoire.")
    )]
    pub diagnostic_mecanicien: Option<String>,

    #[validate(
        required(message = "Le champ reparation_effectuee est obligatoire."),
        length(min = 1, message = "Le champ reparation_effectuee est obligatoire.")
    )]
    pub reparation_effectuee: Option<String>,

    #[validate(
        required(message = "Le champ statut_reparation est obligatoire."),
        custom = "validate_statut_reparation"
    )]
    pub statut_reparation: Option<String>,

    pub kilometrage: Option<i64>,

    pub piece_remplacee: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ prix_piece doit être positif."))]
    pub prix_piece: Option<f64>,

    pub facture_photo: Option<String>,

    pub notes_complementaires: Option<String>,
}

// Request para actualizar una panne (parcial: los campos ausentes se conservan)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBreakdownRequest {
    pub date_panne: Option<NaiveDate>,

    #[validate(length(min = 1, message = "Le champ description_probleme est obligatoire."))]
    pub description_probleme: Option<String>,

    #[validate(length(min = 1, message = "Le champ diagnostic_mecanicien est obligatoire."))]
    pub diagnostic_mecanicien: Option<String>,

    #[validate(length(min = 1, message = "Le champ reparation_effectuee est obligatoire."))]
    pub reparation_effectuee: Option<String>,

    #[validate(custom = "validate_statut_reparation")]
    pub statut_reparation: Option<String>,

    pub kilometrage: Option<i64>,

    pub piece_remplacee: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ prix_piece doit être positif."))]
    pub prix_piece: Option<f64>,

    pub facture_photo: Option<String>,

    pub notes_complementaires: Option<String>,
}
