use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_resultat_visite;

// Request para crear una visita técnica
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTechnicalVisitRequest {
    #[validate(required(message = "Le champ visit_date est obligatoire."))]
    pub visit_date: Option<NaiveDate>,

    // after:visit_date se verifica en el controller, sobre los valores efectivos
    #[validate(required(message = "Le champ expiry_date est obligatoire."))]
    pub expiry_date: Option<NaiveDate>,

    #[validate(
        required(message = "Le champ result est obligatoire."),
        custom = "validate_resultat_visite"
    )]
    pub result: Option<String>,

    #[validate(length(max = 255, message = "Le champ visit_center ne doit pas dépasser 255 caractères."))]
    pub visit_center: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ cost doit être positif."))]
    pub cost: Option<f64>,

    #[validate(length(max = 100, message = "Le champ certificate_number ne doit pas dépasser 100 caractères."))]
    pub certificate_number: Option<String>,

    pub notes: Option<String>,
}

// Request para actualizar una visita técnica (parcial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTechnicalVisitRequest {
    pub visit_date: Option<NaiveDate>,

    pub expiry_date: Option<NaiveDate>,

    #[validate(custom = "validate_resultat_visite")]
    pub result: Option<String>,

    #[validate(length(max = 255, message = "Le champ visit_center ne doit pas dépasser 255 caractères."))]
    pub visit_center: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ cost doit être positif."))]
    pub cost: Option<f64>,

    #[validate(length(max = 100, message = "Le champ certificate_number ne doit pas dépasser 100 caractères."))]
    pub certificate_number: Option<String>,

    pub notes: Option<String>,
}
