use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// Request para crear una assurance
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInsuranceRequest {
    #[validate(
        required(message = "Le champ insurance_company est obligatoire."),
        length(min = 1, max = 255, message = "Le champ insurance_company doit faire entre 1 et 255 caractères.")
    )]
    pub insurance_company: Option<String>,

    #[validate(
        required(message = "Le champ policy_number est obligatoire."),
        length(min = 1, max = 100, message = "Le champ policy_number doit faire entre 1 et 100 caractères.")
    )]
    pub policy_number: Option<String>,

    #[validate(required(message = "Le champ start_date est obligatoire."))]
    pub start_date: Option<NaiveDate>,

    // after:start_date se verifica en el controller
    #[validate(required(message = "Le champ expiry_date est obligatoire."))]
    pub expiry_date: Option<NaiveDate>,

    #[validate(
        required(message = "Le champ coverage_type est obligatoire."),
        length(min = 1, max = 100, message = "Le champ coverage_type doit faire entre 1 et 100 caractères.")
    )]
    pub coverage_type: Option<String>,

    #[validate(
        required(message = "Le champ premium est obligatoire."),
        range(min = 0.0, message = "Le champ premium doit être positif.")
    )]
    pub premium: Option<f64>,

    pub notes: Option<String>,
}

// Request para actualizar una assurance (parcial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInsuranceRequest {
    #[validate(length(min = 1, max = 255, message = "Le champ insurance_company doit faire entre 1 et 255 caractères."))]
    pub insurance_company: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Le champ policy_number doit faire entre 1 et 100 caractères."))]
    pub policy_number: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub expiry_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 100, message = "Le champ coverage_type doit faire entre 1 et 100 caractères."))]
    pub coverage_type: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ premium doit être positif."))]
    pub premium: Option<f64>,

    pub notes: Option<String>,
}
