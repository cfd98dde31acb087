use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// Request para crear una vidange
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVidangeRequest {
    #[validate(
        required(message = "Le champ type est obligatoire."),
        length(min = 1, max = 100, message = "Le champ type doit faire entre 1 et 100 caractères.")
    )]
    #[serde(rename = "type")]
    pub vidange_type: Option<String>,

    pub vidange_date: Option<NaiveDate>,

    pub next_vidange_date: Option<NaiveDate>,

    pub planned_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, message = "Le champ cost doit être positif."))]
    pub cost: Option<f64>,

    #[validate(length(max = 255, message = "Le champ service_provider ne doit pas dépasser 255 caractères."))]
    pub service_provider: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ mileage doit être positif."))]
    pub mileage: Option<f64>,

    pub notes: Option<String>,
}

// Request para actualizar una vidange (parcial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVidangeRequest {
    #[validate(length(min = 1, max = 100, message = "Le champ type doit faire entre 1 et 100 caractères."))]
    #[serde(rename = "type")]
    pub vidange_type: Option<String>,

    pub vidange_date: Option<NaiveDate>,

    pub next_vidange_date: Option<NaiveDate>,

    pub planned_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, message = "Le champ cost doit être positif."))]
    pub cost: Option<f64>,

    #[validate(length(max = 255, message = "Le champ service_provider ne doit pas dépasser 255 caractères."))]
    pub service_provider: Option<String>,

    #[validate(range(min = 0.0, message = "Le champ mileage doit être positif."))]
    pub mileage: Option<f64>,

    pub notes: Option<String>,
}
