use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserResponse;

// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Le champ email est obligatoire."),
        email(message = "Le champ email doit être une adresse valide.")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Le champ password est obligatoire."),
        length(min = 1, message = "Le champ password est obligatoire.")
    )]
    pub password: Option<String>,
}

// Payload de un login exitoso
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub user: UserResponse,
    pub token: String,
    pub token_type: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
