use validator::Validate;

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{ApiResponse, LoginData, LoginRequest};
use crate::services::jwt_service::JwtService;
use crate::storage::UserStore;
use crate::utils::errors::{required_field, AppError};

pub struct AuthController {
    users: UserStore,
    jwt: JwtService,
}

impl AuthController {
    pub fn new(users: UserStore, config: &EnvironmentConfig) -> Self {
        Self {
            users,
            jwt: JwtService::new(config),
        }
    }

    /// Login con email/password, devuelve un token Bearer
    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginData>, AppError> {
        request.validate()?;

        let email = required_field(request.email, "email")?;
        let password = required_field(request.password, "password")?;

        let user = self
            .users
            .find_by_email(&email)
            .await
            .ok_or_else(invalid_credentials)?;

        let password_ok = bcrypt::verify(&password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verificando password: {}", e)))?;
        if !password_ok {
            return Err(invalid_credentials());
        }

        let token = self.jwt.generate_access_token(&user)?;

        Ok(ApiResponse::success_with_message(
            LoginData {
                user: (&user).into(),
                token,
                token_type: "Bearer".to_string(),
            },
            format!("Connexion réussie! Bienvenue {}", user.display_name),
        ))
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Identifiants incorrects".to_string())
}
