//! Middleware de autenticación JWT
//!
//! Extrae el token Bearer, lo valida y verifica que el usuario siga
//! existiendo. El usuario autenticado se inyecta en las extensions; los
//! handlers lo pasan explícitamente a los controllers (nunca hay estado
//! de autenticación ambiente).

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub display_name: String,
    pub roles: Vec<String>,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token d'autorisation requis".to_string()))?;

    let jwt = JwtService::new(&state.config);
    let user_id = jwt.get_user_id(token)?;

    // Verificar que el usuario sigue existiendo
    let user = state
        .users
        .find_by_id(user_id)
        .await
        .ok_or_else(|| AppError::Unauthorized("Utilisateur non trouvé".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        user_id: user.id,
        display_name: user.display_name.clone(),
        roles: user.roles.clone(),
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}
