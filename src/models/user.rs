//! Modelo de User
//!
//! Usuarios de la aplicación (administradores, managers, chauffeurs,
//! agents). El password_hash nunca se serializa hacia la API.

use serde::Serialize;

/// Usuario del sistema
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_photo: Option<String>,
    pub cities: Vec<String>,
    pub display_name: String,
    pub display_role: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

/// Vista pública del usuario (sin password)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub profile_photo: Option<String>,
    pub cities: Vec<String>,
    pub display_name: String,
    pub display_role: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            profile_photo: user.profile_photo.clone(),
            cities: user.cities.clone(),
            display_name: user.display_name.clone(),
            display_role: user.display_role.clone(),
            roles: user.roles.clone(),
            permissions: user.permissions.clone(),
        }
    }
}
