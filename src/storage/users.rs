//! Store de usuarios
//!
//! Usuarios del sistema con password bcrypt. Incluye los usuarios demo
//! del servidor de pruebas original (admin, manager, chauffeur, agent).

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::models::user::User;

/// Store compartido de usuarios
#[derive(Clone)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Buscar usuario por email (case-insensitive, sin espacios)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim().to_lowercase();
        let users = self.users.read().await;
        users.iter().find(|u| u.email == email).cloned()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    /// Crear el store con los usuarios demo de la aplicación
    pub fn seed_demo() -> Result<Self> {
        let seeds = [
            (
                1,
                "Administrator",
                "admin@admin.com",
                "passer123",
                vec!["Dakar", "Thiès", "Saint-Louis", "Kaolack"],
                "Administrateur",
                "Administrateur Système",
                vec!["admin", "super_admin"],
                vec![
                    "manage_users",
                    "manage_buses",
                    "manage_tickets",
                    "view_reports",
                    "manage_settings",
                ],
            ),
            (
                2,
                "Manager Transport",
                "manager@artluxurybus.com",
                "manager123",
                vec!["Dakar", "Thiès"],
                "Manager Transport",
                "Responsable Transport",
                vec!["manager"],
                vec!["manage_buses", "manage_tickets", "view_reports"],
            ),
            (
                3,
                "Mamadou Diop",
                "chauffeur@artluxurybus.com",
                "chauffeur123",
                vec!["Dakar"],
                "Mamadou Diop",
                "Chauffeur",
                vec!["driver"],
                vec!["view_schedule", "update_status"],
            ),
            (
                4,
                "Fatou Sall",
                "agent@artluxurybus.com",
                "agent123",
                vec!["Thiès"],
                "Fatou Sall",
                "Agent de Vente",
                vec!["agent"],
                vec!["sell_tickets", "view_passengers"],
            ),
        ];

        let mut users = Vec::with_capacity(seeds.len());
        for (id, name, email, password, cities, display_name, display_role, roles, permissions) in
            seeds
        {
            users.push(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                // cost 4: usuarios demo
                password_hash: bcrypt::hash(password, 4)?,
                profile_photo: None,
                cities: cities.into_iter().map(String::from).collect(),
                display_name: display_name.to_string(),
                display_role: display_role.to_string(),
                roles: roles.into_iter().map(String::from).collect(),
                permissions: permissions.into_iter().map(String::from).collect(),
            });
        }

        Ok(Self::new(users))
    }
}
