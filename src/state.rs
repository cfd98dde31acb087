//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::EnvironmentConfig;
use crate::storage::{FleetStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: FleetStore,
    pub users: UserStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: FleetStore, users: UserStore, config: EnvironmentConfig) -> Self {
        Self {
            store,
            users,
            config,
        }
    }
}
