//! Rutas de la API
//!
//! Construcción del router principal: endpoints públicos (ping, login)
//! y recursos de mantenimiento anidados bajo /api/buses/:bus_id,
//! protegidos por el middleware de autenticación.

pub mod auth_routes;
pub mod breakdown_routes;
pub mod technical_visit_routes;
pub mod insurance_routes;
pub mod vidange_routes;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest(
            "/api/buses/:bus_id/breakdowns",
            breakdown_routes::create_breakdown_router(),
        )
        .nest(
            "/api/buses/:bus_id/technical-visits",
            technical_visit_routes::create_technical_visit_router(),
        )
        .nest(
            "/api/buses/:bus_id/insurance-records",
            insurance_routes::create_insurance_router(),
        )
        .nest(
            "/api/buses/:bus_id/vidanges",
            vidange_routes::create_vidange_router(),
        )
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    let cors = if state.config.is_production() {
        cors_middleware_with_origins(&state.config.cors_origins)
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/api/ping", get(ping))
        .nest("/api/auth", auth_routes::create_auth_router())
        .merge(protected)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn ping() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Art Luxury Bus API",
        "version": "1.0",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
