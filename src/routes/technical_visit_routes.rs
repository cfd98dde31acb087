use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};

use crate::controllers::technical_visit_controller::TechnicalVisitController;
use crate::dto::technical_visit_dto::{CreateTechnicalVisitRequest, UpdateTechnicalVisitRequest};
use crate::models::technical_visit::TechnicalVisit;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_technical_visit_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_visit).get(list_visits))
        .route("/:id", put(update_visit).delete(delete_visit))
}

async fn create_visit(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
    Json(request): Json<CreateTechnicalVisitRequest>,
) -> Result<(StatusCode, Json<TechnicalVisit>), AppError> {
    let controller = TechnicalVisitController::new(state.store.clone());
    let visit = controller.create(bus_id, request).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

async fn list_visits(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
) -> Result<Json<Vec<TechnicalVisit>>, AppError> {
    let controller = TechnicalVisitController::new(state.store.clone());
    Ok(Json(controller.list(bus_id).await))
}

async fn update_visit(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
    Json(request): Json<UpdateTechnicalVisitRequest>,
) -> Result<Json<TechnicalVisit>, AppError> {
    let controller = TechnicalVisitController::new(state.store.clone());
    let visit = controller.update(bus_id, id, request).await?;
    Ok(Json(visit))
}

async fn delete_visit(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TechnicalVisitController::new(state.store.clone());
    controller.delete(bus_id, id).await?;
    Ok(Json(serde_json::json!({
        "message": "Visite technique supprimée avec succès"
    })))
}
