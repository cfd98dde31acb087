use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};

use crate::controllers::vidange_controller::VidangeController;
use crate::dto::vidange_dto::{CreateVidangeRequest, UpdateVidangeRequest};
use crate::models::vidange::Vidange;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vidange_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vidange).get(list_vidanges))
        .route("/:id", put(update_vidange).delete(delete_vidange))
}

async fn create_vidange(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
    Json(request): Json<CreateVidangeRequest>,
) -> Result<(StatusCode, Json<Vidange>), AppError> {
    let controller = VidangeController::new(state.store.clone());
    let vidange = controller.create(bus_id, request).await?;
    Ok((StatusCode::CREATED, Json(vidange)))
}

async fn list_vidanges(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
) -> Result<Json<Vec<Vidange>>, AppError> {
    let controller = VidangeController::new(state.store.clone());
    Ok(Json(controller.list(bus_id).await))
}

async fn update_vidange(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
    Json(request): Json<UpdateVidangeRequest>,
) -> Result<Json<Vidange>, AppError> {
    let controller = VidangeController::new(state.store.clone());
    let vidange = controller.update(bus_id, id, request).await?;
    Ok(Json(vidange))
}

async fn delete_vidange(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VidangeController::new(state.store.clone());
    controller.delete(bus_id, id).await?;
    Ok(Json(serde_json::json!({
        "message": "Vidange supprimée avec succès"
    })))
}
