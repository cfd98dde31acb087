use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Extension, Json, Router,
};

use crate::controllers::breakdown_controller::BreakdownController;
use crate::dto::breakdown_dto::{CreateBreakdownRequest, UpdateBreakdownRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::breakdown::Breakdown;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_breakdown_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_breakdown).get(list_breakdowns))
        .route("/:id", put(update_breakdown).delete(delete_breakdown))
}

async fn create_breakdown(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(bus_id): Path<i64>,
    Json(request): Json<CreateBreakdownRequest>,
) -> Result<(StatusCode, Json<Breakdown>), AppError> {
    let controller = BreakdownController::new(state.store.clone());
    let breakdown = controller.create(bus_id, user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(breakdown)))
}

async fn list_breakdowns(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
) -> Result<Json<Vec<Breakdown>>, AppError> {
    let controller = BreakdownController::new(state.store.clone());
    Ok(Json(controller.list(bus_id).await))
}

async fn update_breakdown(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
    Json(request): Json<UpdateBreakdownRequest>,
) -> Result<Json<Breakdown>, AppError> {
    let controller = BreakdownController::new(state.store.clone());
    let breakdown = controller.update(bus_id, id, request).await?;
    Ok(Json(breakdown))
}

async fn delete_breakdown(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BreakdownController::new(state.store.clone());
    controller.delete(bus_id, id).await?;
    Ok(Json(serde_json::json!({
        "message": "Panne supprimée avec succès"
    })))
}
