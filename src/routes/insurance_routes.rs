use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};

use crate::controllers::insurance_controller::InsuranceController;
use crate::dto::insurance_dto::{CreateInsuranceRequest, UpdateInsuranceRequest};
use crate::models::insurance::InsuranceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_insurance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_insurance).get(list_insurances))
        .route("/:id", put(update_insurance).delete(delete_insurance))
}

async fn create_insurance(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
    Json(request): Json<CreateInsuranceRequest>,
) -> Result<(StatusCode, Json<InsuranceRecord>), AppError> {
    let controller = InsuranceController::new(state.store.clone());
    let insurance = controller.create(bus_id, request).await?;
    Ok((StatusCode::CREATED, Json(insurance)))
}

async fn list_insurances(
    State(state): State<AppState>,
    Path(bus_id): Path<i64>,
) -> Result<Json<Vec<InsuranceRecord>>, AppError> {
    let controller = InsuranceController::new(state.store.clone());
    Ok(Json(controller.list(bus_id).await))
}

async fn update_insurance(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
    Json(request): Json<UpdateInsuranceRequest>,
) -> Result<Json<InsuranceRecord>, AppError> {
    let controller = InsuranceController::new(state.store.clone());
    let insurance = controller.update(bus_id, id, request).await?;
    Ok(Json(insurance))
}

async fn delete_insurance(
    State(state): State<AppState>,
    Path((bus_id, id)): Path<(i64, i64)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = InsuranceController::new(state.store.clone());
    controller.delete(bus_id, id).await?;
    Ok(Json(serde_json::json!({
        "message": "Assurance supprimée avec succès"
    })))
}
