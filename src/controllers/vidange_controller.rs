use validator::Validate;

use crate::dto::vidange_dto::{CreateVidangeRequest, UpdateVidangeRequest};
use crate::models::vidange::Vidange;
use crate::repositories::vidange_repository::{NewVidange, VidangeChanges, VidangeRepository};
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, rename_error_field, required_field, AppError};

pub struct VidangeController {
    repository: VidangeRepository,
}

impl VidangeController {
    pub fn new(store: FleetStore) -> Self {
        Self {
            repository: VidangeRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        bus_id: i64,
        request: CreateVidangeRequest,
    ) -> Result<Vidange, AppError> {
        // El campo se llama `type` en el wire format
        request
            .validate()
            .map_err(|e| AppError::Validation(rename_error_field(e, "vidange_type", "type")))?;

        let data = NewVidange {
            vidange_type: required_field(request.vidange_type, "type")?,
            vidange_date: request.vidange_date,
            next_vidange_date: request.next_vidange_date,
            planned_date: request.planned_date,
            cost: request.cost,
            service_provider: request.service_provider,
            mileage: request.mileage,
            notes: request.notes,
        };

        Ok(self.repository.create(bus_id, data).await)
    }

    pub async fn list(&self, bus_id: i64) -> Vec<Vidange> {
        self.repository.list_by_bus(bus_id).await
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        request: UpdateVidangeRequest,
    ) -> Result<Vidange, AppError> {
        self.repository
            .find_by_bus_and_id(bus_id, id)
            .await
            .ok_or_else(|| not_found_error("Vidange"))?;

        request
            .validate()
            .map_err(|e| AppError::Validation(rename_error_field(e, "vidange_type", "type")))?;

        let changes = VidangeChanges {
            vidange_type: request.vidange_type,
            vidange_date: request.vidange_date,
            next_vidange_date: request.next_vidange_date,
            planned_date: request.planned_date,
            cost: request.cost,
            service_provider: request.service_provider,
            mileage: request.mileage,
            notes: request.notes,
        };

        self.repository.update(bus_id, id, changes).await
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        self.repository.delete(bus_id, id).await
    }
}
