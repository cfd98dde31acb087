use chrono::NaiveDate;
use validator::Validate;

use crate::dto::insurance_dto::{CreateInsuranceRequest, UpdateInsuranceRequest};
use crate::models::insurance::InsuranceRecord;
use crate::repositories::insurance_repository::{
    InsuranceChanges, InsuranceRepository, NewInsurance,
};
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, required_field, validation_error, AppError};

pub struct InsuranceController {
    repository: InsuranceRepository,
}

impl InsuranceController {
    pub fn new(store: FleetStore) -> Self {
        Self {
            repository: InsuranceRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        bus_id: i64,
        request: CreateInsuranceRequest,
    ) -> Result<InsuranceRecord, AppError> {
        request.validate()?;

        let start_date = required_field(request.start_date, "start_date")?;
        let expiry_date = required_field(request.expiry_date, "expiry_date")?;
        check_expiry_after_start(expiry_date, start_date)?;

        let data = NewInsurance {
            insurance_company: required_field(request.insurance_company, "insurance_company")?,
            policy_number: required_field(request.policy_number, "policy_number")?,
            start_date,
            expiry_date,
            coverage_type: required_field(request.coverage_type, "coverage_type")?,
            premium: required_field(request.premium, "premium")?,
            notes: request.notes,
        };

        Ok(self.repository.create(bus_id, data).await)
    }

    pub async fn list(&self, bus_id: i64) -> Vec<InsuranceRecord> {
        self.repository.list_by_bus(bus_id).await
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        request: UpdateInsuranceRequest,
    ) -> Result<InsuranceRecord, AppError> {
        let current = self
            .repository
            .find_by_bus_and_id(bus_id, id)
            .await
            .ok_or_else(|| not_found_error("Assurance"))?;

        request.validate()?;

        let start_date = request.start_date.unwrap_or(current.start_date);
        let expiry_date = request.expiry_date.unwrap_or(current.expiry_date);
        check_expiry_after_start(expiry_date, start_date)?;

        let changes = InsuranceChanges {
            insurance_company: request.insurance_company,
            policy_number: request.policy_number,
            start_date: request.start_date,
            expiry_date: request.expiry_date,
            coverage_type: request.coverage_type,
            premium: request.premium,
            notes: request.notes,
        };

        self.repository.update(bus_id, id, changes).await
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        self.repository.delete(bus_id, id).await
    }
}

/// after:start_date estricto
fn check_expiry_after_start(expiry_date: NaiveDate, start_date: NaiveDate) -> Result<(), AppError> {
    if expiry_date <= start_date {
        return Err(validation_error(
            "expiry_date",
            "Le champ expiry_date doit être une date postérieure à start_date.".to_string(),
        ));
    }
    Ok(())
}
