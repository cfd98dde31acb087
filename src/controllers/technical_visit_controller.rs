use chrono::NaiveDate;
use validator::Validate;

use crate::dto::technical_visit_dto::{CreateTechnicalVisitRequest, UpdateTechnicalVisitRequest};
use crate::models::technical_visit::{ResultatVisite, TechnicalVisit};
use crate::repositories::technical_visit_repository::{
    NewTechnicalVisit, TechnicalVisitChanges, TechnicalVisitRepository,
};
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, required_field, validation_error, AppError};

pub struct TechnicalVisitController {
    repository: TechnicalVisitRepository,
}

impl TechnicalVisitController {
    pub fn new(store: FleetStore) -> Self {
        Self {
            repository: TechnicalVisitRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        bus_id: i64,
        request: CreateTechnicalVisitRequest,
    ) -> Result<TechnicalVisit, AppError> {
        request.validate()?;

        let visit_date = required_field(request.visit_date, "visit_date")?;
        let expiry_date = required_field(request.expiry_date, "expiry_date")?;
        check_expiry_after_visit(expiry_date, visit_date)?;

        let data = NewTechnicalVisit {
            visit_date,
            expiry_date,
            result: parse_resultat(&required_field(request.result, "result")?)?,
            visit_center: request.visit_center,
            cost: request.cost,
            certificate_number: request.certificate_number,
            notes: request.notes,
        };

        Ok(self.repository.create(bus_id, data).await)
    }

    pub async fn list(&self, bus_id: i64) -> Vec<TechnicalVisit> {
        self.repository.list_by_bus(bus_id).await
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        request: UpdateTechnicalVisitRequest,
    ) -> Result<TechnicalVisit, AppError> {
        let current = self
            .repository
            .find_by_bus_and_id(bus_id, id)
            .await
            .ok_or_else(|| not_found_error("Visite technique"))?;

        request.validate()?;

        // El orden de fechas se verifica sobre los valores efectivos del merge
        let visit_date = request.visit_date.unwrap_or(current.visit_date);
        let expiry_date = request.expiry_date.unwrap_or(current.expiry_date);
        check_expiry_after_visit(expiry_date, visit_date)?;

        let result = match request.result {
            Some(value) => Some(parse_resultat(&value)?),
            None => None,
        };

        let changes = TechnicalVisitChanges {
            visit_date: request.visit_date,
            expiry_date: request.expiry_date,
            result,
            visit_center: request.visit_center,
            cost: request.cost,
            certificate_number: request.certificate_number,
            notes: request.notes,
        };

        self.repository.update(bus_id, id, changes).await
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        self.repository.delete(bus_id, id).await
    }
}

/// after:visit_date estricto
fn check_expiry_after_visit(expiry_date: NaiveDate, visit_date: NaiveDate) -> Result<(), AppError> {
    if expiry_date <= visit_date {
        return Err(validation_error(
            "expiry_date",
            "Le champ expiry_date doit être une date postérieure à visit_date.".to_string(),
        ));
    }
    Ok(())
}

fn parse_resultat(value: &str) -> Result<ResultatVisite, AppError> {
    ResultatVisite::from_str(value).ok_or_else(|| {
        validation_error(
            "result",
            "Le résultat doit être Favorable ou Défavorable.".to_string(),
        )
    })
}
