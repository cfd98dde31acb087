use chrono::{NaiveDate, Utc};

use crate::models::technical_visit::{ResultatVisite, TechnicalVisit};
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, AppError};

/// Datos validados para crear una visita técnica
#[derive(Debug)]
pub struct NewTechnicalVisit {
    pub visit_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub result: ResultatVisite,
    pub visit_center: Option<String>,
    pub cost: Option<f64>,
    pub certificate_number: Option<String>,
    pub notes: Option<String>,
}

/// Cambios parciales sobre una visita técnica existente
#[derive(Debug, Default)]
pub struct TechnicalVisitChanges {
    pub visit_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub result: Option<ResultatVisite>,
    pub visit_center: Option<String>,
    pub cost: Option<f64>,
    pub certificate_number: Option<String>,
    pub notes: Option<String>,
}

pub struct TechnicalVisitRepository {
    store: FleetStore,
}

impl TechnicalVisitRepository {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, bus_id: i64, data: NewTechnicalVisit) -> TechnicalVisit {
        let mut tables = self.store.write().await;
        let now = Utc::now();
        let visit = TechnicalVisit {
            id: tables.technical_visits.allocate_id(),
            bus_id,
            visit_date: data.visit_date,
            expiry_date: data.expiry_date,
            result: data.result,
            visit_center: data.visit_center,
            cost: data.cost,
            certificate_number: data.certificate_number,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };
        tables.technical_visits.rows.push(visit.clone());
        visit
    }

    pub async fn find_by_bus_and_id(&self, bus_id: i64, id: i64) -> Option<TechnicalVisit> {
        let tables = self.store.read().await;
        tables
            .technical_visits
            .rows
            .iter()
            .find(|v| v.bus_id == bus_id && v.id == id)
            .cloned()
    }

    /// Visitas de un bus, fecha de visita descendente
    pub async fn list_by_bus(&self, bus_id: i64) -> Vec<TechnicalVisit> {
        let tables = self.store.read().await;
        let mut rows: Vec<TechnicalVisit> = tables
            .technical_visits
            .rows
            .iter()
            .filter(|v| v.bus_id == bus_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
        rows
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        changes: TechnicalVisitChanges,
    ) -> Result<TechnicalVisit, AppError> {
        let mut tables = self.store.write().await;
        let current = tables
            .technical_visits
            .rows
            .iter_mut()
            .find(|v| v.bus_id == bus_id && v.id == id)
            .ok_or_else(|| not_found_error("Visite technique"))?;

        current.visit_date = changes.visit_date.unwrap_or(current.visit_date);
        current.expiry_date = changes.expiry_date.unwrap_or(current.expiry_date);
        current.result = changes.result.unwrap_or(current.result);
        current.visit_center = changes.visit_center.or(current.visit_center.take());
        current.cost = changes.cost.or(current.cost);
        current.certificate_number = changes
            .certificate_number
            .or(current.certificate_number.take());
        current.notes = changes.notes.or(current.notes.take());
        current.updated_at = Utc::now();

        Ok(current.clone())
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        let mut tables = self.store.write().await;
        let pos = tables
            .technical_visits
            .rows
            .iter()
            .position(|v| v.bus_id == bus_id && v.id == id)
            .ok_or_else(|| not_found_error("Visite technique"))?;
        tables.technical_visits.rows.remove(pos);
        Ok(())
    }
}
