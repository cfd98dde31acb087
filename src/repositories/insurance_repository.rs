use chrono::{NaiveDate, Utc};

use crate::models::insurance::InsuranceRecord;
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, AppError};

/// Datos validados para crear una assurance
#[derive(Debug)]
pub struct NewInsurance {
    pub insurance_company: String,
    pub policy_number: String,
    pub start_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub coverage_type: String,
    pub premium: f64,
    pub notes: Option<String>,
}

/// Cambios parciales sobre una assurance existente
#[derive(Debug, Default)]
pub struct InsuranceChanges {
    pub insurance_company: Option<String>,
    pub policy_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub coverage_type: Option<String>,
    pub premium: Option<f64>,
    pub notes: Option<String>,
}

pub struct InsuranceRepository {
    store: FleetStore,
}

impl InsuranceRepository {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, bus_id: i64, data: NewInsurance) -> InsuranceRecord {
        let mut tables = self.store.write().await;
        let now = Utc::now();
        let insurance = InsuranceRecord {
            id: tables.insurance_records.allocate_id(),
            bus_id,
            insurance_company: data.insurance_company,
            policy_number: data.policy_number,
            start_date: data.start_date,
            expiry_date: data.expiry_date,
            coverage_type: data.coverage_type,
            premium: data.premium,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };
        tables.insurance_records.rows.push(insurance.clone());
        insurance
    }

    pub async fn find_by_bus_and_id(&self, bus_id: i64, id: i64) -> Option<InsuranceRecord> {
        let tables = self.store.read().await;
        tables
            .insurance_records
            .rows
            .iter()
            .find(|r| r.bus_id == bus_id && r.id == id)
            .cloned()
    }

    /// Assurances de un bus, fecha de inicio descendente
    pub async fn list_by_bus(&self, bus_id: i64) -> Vec<InsuranceRecord> {
        let tables = self.store.read().await;
        let mut rows: Vec<InsuranceRecord> = tables
            .insurance_records
            .rows
            .iter()
            .filter(|r| r.bus_id == bus_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        rows
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        changes: InsuranceChanges,
    ) -> Result<InsuranceRecord, AppError> {
        let mut tables = self.store.write().await;
        let current = tables
            .insurance_records
            .rows
            .iter_mut()
            .find(|r| r.bus_id == bus_id && r.id == id)
            .ok_or_else(|| not_found_error("Assurance"))?;

        current.insurance_company = changes
            .insurance_company
            .unwrap_or_else(|| current.insurance_company.clone());
        current.policy_number = changes
            .policy_number
            .unwrap_or_else(|| current.policy_number.clone());
        current.start_date = changes.start_date.unwrap_or(current.start_date);
        current.expiry_date = changes.expiry_date.unwrap_or(current.expiry_date);
        current.coverage_type = changes
            .coverage_type
            .unwrap_or_else(|| current.coverage_type.clone());
        current.premium = changes.premium.unwrap_or(current.premium);
        current.notes = changes.notes.or(current.notes.take());
        current.updated_at = Utc::now();

        Ok(current.clone())
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        let mut tables = self.store.write().await;
        let pos = tables
            .insurance_records
            .rows
            .iter()
            .position(|r| r.bus_id == bus_id && r.id == id)
            .ok_or_else(|| not_found_error("Assurance"))?;
        tables.insurance_records.rows.remove(pos);
        Ok(())
    }
}
