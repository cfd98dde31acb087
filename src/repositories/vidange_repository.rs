use chrono::{NaiveDate, Utc};

use crate::models::vidange::Vidange;
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, AppError};

/// Datos validados para crear una vidange
#[derive(Debug)]
pub struct NewVidange {
    pub vidange_type: String,
    pub vidange_date: Option<NaiveDate>,
    pub next_vidange_date: Option<NaiveDate>,
    pub planned_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub service_provider: Option<String>,
    pub mileage: Option<f64>,
    pub notes: Option<String>,
}

/// Cambios parciales sobre una vidange existente
#[derive(Debug, Default)]
pub struct VidangeChanges {
    pub vidange_type: Option<String>,
    pub vidange_date: Option<NaiveDate>,
    pub next_vidange_date: Option<NaiveDate>,
    pub planned_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub service_provider: Option<String>,
    pub mileage: Option<f64>,
    pub notes: Option<String>,
}

pub struct VidangeRepository {
    store: FleetStore,
}

impl VidangeRepository {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, bus_id: i64, data: NewVidange) -> Vidange {
        let mut tables = self.store.write().await;
        let now = Utc::now();
        let vidange = Vidange {
            id: tables.vidanges.allocate_id(),
            bus_id,
            vidange_type: data.vidange_type,
            vidange_date: data.vidange_date,
            next_vidange_date: data.next_vidange_date,
            planned_date: data.planned_date,
            cost: data.cost,
            service_provider: data.service_provider,
            mileage: data.mileage,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };
        tables.vidanges.rows.push(vidange.clone());
        vidange
    }

    pub async fn find_by_bus_and_id(&self, bus_id: i64, id: i64) -> Option<Vidange> {
        let tables = self.store.read().await;
        tables
            .vidanges
            .rows
            .iter()
            .find(|v| v.bus_id == bus_id && v.id == id)
            .cloned()
    }

    /// Vidanges de un bus, fecha de vidange descendente (sin fecha al final)
    pub async fn list_by_bus(&self, bus_id: i64) -> Vec<Vidange> {
        let tables = self.store.read().await;
        let mut rows: Vec<Vidange> = tables
            .vidanges
            .rows
            .iter()
            .filter(|v| v.bus_id == bus_id)
            .cloned()
            .collect();
        // None ordena como el mínimo, así que el descendente lo deja al final
        rows.sort_by(|a, b| b.vidange_date.cmp(&a.vidange_date));
        rows
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        changes: VidangeChanges,
    ) -> Result<Vidange, AppError> {
        let mut tables = self.store.write().await;
        let current = tables
            .vidanges
            .rows
            .iter_mut()
            .find(|v| v.bus_id == bus_id && v.id == id)
            .ok_or_else(|| not_found_error("Vidange"))?;

        current.vidange_type = changes
            .vidange_type
            .unwrap_or_else(|| current.vidange_type.clone());
        current.vidange_date = changes.vidange_date.or(current.vidange_date);
        current.next_vidange_date = changes.next_vidange_date.or(current.next_vidange_date);
        current.planned_date = changes.planned_date.or(current.planned_date);
        current.cost = changes.cost.or(current.cost);
        current.service_provider = changes.service_provider.or(current.service_provider.take());
        current.mileage = changes.mileage.or(current.mileage);
        current.notes = changes.notes.or(current.notes.take());
        current.updated_at = Utc::now();

        Ok(current.clone())
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        let mut tables = self.store.write().await;
        let pos = tables
            .vidanges
            .rows
            .iter()
            .position(|v| v.bus_id == bus_id && v.id == id)
            .ok_or_else(|| not_found_error("Vidange"))?;
        tables.vidanges.rows.remove(pos);
        Ok(())
    }
}
