//! Store en memoria de los registros de mantenimiento
//!
//! Una tabla por tipo de registro, protegidas por un único RwLock.
//! Cada operación de la API toma el lock una sola vez, así que cada
//! mutación es atómica a nivel de request (last-writer-wins).

use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::breakdown::Breakdown;
use crate::models::insurance::InsuranceRecord;
use crate::models::technical_visit::TechnicalVisit;
use crate::models::vidange::Vidange;

/// Tabla en memoria con ids incrementales
#[derive(Debug)]
pub struct Table<T> {
    next_id: i64,
    pub rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    /// Asignar el siguiente id de la tabla
    pub fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Tablas de mantenimiento
#[derive(Debug, Default)]
pub struct FleetTables {
    pub breakdowns: Table<Breakdown>,
    pub technical_visits: Table<TechnicalVisit>,
    pub insurance_records: Table<InsuranceRecord>,
    pub vidanges: Table<Vidange>,
}

/// Store compartido de la flota
#[derive(Clone)]
pub struct FleetStore {
    inner: Arc<RwLock<FleetTables>>,
}

impl FleetStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FleetTables::default())),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, FleetTables> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, FleetTables> {
        self.inner.write().await
    }
}

impl Default for FleetStore {
    fn default() -> Self {
        Self::new()
    }
}
