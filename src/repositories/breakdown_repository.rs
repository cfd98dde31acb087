use chrono::{NaiveDate, Utc};

use crate::models::breakdown::{Breakdown, StatutReparation};
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, AppError};

/// Datos validados para crear una panne
#[derive(Debug)]
pub struct NewBreakdown {
    pub date_panne: NaiveDate,
    pub description_probleme: String,
    pub diagnostic_mecanicien: String,
    pub reparation_effectuee: String,
    pub statut_reparation: StatutReparation,
    pub kilometrage: Option<i64>,
    pub piece_remplacee: Option<String>,
    pub prix_piece: Option<f64>,
    pub facture_photo: Option<String>,
    pub notes_complementaires: Option<String>,
}

/// Cambios parciales sobre una panne existente
#[derive(Debug, Default)]
pub struct BreakdownChanges {
    pub date_panne: Option<NaiveDate>,
    pub description_probleme: Option<String>,
    pub diagnostic_mecanicien: Option<String>,
    pub reparation_effectuee: Option<String>,
    pub statut_reparation: Option<StatutReparation>,
    pub kilometrage: Option<i64>,
    pub piece_remplacee: Option<String>,
    pub prix_piece: Option<f64>,
    pub facture_photo: Option<String>,
    pub notes_complementaires: Option<String>,
}

pub struct BreakdownRepository {
    store: FleetStore,
}

impl BreakdownRepository {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, bus_id: i64, data: NewBreakdown, created_by: i64) -> Breakdown {
        let mut tables = self.store.write().await;
        let now = Utc::now();
        let breakdown = Breakdown {
            id: tables.breakdowns.allocate_id(),
            bus_id,
            date_panne: data.date_panne,
            description_probleme: data.description_probleme,
            diagnostic_mecanicien: data.diagnostic_mecanicien,
            reparation_effectuee: data.reparation_effectuee,
            statut_reparation: data.statut_reparation,
            kilometrage: data.kilometrage,
            piece_remplacee: data.piece_remplacee,
            prix_piece: data.prix_piece,
            facture_photo: data.facture_photo,
            notes_complementaires: data.notes_complementaires,
            created_by,
            created_at: now,
            updated_at: now,
        };
        tables.breakdowns.rows.push(breakdown.clone());
        breakdown
    }

    pub async fn find_by_bus_and_id(&self, bus_id: i64, id: i64) -> Option<Breakdown> {
        let tables = self.store.read().await;
        tables
            .breakdowns
            .rows
            .iter()
            .find(|b| b.bus_id == bus_id && b.id == id)
            .cloned()
    }

    /// Pannes de un bus, fecha de avería descendente
    pub async fn list_by_bus(&self, bus_id: i64) -> Vec<Breakdown> {
        let tables = self.store.read().await;
        let mut rows: Vec<Breakdown> = tables
            .breakdowns
            .rows
            .iter()
            .filter(|b| b.bus_id == bus_id)
            .cloned()
            .collect();
        // sort estable: los empates conservan el orden de inserción
        rows.sort_by(|a, b| b.date_panne.cmp(&a.date_panne));
        rows
    }

    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        changes: BreakdownChanges,
    ) -> Result<Breakdown, AppError> {
        let mut tables = self.store.write().await;
        let current = tables
            .breakdowns
            .rows
            .iter_mut()
            .find(|b| b.bus_id == bus_id && b.id == id)
            .ok_or_else(|| not_found_error("Panne"))?;

        current.date_panne = changes.date_panne.unwrap_or(current.date_panne);
        current.description_probleme = changes
            .description_probleme
            .unwrap_or_else(|| current.description_probleme.clone());
        current.diagnostic_mecanicien = changes
            .diagnostic_mecanicien
            .unwrap_or_else(|| current.diagnostic_mecanicien.clone());
        current.reparation_effectuee = changes
            .reparation_effectuee
            .unwrap_or_else(|| current.reparation_effectuee.clone());
        current.statut_reparation = changes
            .statut_reparation
            .unwrap_or(current.statut_reparation);
        current.kilometrage = changes.kilometrage.or(current.kilometrage);
        current.piece_remplacee = changes.piece_remplacee.or(current.piece_remplacee.take());
        current.prix_piece = changes.prix_piece.or(current.prix_piece);
        current.facture_photo = changes.facture_photo.or(current.facture_photo.take());
        current.notes_complementaires = changes
            .notes_complementaires
            .or(current.notes_complementaires.take());
        current.updated_at = Utc::now();

        Ok(current.clone())
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        let mut tables = self.store.write().await;
        let pos = tables
            .breakdowns
            .rows
            .iter()
            .position(|b| b.bus_id == bus_id && b.id == id)
            .ok_or_else(|| not_found_error("Panne"))?;
        tables.breakdowns.rows.remove(pos);
        Ok(())
    }
}
