use validator::Validate;

use crate::dto::breakdown_dto::{CreateBreakdownRequest, UpdateBreakdownRequest};
use crate::models::breakdown::{Breakdown, StatutReparation};
use crate::repositories::breakdown_repository::{
    BreakdownChanges, BreakdownRepository, NewBreakdown,
};
use crate::storage::FleetStore;
use crate::utils::errors::{not_found_error, required_field, validation_error, AppError};

pub struct BreakdownController {
    repository: BreakdownRepository,
}

impl BreakdownController {
    pub fn new(store: FleetStore) -> Self {
        Self {
            repository: BreakdownRepository::new(store),
        }
    }

    /// Crear una panne. El bus_id viene del path y el created_by del
    /// usuario autenticado, nunca del body.
    pub async fn create(
        &self,
        bus_id: i64,
        created_by: i64,
        request: CreateBreakdownRequest,
    ) -> Result<Breakdown, AppError> {
        request.validate()?;

        let statut = parse_statut(&required_field(request.statut_reparation, "statut_reparation")?)?;
        let data = NewBreakdown {
            date_panne: required_field(request.date_panne, "date_panne")?,
            description_probleme: required_field(
                request.description_probleme,
                "description_probleme",
            )?,
            diagnostic_mecanicien: required_field(
                request.diagnostic_mecanicien,
                "diagnostic_mecanicien",
            )?,
            reparation_effectuee: required_field(
                request.reparation_effectuee,
                "reparation_effectuee",
            )?,
            statut_reparation: statut,
            kilometrage: request.kilometrage,
            piece_remplacee: request.piece_remplacee,
            prix_piece: request.prix_piece,
            facture_photo: request.facture_photo,
            notes_complementaires: request.notes_complementaires,
        };

        Ok(self.repository.create(bus_id, data, created_by).await)
    }

    pub async fn list(&self, bus_id: i64) -> Vec<Breakdown> {
        self.repository.list_by_bus(bus_id).await
    }

    /// Update parcial: los campos ausentes conservan su valor
    pub async fn update(
        &self,
        bus_id: i64,
        id: i64,
        request: UpdateBreakdownRequest,
    ) -> Result<Breakdown, AppError> {
        // Resolver primero: 404 si no existe bajo este bus
        self.repository
            .find_by_bus_and_id(bus_id, id)
            .await
            .ok_or_else(|| not_found_error("Panne"))?;

        request.validate()?;

        let statut = match request.statut_reparation {
            Some(value) => Some(parse_statut(&value)?),
            None => None,
        };

        let changes = BreakdownChanges {
            date_panne: request.date_panne,
            description_probleme: request.description_probleme,
            diagnostic_mecanicien: request.diagnostic_mecanicien,
            reparation_effectuee: request.reparation_effectuee,
            statut_reparation: statut,
            kilometrage: request.kilometrage,
            piece_remplacee: request.piece_remplacee,
            prix_piece: request.prix_piece,
            facture_photo: request.facture_photo,
            notes_complementaires: request.notes_complementaires,
        };

        self.repository.update(bus_id, id, changes).await
    }

    pub async fn delete(&self, bus_id: i64, id: i64) -> Result<(), AppError> {
        self.repository.delete(bus_id, id).await
    }
}

fn parse_statut(value: &str) -> Result<StatutReparation, AppError> {
    StatutReparation::from_str(value).ok_or_else(|| {
        validation_error(
            "statut_reparation",
            "Le statut de réparation doit être en_cours, terminee ou en_attente_pieces."
                .to_string(),
        )
    })
}
